use crate::backend_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_DATABASE, DEFAULT_STORE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentStoreConfig {
    pub project_id: Option<String>,
    pub database: String,
    pub base_url: String,
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            database: String::from(DEFAULT_STORE_DATABASE),
            base_url: String::from(DEFAULT_STORE_URL),
        }
    }
}

impl DocumentStoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(project) = &self.project_id
            && (project.trim().is_empty() || project.contains('/'))
        {
            return Err(ConfigError::document_store(format!(
                "document_store.project_id must be a non-empty id without '/', got '{project}'"
            )));
        }

        if self.database.trim().is_empty() || self.database.contains('/') {
            return Err(ConfigError::document_store(format!(
                "document_store.database must be a non-empty id without '/', got '{}'",
                self.database
            )));
        }

        if !is_http_url(&self.base_url) {
            return Err(ConfigError::document_store(format!(
                "document_store.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    pub fn require_project_id(&self) -> ConfigErrorResult<&str> {
        self.project_id.as_deref().ok_or_else(|| {
            ConfigError::document_store("document_store.project_id (EP_STORE_PROJECT_ID) is not set")
        })
    }
}
