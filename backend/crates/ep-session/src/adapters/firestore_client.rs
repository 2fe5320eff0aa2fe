use crate::adapters::firestore_value::{decode_fields, document_id, encode_fields};
use crate::{DocumentStore, INSTITUTIONS_COLLECTION, SessionError, SessionResult, USERS_COLLECTION};

use ep_config::DocumentStoreConfig;
use ep_core::{IdToken, Institution, UserProfileDocument};

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value, json};

const LIST_PAGE_SIZE: &str = "300";

/// Document store backed by the Firestore REST API (v1).
pub struct FirestoreClient {
    documents_url: Url,
    client: ReqwestClient,
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl FirestoreClient {
    /// # Arguments
    /// * `base_url` - Firestore host (e.g., "https://firestore.googleapis.com")
    /// * `project_id` - Cloud project owning the database
    /// * `database` - Database id, usually "(default)"
    pub fn new(
        base_url: &str,
        project_id: &str,
        database: &str,
        request_timeout: Duration,
    ) -> SessionResult<Self> {
        let client = ReqwestClient::builder().timeout(request_timeout).build()?;

        let mut documents_url = Url::parse(base_url)
            .map_err(|e| SessionError::document_store(format!("invalid URL {base_url}: {e}")))?;
        documents_url
            .path_segments_mut()
            .map_err(|()| SessionError::document_store(format!("invalid URL {base_url}")))?
            .pop_if_empty()
            .extend(["v1", "projects", project_id, "databases", database, "documents"]);

        Ok(Self {
            documents_url,
            client,
        })
    }

    pub fn from_config(config: &DocumentStoreConfig, request_timeout: Duration) -> SessionResult<Self> {
        let project_id = config.require_project_id()?;
        Self::new(&config.base_url, project_id, &config.database, request_timeout)
    }

    /// Ids always land in one percent-encoded path segment.
    fn url(&self, collection: &str, id: Option<&str>) -> SessionResult<Url> {
        let mut url = self.documents_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| SessionError::document_store("document store URL cannot be a base"))?;
            segments.push(collection);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: Option<&IdToken>) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);
        match token {
            Some(token) => req.bearer_auth(token.as_str()),
            None => req,
        }
    }

    /// `Ok(None)` for 404, error for any other non-2xx.
    async fn execute(&self, req: reqwest::RequestBuilder) -> SessionResult<Option<Response>> {
        let response = req
            .send()
            .await
            .map_err(|e| SessionError::document_store(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status.is_success() {
            return Ok(Some(response));
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");

        Err(SessionError::document_store(format!("{status}: {message}")))
    }

    async fn read_document(response: Response) -> SessionResult<Document> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn to_institution(document: Document) -> Option<Institution> {
        let id = document_id(&document.name).to_string();
        let mut object = decode_fields(document.fields.as_ref());
        object.insert("id".into(), Value::String(id.clone()));

        match serde_json::from_value(Value::Object(object)) {
            Ok(institution) => Some(institution),
            Err(e) => {
                warn!("Skipping malformed institution {id}: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn get_user_profile(
        &self,
        uid: &str,
        token: Option<&IdToken>,
    ) -> SessionResult<Option<UserProfileDocument>> {
        let url = self.url(USERS_COLLECTION, Some(uid))?;
        let Some(response) = self.execute(self.request(Method::GET, url, token)).await? else {
            debug!("No user document for {uid}");
            return Ok(None);
        };

        let document = Self::read_document(response).await?;
        let mut object = decode_fields(document.fields.as_ref());
        object
            .entry("uid")
            .or_insert_with(|| Value::String(uid.to_string()));

        Ok(Some(serde_json::from_value(Value::Object(object))?))
    }

    async fn put_user_profile(
        &self,
        doc: &UserProfileDocument,
        token: Option<&IdToken>,
    ) -> SessionResult<()> {
        let Value::Object(object) = serde_json::to_value(doc)? else {
            return Err(SessionError::document_store("profile did not serialize to an object"));
        };

        let url = self.url(USERS_COLLECTION, Some(&doc.uid))?;
        let body = json!({ "fields": encode_fields(&object) });
        self.execute(self.request(Method::PATCH, url, token).json(&body))
            .await?
            .ok_or_else(|| SessionError::document_store(format!("users/{} not writable", doc.uid)))?;

        Ok(())
    }

    async fn list_institutions(&self, token: Option<&IdToken>) -> SessionResult<Vec<Institution>> {
        let mut institutions = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.url(INSTITUTIONS_COLLECTION, None)?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", LIST_PAGE_SIZE);
                if let Some(page_token) = &page_token {
                    query.append_pair("pageToken", page_token);
                }
            }

            let Some(response) = self.execute(self.request(Method::GET, url, token)).await? else {
                break;
            };
            let bytes = response.bytes().await?;
            let page: ListDocumentsResponse = serde_json::from_slice(&bytes)?;

            institutions.extend(page.documents.into_iter().filter_map(Self::to_institution));

            match page.next_page_token {
                Some(next) if !next.is_empty() => page_token = Some(next),
                _ => break,
            }
        }

        debug!("Loaded {} institutions", institutions.len());
        Ok(institutions)
    }

    async fn get_institution(
        &self,
        institution_id: &str,
        token: Option<&IdToken>,
    ) -> SessionResult<Option<Institution>> {
        let url = self.url(INSTITUTIONS_COLLECTION, Some(institution_id))?;
        let Some(response) = self.execute(self.request(Method::GET, url, token)).await? else {
            return Ok(None);
        };

        let document = Self::read_document(response).await?;
        Ok(Self::to_institution(document))
    }

    async fn claim_institution(
        &self,
        institution_id: &str,
        admin_uid: &str,
        admin_email: &str,
        token: Option<&IdToken>,
    ) -> SessionResult<()> {
        let mut url = self.url(INSTITUTIONS_COLLECTION, Some(institution_id))?;
        url.query_pairs_mut()
            .append_pair("updateMask.fieldPaths", "adminUid")
            .append_pair("updateMask.fieldPaths", "adminEmail")
            .append_pair("updateMask.fieldPaths", "updatedAt")
            .append_pair("currentDocument.exists", "true");

        let mut fields = Map::new();
        fields.insert("adminUid".into(), Value::String(admin_uid.to_string()));
        fields.insert("adminEmail".into(), Value::String(admin_email.to_string()));
        fields.insert("updatedAt".into(), Value::String(Utc::now().to_rfc3339()));
        let body = json!({ "fields": encode_fields(&fields) });

        self.execute(self.request(Method::PATCH, url, token).json(&body))
            .await?
            .ok_or_else(|| SessionError::institution_not_found(institution_id))?;

        debug!("Institution {institution_id} claimed by {admin_uid}");
        Ok(())
    }
}
