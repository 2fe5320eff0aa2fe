use crate::{ProfileBackend, SessionError, SessionResult};

use ep_config::BackendConfig;
use ep_core::{IdToken, Role, UserProfile};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const HEALTH_PATH: &str = "/api/health";
const LOGIN_PATH: &str = "/api/auth/login";
const CREATE_PROFILE_PATH: &str = "/api/auth/create-profile";

/// HTTP client for the portal's REST backend
pub struct BackendClient {
    base_url: String,
    health_timeout: Duration,
    client: ReqwestClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    user: UserProfile,
}

#[derive(Serialize)]
struct CreateProfileRequest<'a> {
    uid: &'a str,
    email: &'a str,
    role: Role,
    profile: Value,
}

impl BackendClient {
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:5000")
    /// * `health_timeout` - Upper bound for `GET /api/health`
    /// * `request_timeout` - Upper bound for every other request
    pub fn new(
        base_url: &str,
        health_timeout: Duration,
        request_timeout: Duration,
    ) -> SessionResult<Self> {
        let client = ReqwestClient::builder().timeout(request_timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            health_timeout,
            client,
        })
    }

    pub fn from_config(config: &BackendConfig) -> SessionResult<Self> {
        Self::new(
            &config.base_url,
            config.health_timeout(),
            config.request_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&IdToken>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match token {
            Some(token) => req.bearer_auth(token.as_str()),
            None => req,
        }
    }

    /// Send and turn non-2xx responses into [`SessionError::Backend`].
    async fn execute(&self, req: reqwest::RequestBuilder) -> SessionResult<Response> {
        let response = req
            .send()
            .await
            .map_err(|e| SessionError::backend_unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let (code, message) = Self::parse_error_body(&body);
        debug!("Backend error {status}: {code} {message}");

        Err(SessionError::backend(status.as_u16(), code, message))
    }

    /// Accepts `{error:{code,message}}`, `{error:"..."}` and `{message:"..."}`.
    fn parse_error_body(body: &Value) -> (String, String) {
        let error = body.get("error");

        let code = error
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN")
            .to_string();

        let message = error
            .and_then(|e| e.get("message").or(Some(e)))
            .and_then(Value::as_str)
            .or_else(|| body.get("message").and_then(Value::as_str))
            .unwrap_or("Unknown error")
            .to_string();

        (code, message)
    }
}

#[async_trait]
impl ProfileBackend for BackendClient {
    async fn health(&self) -> SessionResult<()> {
        let req = self
            .request(Method::GET, HEALTH_PATH, None)
            .timeout(self.health_timeout);
        self.execute(req).await?;
        Ok(())
    }

    async fn login(&self, token: &IdToken) -> SessionResult<UserProfile> {
        let body = LoginRequest {
            id_token: token.as_str(),
        };
        let req = self.request(Method::POST, LOGIN_PATH, Some(token)).json(&body);
        let response = self.execute(req).await?;

        let bytes = response.bytes().await?;
        let login: LoginResponse = serde_json::from_slice(&bytes)?;
        Ok(login.user)
    }

    async fn create_profile(&self, token: &IdToken, profile: &UserProfile) -> SessionResult<()> {
        let body = CreateProfileRequest {
            uid: &profile.uid,
            email: &profile.email,
            role: profile.role(),
            profile: profile.profile.to_value()?,
        };
        let req = self
            .request(Method::POST, CREATE_PROFILE_PATH, Some(token))
            .json(&body);
        self.execute(req).await?;
        Ok(())
    }
}
