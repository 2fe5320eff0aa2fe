use crate::{IdentityProvider, SessionError, SessionResult};

use ep_config::IdentityConfig;
use ep_core::{IdToken, Identity};

use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{Mutex, watch};

/// Tokens this close to expiry are refreshed before being handed out.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(5 * 60);

/// Upper bound on a reported token lifetime; the provider issues one hour.
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

const NETWORK_FAILURE_CODE: &str = "auth/network-request-failed";

/// Email/password identity provider over the Identity Toolkit REST API.
///
/// Holds one signed-in user at a time, like the browser SDK does.
pub struct FirebaseAuthClient {
    api_key: String,
    auth_base_url: String,
    token_base_url: String,
    client: ReqwestClient,
    credentials: Mutex<Option<Credentials>>,
    identity_tx: watch::Sender<Option<Identity>>,
}

struct Credentials {
    id_token: String,
    refresh_token: String,
    expires_at: Instant,
}

impl Credentials {
    fn expires_soon(&self) -> bool {
        self.expires_at.saturating_duration_since(Instant::now()) < TOKEN_REFRESH_MARGIN
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    #[serde(default)]
    email_verified: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'a str,
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

impl FirebaseAuthClient {
    /// # Arguments
    /// * `api_key` - Web API key of the project
    /// * `auth_base_url` - Identity Toolkit host
    /// * `token_base_url` - Secure token host (refresh)
    pub fn new(
        api_key: &str,
        auth_base_url: &str,
        token_base_url: &str,
        request_timeout: Duration,
    ) -> SessionResult<Self> {
        let client = ReqwestClient::builder().timeout(request_timeout).build()?;
        let (identity_tx, _) = watch::channel(None);

        Ok(Self {
            api_key: api_key.to_string(),
            auth_base_url: auth_base_url.trim_end_matches('/').to_string(),
            token_base_url: token_base_url.trim_end_matches('/').to_string(),
            client,
            credentials: Mutex::new(None),
            identity_tx,
        })
    }

    pub fn from_config(config: &IdentityConfig, request_timeout: Duration) -> SessionResult<Self> {
        let api_key = config.require_api_key()?;
        Self::new(
            api_key,
            &config.auth_base_url,
            &config.token_base_url,
            request_timeout,
        )
    }

    fn accounts_url(&self, action: &str) -> String {
        format!("{}/v1/accounts:{}?key={}", self.auth_base_url, action, self.api_key)
    }

    fn token_url(&self) -> String {
        format!("{}/v1/token?key={}", self.token_base_url, self.api_key)
    }

    /// POST JSON and decode the reply; provider errors carry their code.
    async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> SessionResult<R> {
        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            debug!("Identity provider request failed: {e}");
            SessionError::identity_provider(NETWORK_FAILURE_CODE)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let raw = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN")
                .to_string();
            debug!("Identity provider returned {status}: {raw}");
            return Err(SessionError::identity_provider(raw));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Unparseable lifetimes expire immediately, so the next `id_token` refreshes.
    fn expires_at(expires_in: &str) -> Instant {
        let now = Instant::now();
        let lifetime = expires_in
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .unwrap_or(Duration::ZERO)
            .min(MAX_TOKEN_LIFETIME);
        now.checked_add(lifetime).unwrap_or(now)
    }

    async fn email_verified(&self, id_token: &str) -> SessionResult<bool> {
        let lookup: LookupResponse = self
            .post(&self.accounts_url("lookup"), &LookupRequest { id_token })
            .await?;
        Ok(lookup.users.first().is_some_and(|user| user.email_verified))
    }

    /// Stores the credentials from a password exchange and publishes the identity.
    async fn establish(&self, response: PasswordResponse, fallback_email: &str) -> SessionResult<Identity> {
        let email_verified = self.email_verified(&response.id_token).await?;
        let email = if response.email.is_empty() {
            fallback_email.to_string()
        } else {
            response.email
        };

        let identity = Identity {
            uid: response.local_id,
            email,
            email_verified,
        };

        *self.credentials.lock().await = Some(Credentials {
            expires_at: Self::expires_at(&response.expires_in),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
        });
        self.identity_tx.send_replace(Some(identity.clone()));

        Ok(identity)
    }

    async fn refresh(&self, credentials: &mut Credentials) -> SessionResult<()> {
        let refreshed: RefreshResponse = self
            .post(
                &self.token_url(),
                &RefreshRequest {
                    grant_type: "refresh_token",
                    refresh_token: &credentials.refresh_token,
                },
            )
            .await?;

        credentials.expires_at = Self::expires_at(&refreshed.expires_in);
        credentials.id_token = refreshed.id_token;
        credentials.refresh_token = refreshed.refresh_token;
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> SessionResult<Identity> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: PasswordResponse = self
            .post(&self.accounts_url("signInWithPassword"), &request)
            .await?;
        self.establish(response, email).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> SessionResult<Identity> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: PasswordResponse = self.post(&self.accounts_url("signUp"), &request).await?;
        self.establish(response, email).await
    }

    /// Local only: drops the tokens, nothing is revoked remotely.
    async fn sign_out(&self) -> SessionResult<()> {
        self.credentials.lock().await.take();
        self.identity_tx.send_if_modified(|identity| identity.take().is_some());
        Ok(())
    }

    async fn send_email_verification(&self) -> SessionResult<()> {
        let token = self.id_token(false).await?;
        let request = OobCodeRequest {
            request_type: "VERIFY_EMAIL",
            id_token: Some(token.as_str()),
            email: None,
        };
        let _: Value = self.post(&self.accounts_url("sendOobCode"), &request).await?;
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> SessionResult<()> {
        let request = OobCodeRequest {
            request_type: "PASSWORD_RESET",
            id_token: None,
            email: Some(email),
        };
        let _: Value = self.post(&self.accounts_url("sendOobCode"), &request).await?;
        Ok(())
    }

    async fn id_token(&self, force_refresh: bool) -> SessionResult<IdToken> {
        let mut guard = self.credentials.lock().await;
        let credentials = guard.as_mut().ok_or_else(SessionError::not_signed_in)?;

        if force_refresh || credentials.expires_soon() {
            self.refresh(credentials).await?;
        }

        Ok(IdToken::new(credentials.id_token.clone()))
    }

    fn current_identity(&self) -> Option<Identity> {
        self.identity_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }
}
