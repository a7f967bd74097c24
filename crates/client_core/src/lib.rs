//! HTTP client for the remote user collection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::UserId,
    protocol::{User, UserPayload},
};
use tracing::{debug, warn};
use url::Url;

pub mod error;

pub use error::ClientError;
pub use reqwest::StatusCode;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The four verbs of the user collection endpoint.
///
/// Any non-2xx status is a failure; error bodies are never read.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;
    /// Returns the created record when the response body decodes as one.
    async fn create_user(&self, payload: &UserPayload) -> Result<Option<User>>;
    /// Full replace of the record at `id`.
    async fn update_user(&self, id: &UserId, payload: &UserPayload) -> Result<Option<User>>;
    async fn delete_user(&self, id: &UserId) -> Result<()>;
}

pub struct HttpUserApi {
    http: Client,
    users_url: Url,
}

impl HttpUserApi {
    pub fn new(users_url: &str) -> Result<Self> {
        Self::with_timeout(users_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(users_url: &str, timeout: Duration) -> Result<Self> {
        let users_url = normalize_users_url(users_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Builder)?;
        Ok(Self { http, users_url })
    }

    pub fn users_url(&self) -> &str {
        self.users_url.as_str()
    }

    /// Appends `id` as one percent-encoded path segment; any query on the
    /// collection url is kept.
    fn member_url(&self, id: &UserId) -> Result<Url> {
        let mut url = self.users_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::NotABase {
                url: self.users_url.to_string(),
            })?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

/// Validates the collection url and drops any trailing `/` from its path.
pub fn normalize_users_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|source| ClientError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientError::NotABase {
            url: raw.to_string(),
        });
    }
    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);
    Ok(url)
}

fn ensure_success(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(ClientError::BadStatus { status })
    }
}

async fn decode_lenient(res: Response) -> Option<User> {
    let body = match res.bytes().await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "failed to read mutation response body");
            return None;
        }
    };
    match serde_json::from_slice::<User>(&body) {
        Ok(user) => Some(user),
        Err(err) => {
            debug!(error = %err, "mutation response body is not a user record");
            None
        }
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> Result<Vec<User>> {
        let res = self.http.get(self.users_url.clone()).send().await?;
        let res = ensure_success(res)?;
        let body = res.bytes().await?;
        let users: Vec<User> = serde_json::from_slice(&body)?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<Option<User>> {
        let body = UserPayload {
            id: None,
            ..payload.clone()
        };
        let res = self.http.post(self.users_url.clone()).json(&body).send().await?;
        let created = decode_lenient(ensure_success(res)?).await;
        debug!(
            id = created.as_ref().and_then(|u| u.id.as_ref()).map(UserId::as_str),
            "created user"
        );
        Ok(created)
    }

    async fn update_user(&self, id: &UserId, payload: &UserPayload) -> Result<Option<User>> {
        let body = UserPayload {
            id: Some(id.clone()),
            ..payload.clone()
        };
        let res = self
            .http
            .put(self.member_url(id)?)
            .json(&body)
            .send()
            .await?;
        let updated = decode_lenient(ensure_success(res)?).await;
        debug!(id = %id, "updated user");
        Ok(updated)
    }

    async fn delete_user(&self, id: &UserId) -> Result<()> {
        let res = self.http.delete(self.member_url(id)?).send().await?;
        ensure_success(res)?;
        debug!(id = %id, "deleted user");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
