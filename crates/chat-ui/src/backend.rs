//! HTTP client for the chat backend. Server-side only: server functions
//! call through here so the browser never talks to the backend directly.

use chat_types::{
    ApiConfig, ApiError, LoginRequest, LoginResponse, RegistrationRequest, SessionToken, User,
};
use leptos::prelude::*;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::{users_path, ACCOUNT_PATH, LOGIN_PATH, REGISTER_PATH, USERS_PATH};

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BackendClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.config.endpoint(LOGIN_PATH);
        debug!("login for {}", request.username);
        let resp = self.http.post(&url).json(request).send().await;
        decode(&url, resp).await
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<User, ApiError> {
        let url = self.config.endpoint(REGISTER_PATH);
        debug!("register {}", request.username);
        let resp = self.http.post(&url).json(request).send().await;
        decode(&url, resp).await
    }

    pub async fn account(&self, token: &SessionToken) -> Result<User, ApiError> {
        let url = self.config.endpoint(ACCOUNT_PATH);
        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, token.bearer())
            .send()
            .await;
        decode(&url, resp).await
    }

    pub async fn user(&self, id: &str) -> Result<User, ApiError> {
        let url = user_url(&self.config, id)?;
        let resp = self.http.get(url.clone()).send().await;
        decode(url.as_str(), resp).await
    }

    pub async fn users(&self, page: u32, size: u32) -> Result<Vec<User>, ApiError> {
        let url = self.config.endpoint(&users_path(page, size));
        let resp = self.http.get(&url).send().await;
        decode(&url, resp).await
    }

    /// The client installed for the current request by the console server.
    pub fn from_context<E>() -> Result<Self, ServerFnError<E>> {
        use_context::<Self>()
            .ok_or_else(|| ServerFnError::ServerError("backend client unavailable".into()))
    }
}

/// `/users/{id}` with the id percent-encoded as exactly one path segment, so
/// an id can never climb out of the directory or smuggle in a query.
fn user_url(config: &ApiConfig, id: &str) -> Result<reqwest::Url, ApiError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::InvalidUrl(format!("unusable user id {id:?}")));
    }
    let base = config.endpoint(USERS_PATH);
    let mut url = reqwest::Url::parse(&base).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(format!("{base} cannot take a path")))?
        .push(id);
    Ok(url)
}

async fn decode<T: DeserializeOwned>(
    url: &str,
    resp: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, ApiError> {
    let resp = resp.map_err(|e| {
        warn!("request to {url} failed: {e}");
        ApiError::Transport(e.to_string())
    })?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !status.is_success() {
        let err = ApiError::from_response(status.as_u16(), &body);
        warn!("{url} responded {status}: {err}");
        return Err(err);
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!("could not decode response from {url}: {e}");
        ApiError::Decode(e.to_string())
    })
}
