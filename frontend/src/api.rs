use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal};

use crate::config::AppConfig;
use crate::models::{Credentials, Employee, Envelope, FileLink, Receipt, TokenResponse};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session is no longer valid")]
    Unauthorized,
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("request aborted")]
    Aborted,
    #[error("browser error: {0}")]
    Browser(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Owns the abort controller of an in-flight request. Dropping the handle
/// aborts the request if it has not completed yet.
pub struct RequestHandle {
    controller: Option<AbortController>,
}

impl RequestHandle {
    /// Falls back to an uncancellable request when the browser refuses to
    /// create a controller.
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                let err = ApiError::Browser(js_error(e));
                tracing::warn!(error = %err, "request will not be cancellable");
                None
            }
        };
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }
}

impl Drop for RequestHandle {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// A collection served as an envelope by the API.
pub trait RemoteCollection: DeserializeOwned + 'static {
    const PATH: &'static str;
}

impl RemoteCollection for Employee {
    const PATH: &'static str = "/api/users/";
}

impl RemoteCollection for Receipt {
    const PATH: &'static str = "/api/receipts/";
}

pub trait AuthApi {
    /// Exchanges credentials for a session token.
    async fn demo_login(&self, credentials: &Credentials) -> Result<String, ApiError>;
}

pub trait ReceiptFiles {
    /// Resolves the PDF location of a receipt, `None` when the server has none.
    async fn receipt_file(&self, id: &str) -> Result<Option<String>, ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, token: Option<String>) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Token {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let aborted = || signal.map_or(false, |s| s.aborted());

        let response = self
            .authorize(Request::get(&self.url(path)))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| if aborted() { ApiError::Aborted } else { e.into() })?;
        check_status(&response)?;

        response
            .json::<T>()
            .await
            .map_err(|e| if aborted() { ApiError::Aborted } else { e.into() })
    }

    pub async fn list<R: RemoteCollection>(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<R>, ApiError> {
        let envelope: Envelope<R> = self.get_json(R::PATH, signal).await?;
        Ok(envelope.results)
    }

    /// Downloads an absolute URL as raw bytes, without credentials.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = Request::get(url).send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.binary().await?)
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    match response.status() {
        _ if response.ok() => Ok(()),
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status)),
    }
}

impl AuthApi for ApiClient {
    async fn demo_login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = Request::post(&self.url("/api/users/demo_login/"))
            .json(credentials)?
            .send()
            .await?;
        // A rejected login is not an expired session, keep the raw status.
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        let body: TokenResponse = response.json().await?;
        Ok(body.token)
    }
}

impl ReceiptFiles for ApiClient {
    async fn receipt_file(&self, id: &str) -> Result<Option<String>, ApiError> {
        let link: Option<FileLink> = self
            .get_json(&format!("/api/receipts/{}/file", id), None)
            .await?;
        Ok(link
            .and_then(|l| l.file)
            .filter(|url| !url.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let config = AppConfig::from_values(Some("http://localhost:8000/"), None);
        let client = ApiClient::new(&config, Some("t".into()));
        assert_eq!(client.url(Employee::PATH), "http://localhost:8000/api/users/");
        assert_eq!(client.url(Receipt::PATH), "http://localhost:8000/api/receipts/");
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(ApiError::Status(500).to_string(), "server answered with status 500");
        assert_eq!(ApiError::Unauthorized.to_string(), "session is no longer valid");
        assert_eq!(
            ApiError::Browser("AbortController unavailable".into()).to_string(),
            "browser error: AbortController unavailable"
        );
    }
}
