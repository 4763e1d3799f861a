//! HTTP Client
//!
//! reqwest wrapper shared by the auth and todo bindings. On wasm32 reqwest
//! goes through the browser's `fetch`.

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::UserId;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl HttpClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(super) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// `{base}/{prefix}/{user_id}` with the id escaped as a path segment
    pub(super) fn user_url(&self, prefix: &str, user_id: &UserId) -> String {
        let segment = utf8_percent_encode(user_id.as_str(), PATH_SEGMENT);
        self.url(&format!("{}/{}", prefix, segment))
    }

    pub(super) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send the request and decode a success body as `R`. Any other status
    /// becomes [`ClientError::Api`] carrying the server's `detail`.
    pub(super) async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<R> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if status.is_success() {
            return Ok(response.json::<R>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            detail: error_detail(&body),
        })
    }
}

/// The `detail` string of an error body. Non-string details (FastAPI puts a
/// list of validation errors there) don't count.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_string() {
        assert_eq!(
            error_detail(r#"{"detail":"bad password"}"#).as_deref(),
            Some("bad password")
        );
    }

    #[test]
    fn test_error_detail_ignores_validation_list() {
        let body = r#"{"detail":[{"loc":["body","task"],"msg":"field required"}]}"#;
        assert_eq!(error_detail(body), None);
    }

    #[test]
    fn test_error_detail_non_json() {
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(""), None);
    }

    #[test]
    fn test_user_url_escapes_segment() {
        let client = HttpClient::new(AppConfig::default());

        assert_eq!(
            client.user_url("/todoget", &UserId::new("7")),
            "http://localhost:8000/todoget/7"
        );
        assert_eq!(
            client.user_url("/todoupdate", &UserId::new("a/b c")),
            "http://localhost:8000/todoupdate/a%2Fb%20c"
        );
    }
}
