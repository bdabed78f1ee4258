use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::config::{ApiConfig, SecureString};
use crate::model::PhotoRecord;

use super::error::ProviderError;
use super::PhotoProvider;

const USER_AGENT: &str = concat!("unsplash-details/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Unsplash REST API.
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    access_key: Option<SecureString>,
}

/// Error body returned by the API: `{"errors": ["..."]}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

impl UnsplashClient {
    pub fn new(api: &ApiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(api.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url.trim().to_string(),
            access_key: api.resolve_access_key(),
        })
    }

    /// `{base_url}/photos/{id}`, with `id` percent-encoded as one segment.
    pub fn photo_url(&self, id: &str) -> Result<Url, ProviderError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ProviderError::InvalidUrl(format!("'{}' cannot be a base URL", self.base_url))
            })?;
            segments.pop_if_empty().push("photos").push(id);
        }
        Ok(url)
    }
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    fn name(&self) -> &'static str {
        "unsplash"
    }

    async fn fetch_photo_details(&self, id: &str) -> Result<Vec<PhotoRecord>, ProviderError> {
        let access_key = self
            .access_key
            .as_ref()
            .ok_or(ProviderError::MissingAccessKey)?;
        let url = self.photo_url(id)?;

        tracing::debug!(%url, "Requesting photo details");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Client-ID {}", access_key.expose()))
            .header(ACCEPT, "application/json")
            .header("Accept-Version", "v1")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let body = response.bytes().await?;
        let record: PhotoRecord =
            serde_json::from_slice(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(vec![record])
    }
}

/// Message for a failed response: the API's `errors` list, else the
/// status reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    let from_body = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.errors.join("; "))
        .filter(|joined| !joined.is_empty());

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base_url: &str) -> UnsplashClient {
        let api = ApiConfig {
            base_url: base_url.to_string(),
            access_key: Some("key".to_string()),
            ..ApiConfig::default()
        };
        UnsplashClient::new(&api).unwrap()
    }

    #[test]
    fn photo_url_appends_segments() {
        let client = client_with_base("https://api.unsplash.com");
        assert_eq!(
            client.photo_url("Dwu85P9SOIk").unwrap().as_str(),
            "https://api.unsplash.com/photos/Dwu85P9SOIk"
        );
    }

    #[test]
    fn photo_url_keeps_base_path_and_encodes_id() {
        let client = client_with_base("http://localhost:9000/v1/");
        assert_eq!(
            client.photo_url("a/b").unwrap().as_str(),
            "http://localhost:9000/v1/photos/a%2Fb"
        );
    }

    #[test]
    fn photo_url_rejects_garbage_base() {
        let client = client_with_base("not a url");
        assert!(matches!(
            client.photo_url("x"),
            Err(ProviderError::InvalidUrl(_))
        ));
    }

    #[test]
    fn error_message_uses_api_errors() {
        let message = error_message(
            StatusCode::NOT_FOUND,
            r#"{"errors":["Couldn't find Photo"]}"#,
        );
        assert_eq!(message, "Couldn't find Photo");
    }

    #[test]
    fn error_message_falls_back_to_reason() {
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, "<html>nope</html>"),
            "Unauthorized"
        );
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, r#"{"errors":[]}"#),
            "Forbidden"
        );
    }
}
