//! HTTP client for the places REST API.
//!
//! Wraps `reqwest` with API key management, provider status checking and
//! typed response decoding. Every endpoint answers HTTP 200 with a `"status"`
//! field in the JSON envelope; anything other than `OK` or `ZERO_RESULTS` is
//! surfaced as [`PlacesError::Api`] carrying the provider's message.

use std::time::Duration;

use lunchroll_core::{AppConfig, DEFAULT_BASE_URL};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;

const DEFAULT_USER_AGENT: &str = "lunchroll/0.1 (restaurant-picker)";

/// Client for the places, geocoding and distance-matrix endpoints.
///
/// Use [`PlacesClient::new`] for production, [`PlacesClient::from_config`] to
/// honour every [`AppConfig`] setting, or [`PlacesClient::with_base_url`] to
/// point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language: Option<String>,
}

impl PlacesClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidInput`] for an empty key, or
    /// [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidInput`] for an empty key,
    /// [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Self::build(api_key, timeout_secs, DEFAULT_USER_AGENT, url, None)
    }

    /// Creates a client from application configuration and an API key.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidInput`] for an empty key, or
    /// [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn from_config(config: &AppConfig, api_key: &str) -> Result<Self, PlacesError> {
        Self::build(
            api_key,
            config.request_timeout_secs,
            &config.user_agent,
            config.base_url.clone(),
            config.language.clone(),
        )
    }

    /// Sets the language hint sent with every request.
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    fn build(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: Url,
        language: Option<String>,
    ) -> Result<Self, PlacesError> {
        if api_key.trim().is_empty() {
            return Err(PlacesError::InvalidInput(
                "API key must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            language,
        })
    }

    /// Builds the full request URL for `endpoint` with percent-encoded query
    /// parameters. The optional language hint and the API key are appended
    /// after the caller's parameters.
    pub(crate) fn build_url(
        &self,
        endpoint: &str,
        extra: &[(&str, &str)],
    ) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: format!("{}{endpoint}", self.base_url),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            if let Some(language) = &self.language {
                pairs.append_pair("language", language);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, parses the body as
    /// JSON and checks the provider status field.
    ///
    /// `context` names the call in errors and logs; it never contains the key.
    /// URLs are stripped from `reqwest` errors for the same reason.
    pub(crate) async fn request_json(
        &self,
        url: Url,
        context: &str,
    ) -> Result<serde_json::Value, PlacesError> {
        tracing::debug!(context, "places request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;
        Self::check_api_error(&value)?;
        Ok(value)
    }

    /// Decodes a status-checked body into a typed response.
    pub(crate) fn decode<T: DeserializeOwned>(
        body: serde_json::Value,
        context: &str,
    ) -> Result<T, PlacesError> {
        serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Returns an error unless the top-level `"status"` is `OK` or `ZERO_RESULTS`.
    pub(crate) fn check_api_error(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body.get("status").and_then(serde_json::Value::as_str);
        match status {
            Some("OK" | "ZERO_RESULTS") => Ok(()),
            other => {
                let message = body
                    .get("error_message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("no error message supplied")
                    .to_string();
                Err(PlacesError::Api {
                    status: other.unwrap_or("MISSING_STATUS").to_string(),
                    message,
                })
            }
        }
    }

    /// Returns `true` when the envelope reports `ZERO_RESULTS`.
    pub(crate) fn is_zero_results(body: &serde_json::Value) -> bool {
        body.get("status").and_then(serde_json::Value::as_str) == Some("ZERO_RESULTS")
    }
}
