//! HTTP client for the Khmer NLP server endpoints.
//!
//! Three calls: fetch the rendered analysis page, switch the session
//! language, and submit text for analysis. One request per operation, no
//! retries; failures surface to the caller as [`Error`] values.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::i18n::Lang;
use crate::model::AnalysisResult;

/// Timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response body of `POST /set_language/{lang}`.
#[derive(Debug, Deserialize)]
struct SetLanguageResponse {
    success: bool,
}

/// Client for one server instance.
#[derive(Debug, Clone)]
pub struct ServerClient {
    base: Url,
    http: reqwest::Client,
}

impl ServerClient {
    /// Build a client for the server at `base`.
    pub fn new(base: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| Error::Http {
                url: base.to_string(),
                source,
            })?;
        Ok(Self { base, http })
    }

    /// Fetch the rendered analysis page.
    pub async fn fetch_page(&self) -> Result<String> {
        let url = self.base.clone();
        debug!(url = %url, "fetching page");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| Error::Http {
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        response.text().await.map_err(|source| Error::BadResponse {
            url: url.to_string(),
            source,
        })
    }

    /// Switch the server-side interface language.
    ///
    /// Returns `true` when the server acknowledged the switch. The body
    /// is parsed regardless of status: the server answers a rejected
    /// language with a non-success status and `success: false`.
    pub async fn set_language(&self, lang: Lang) -> Result<bool> {
        let url = self.base.join(&format!("set_language/{}", lang.as_str()))?;
        debug!(url = %url, "switching language");

        let response = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| Error::Http {
                url: url.to_string(),
                source,
            })?;
        let body: SetLanguageResponse =
            response.json().await.map_err(|source| Error::BadResponse {
                url: url.to_string(),
                source,
            })?;
        Ok(body.success)
    }

    /// Submit text for analysis and return the parsed result.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let url = self.base.join("api/analyze")?;
        debug!(url = %url, chars = text.chars().count(), "submitting text for analysis");

        let response = self
            .http
            .post(url.clone())
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|source| Error::Http {
                url: url.to_string(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        response.json().await.map_err(|source| Error::BadResponse {
            url: url.to_string(),
            source,
        })
    }
}
