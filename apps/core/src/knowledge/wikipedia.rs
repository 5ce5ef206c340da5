//! Wikipedia-backed implementation of the knowledge lookup.
//!
//! Uses the REST summary endpoint for page extracts and the opensearch action
//! API for disambiguation options. Every failure mode, timeouts included, is
//! reported as a [`LookupOutcome`] variant so callers never see a transport
//! error type.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

use super::lookup::{KnowledgeLookup, LookupOutcome};
use crate::config::Settings;
use crate::error::AppError;

/// Maximum number of disambiguation options surfaced to the caller.
const MAX_DISAMBIGUATION_OPTIONS: usize = 5;

/// HTTP client for the Wikipedia-compatible API.
pub struct WikipediaLookup {
    client: Client,
    base: Url,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    #[serde(rename = "type", default)]
    page_type: String,
    #[serde(default)]
    extract: String,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    page: Option<String>,
}

impl WikipediaLookup {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(&settings.user_agent).build()?;
        let base = Url::parse(&settings.lookup_base_url)?;

        Ok(Self {
            client,
            base,
            timeout: settings.lookup_timeout,
        })
    }

    fn summary_url(&self, topic: &str) -> Option<Url> {
        let title = topic.replace(' ', "_");
        let mut url = self.base.clone();
        url.path_segments_mut()
            .ok()?
            .extend(["api", "rest_v1", "page", "summary", title.as_str()]);
        Some(url)
    }

    fn opensearch_url(&self, topic: &str) -> Option<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut().ok()?.extend(["w", "api.php"]);
        url.query_pairs_mut()
            .append_pair("action", "opensearch")
            .append_pair("search", topic)
            .append_pair("limit", "5")
            .append_pair("format", "json");
        Some(url)
    }

    async fn send_request(&self, url: Url) -> Result<reqwest::Response, LookupOutcome> {
        match timeout(self.timeout, self.client.get(url).send()).await {
            Err(_) => Err(LookupOutcome::TransportFailure(format!(
                "Lookup timed out after {:?}",
                self.timeout
            ))),
            Ok(Err(e)) => Err(LookupOutcome::TransportFailure(format!(
                "Lookup request failed: {}",
                e
            ))),
            Ok(Ok(response)) => Ok(response),
        }
    }

    /// Resolves the option list for an ambiguous topic.
    ///
    /// The opensearch response is a positional JSON array; the second element
    /// holds the matching titles.
    async fn disambiguation_options(&self, topic: &str) -> LookupOutcome {
        let Some(url) = self.opensearch_url(topic) else {
            return LookupOutcome::TransportFailure("Cannot build opensearch URL".to_string());
        };

        let response = match self.send_request(url).await {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        if !response.status().is_success() {
            return LookupOutcome::TransportFailure(format!(
                "Opensearch returned status {}",
                response.status()
            ));
        }

        let payload: serde_json::Value = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                return LookupOutcome::TransportFailure(format!("Malformed opensearch body: {}", e))
            }
        };

        let options: Vec<String> = payload
            .get(1)
            .and_then(|titles| titles.as_array())
            .map(|titles| {
                titles
                    .iter()
                    .filter_map(|t| t.as_str())
                    .take(MAX_DISAMBIGUATION_OPTIONS)
                    .map(|t| t.to_string())
                    .collect()
            })
            .unwrap_or_default();

        debug!(topic, options = options.len(), "Topic is ambiguous");
        LookupOutcome::Ambiguous(options)
    }
}

#[async_trait]
impl KnowledgeLookup for WikipediaLookup {
    async fn summarize(&self, topic: &str, sentences: usize) -> LookupOutcome {
        let Some(url) = self.summary_url(topic) else {
            return LookupOutcome::TransportFailure("Cannot build summary URL".to_string());
        };

        let response = match self.send_request(url).await {
            Ok(response) => response,
            Err(outcome) => {
                warn!(topic, ?outcome, "Lookup transport failure");
                return outcome;
            }
        };

        if response.status() == StatusCode::NOT_FOUND {
            return LookupOutcome::NotFound;
        }
        if !response.status().is_success() {
            return LookupOutcome::TransportFailure(format!(
                "Summary endpoint returned status {}",
                response.status()
            ));
        }

        let payload: SummaryPayload = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                return LookupOutcome::TransportFailure(format!("Malformed summary body: {}", e))
            }
        };

        if payload.page_type == "disambiguation" {
            return self.disambiguation_options(topic).await;
        }

        if payload.extract.trim().is_empty() {
            return LookupOutcome::NotFound;
        }

        let canonical_url = payload
            .content_urls
            .and_then(|urls| urls.desktop)
            .and_then(|desktop| desktop.page);

        LookupOutcome::Resolved {
            summary: truncate_sentences(&payload.extract, sentences),
            canonical_url,
        }
    }
}

/// Cuts `text` after `max` sentence terminators.
///
/// Runs of terminators ("?!", "...") count as one sentence boundary.
fn truncate_sentences(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }

    let mut seen = 0;
    let mut end = text.len();
    let mut prev_was_terminator = false;

    for (i, c) in text.char_indices() {
        let is_terminator = matches!(c, '.' | '!' | '?');
        if is_terminator && !prev_was_terminator {
            seen += 1;
            if seen == max {
                end = i + c.len_utf8();
                break;
            }
        }
        prev_was_terminator = is_terminator;
    }

    text[..end].trim().to_string()
}
