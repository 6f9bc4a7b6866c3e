//! HTTP client for the Wiktionary action API.

use reqwest::Client;
use std::time::Duration;

use super::response::PageResponse;
use super::{FetchFuture, PageSource};
use crate::config::LexiconConfig;
use crate::error::{LexiconError, LexiconResult};
use crate::utils::USER_AGENT;

/// Fixed query parameters asking for the rendered HTML of a page
const PARSE_PARAMS: [(&str, &str); 4] = [
    ("action", "parse"),
    ("format", "json"),
    ("prop", "text|revid"),
    ("origin", "*"),
];

/// Fetches rendered pages from a MediaWiki `api.php` endpoint
#[derive(Debug, Clone)]
pub struct WiktionaryClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl WiktionaryClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> LexiconResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn from_config(config: &LexiconConfig) -> LexiconResult<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }

    /// Request the rendered HTML of `title`
    ///
    /// Any status below 400 counts as success. Other statuses become
    /// [`LexiconError::Transport`] carrying the raw body.
    pub async fn fetch(&self, title: &str) -> LexiconResult<PageResponse> {
        tracing::debug!(title, endpoint = %self.endpoint, "Fetching page");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&PARSE_PARAMS)
            .query(&[("page", title)])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..400).contains(&status) {
            log::warn!("Request for '{title}' failed with status {status}");
            return Err(LexiconError::Transport { status, body });
        }

        PageResponse::decode(&body)
    }
}

impl PageSource for WiktionaryClient {
    fn fetch_page<'a>(&'a self, title: &'a str) -> FetchFuture<'a> {
        Box::pin(self.fetch(title))
    }
}
