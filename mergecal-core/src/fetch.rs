//! Remote feed retrieval with a relay fallback.

use reqwest::header::ACCEPT;

use crate::error::{MergecalError, MergecalResult};

/// Public relay prepended to the target URL when the direct request is
/// refused. One fixed endpoint, no rotation.
pub const DEFAULT_RELAY_URL: &str = "https://cors-anywhere.herokuapp.com/";

pub struct FeedFetcher {
    client: reqwest::Client,
    relay_url: String,
}

impl FeedFetcher {
    pub fn new(relay_url: impl Into<String>) -> Self {
        FeedFetcher {
            client: reqwest::Client::new(),
            relay_url: relay_url.into(),
        }
    }

    /// Fetch the raw feed text behind `url`.
    ///
    /// One direct attempt, then one attempt through the relay. The relay
    /// error wins if both fail; there is no third attempt.
    pub async fn fetch(&self, url: &str) -> MergecalResult<String> {
        match self.attempt(url, false).await {
            Ok(body) => Ok(body),
            Err(direct_err) => {
                log::info!("Direct fetch failed ({direct_err}), retrying via relay");
                let relayed_url = format!("{}{}", self.relay_url, url);
                self.attempt(&relayed_url, true).await
            }
        }
    }

    async fn attempt(&self, url: &str, relayed: bool) -> MergecalResult<String> {
        let mut request = self.client.get(url).header(ACCEPT, "text/calendar");
        if relayed {
            // cors-anywhere rejects requests without this header
            request = request.header("X-Requested-With", "XMLHttpRequest");
        }

        let response = request
            .send()
            .await
            .map_err(|e| MergecalError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MergecalError::FetchStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MergecalError::Fetch(e.to_string()))
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        FeedFetcher::new(DEFAULT_RELAY_URL)
    }
}
