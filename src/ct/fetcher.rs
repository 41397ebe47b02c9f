//! Certificate-transparency domain collector
//!
//! Queries crt.sh for each target domain and accumulates every CN and SAN
//! name seen on issued certificates into a sorted, deduplicated set. Bounded
//! retries with rate-limit backoff; a failed target is skipped, not fatal.

use indicatif::ProgressBar;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{GsdForgeError, Result};
use crate::types::FetchConfig;

/// crt.sh JSON endpoint
pub const CRT_SH_URL: &str = "https://crt.sh/";

/// Backoff after an HTTP 429 response
const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(10);
/// Backoff after a request timeout
const TIMEOUT_BACKOFF: Duration = Duration::from_secs(5);
/// Backoff after any other failure
const ERROR_BACKOFF: Duration = Duration::from_secs(2);

/// One certificate entry as returned by crt.sh
#[derive(Debug, Clone, Deserialize)]
pub struct CtEntry {
    #[serde(default)]
    pub common_name: String,
    /// Newline-separated SAN list
    #[serde(default)]
    pub name_value: String,
}

/// crt.sh collector
pub struct CtFetcher {
    client: Client,
    config: FetchConfig,
}

impl CtFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("gsd-forge/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self { client, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch certificate entries for one target domain.
    ///
    /// Retries up to the configured attempt count: 429 backs off for 10s,
    /// timeouts for 5s, anything else for 2s. Errors only after every
    /// attempt is exhausted.
    pub async fn fetch_target(&self, domain: &str) -> Result<Vec<CtEntry>> {
        let url = format!("{}?q={}&output=json", CRT_SH_URL, domain);
        let mut rate_limited = false;

        for attempt in 1..=self.config.retry_attempts {
            match self.client.get(&url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::OK {
                        let entries = response.json::<Vec<CtEntry>>().await?;
                        tracing::debug!(
                            domain = %domain,
                            entries = entries.len(),
                            "fetched certificate entries"
                        );
                        return Ok(entries);
                    } else if status == StatusCode::TOO_MANY_REQUESTS {
                        rate_limited = true;
                        tracing::warn!(domain = %domain, attempt, "rate limited, backing off");
                        sleep(RATE_LIMIT_BACKOFF).await;
                    } else {
                        tracing::warn!(domain = %domain, %status, attempt, "unexpected status");
                        sleep(ERROR_BACKOFF).await;
                    }
                }
                Err(e) if e.is_timeout() => {
                    tracing::warn!(domain = %domain, attempt, "request timed out");
                    sleep(TIMEOUT_BACKOFF).await;
                }
                Err(e) => {
                    tracing::warn!(domain = %domain, attempt, error = %e, "request failed");
                    sleep(ERROR_BACKOFF).await;
                }
            }
        }

        if rate_limited {
            return Err(GsdForgeError::rate_limit(
                format!("crt.sh rate limit persisted for {}", domain),
                Some(RATE_LIMIT_BACKOFF.as_secs()),
            ));
        }
        Err(GsdForgeError::network(
            format!(
                "all {} attempts failed for {}",
                self.config.retry_attempts, domain
            ),
            None,
            Some(url),
        ))
    }

    /// Collect domains from every configured target.
    ///
    /// Targets are queried sequentially with a politeness delay between
    /// them. A target whose attempts are exhausted contributes nothing.
    pub async fn collect(&self) -> BTreeSet<String> {
        let mut all_domains = BTreeSet::new();
        let progress = ProgressBar::new(self.config.targets.len() as u64);

        for (i, target) in self.config.targets.iter().enumerate() {
            progress.set_message(target.clone());

            match self.fetch_target(target).await {
                Ok(entries) => {
                    let domains = extract_domains(&entries);
                    tracing::info!(
                        target = %target,
                        extracted = domains.len(),
                        total = all_domains.len() + domains.len(),
                        "collected CT domains"
                    );
                    all_domains.extend(domains);
                }
                Err(e) => {
                    tracing::warn!(target = %target, error = %e, "skipping target");
                }
            }

            progress.inc(1);
            if i + 1 < self.config.targets.len() {
                sleep(self.config.target_delay).await;
            }
        }

        progress.finish_and_clear();
        all_domains
    }
}

impl Default for CtFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract CN + SAN domains from certificate entries, lowercased and
/// deduplicated
pub fn extract_domains(entries: &[CtEntry]) -> BTreeSet<String> {
    let mut domains = BTreeSet::new();

    for entry in entries {
        let cn = entry.common_name.trim();
        if !cn.is_empty() {
            domains.insert(cn.to_lowercase());
        }

        for san in entry.name_value.split('\n') {
            let san = san.trim();
            if !san.is_empty() {
                domains.insert(san.to_lowercase());
            }
        }
    }

    domains
}
