use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoffBuilder;
use tracing::{info, warn};
use url::Url;

use crate::core::error::{ScoutError, ScoutResult};
use crate::core::types::{ApiSkill, CatalogEntry};
use crate::AppState;

/// Supplier of the bulk `{name, id}` catalog.
///
/// An `Err` here is fatal to the run: the orchestrator never proceeds with an
/// empty lookup table because the catalog could not be fetched.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> ScoutResult<Vec<CatalogEntry>>;
}

/// Client for `GET {api}/skills?ids=all&lang=en`.
pub struct SkillsApiClient {
    client: reqwest::Client,
    api_base_url: String,
    max_attempts: u32,
}

impl SkillsApiClient {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            client: state.http_client.clone(),
            api_base_url: state.config.resolve_api_base_url(),
            max_attempts: state.config.resolve_api_max_retries(),
        }
    }

    pub fn skills_url(&self) -> ScoutResult<Url> {
        let url = Url::parse_with_params(
            &format!("{}/skills", self.api_base_url),
            &[("ids", "all"), ("lang", "en")],
        )?;
        Ok(url)
    }

    async fn fetch_once(&self, url: &Url) -> ScoutResult<Vec<CatalogEntry>> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ScoutError::catalog_status(status.as_u16(), &body));
        }
        let raw: Vec<ApiSkill> = serde_json::from_str(&body)?;
        Ok(raw.into_iter().filter_map(ApiSkill::into_entry).collect())
    }
}

#[async_trait]
impl CatalogSource for SkillsApiClient {
    async fn fetch_catalog(&self) -> ScoutResult<Vec<CatalogEntry>> {
        let url = self.skills_url()?;
        info!("Fetching skill catalog from {}", url);

        let max_attempts = self.max_attempts;
        let mut attempt = 0u32;
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(500))
            .with_max_interval(Duration::from_secs(2))
            .with_max_elapsed_time(Some(Duration::from_secs(30)))
            .build();

        retry(policy, || {
            attempt += 1;
            let this_attempt = attempt;
            let url = &url;
            async move {
                match self.fetch_once(url).await {
                    Ok(entries) => Ok(entries),
                    // A body that is not the expected JSON will not improve on retry.
                    Err(e @ ScoutError::Decode(_)) => Err(backoff::Error::permanent(e)),
                    Err(e) if this_attempt >= max_attempts => Err(backoff::Error::permanent(e)),
                    Err(e) => {
                        warn!(
                            "skills API attempt {}/{} failed: {}",
                            this_attempt, max_attempts, e
                        );
                        Err(backoff::Error::transient(e))
                    }
                }
            }
        })
        .await
    }
}
