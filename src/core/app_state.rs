use std::sync::Arc;
use std::time::Duration;

use super::config::ScoutConfig;
use super::error::ScoutResult;
use crate::facts::{AliasTable, FactPipeline};

/// Everything a run needs that is built once up front and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub config: Arc<ScoutConfig>,
    pub aliases: Arc<AliasTable>,
    pub pipeline: Arc<FactPipeline>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api_base_url", &self.config.resolve_api_base_url())
            .field("wiki_base_url", &self.config.resolve_wiki_base_url())
            .field("aliases_enabled", &!self.aliases.is_empty())
            .finish()
    }
}

impl AppState {
    pub fn new(http_client: reqwest::Client, config: ScoutConfig) -> Self {
        let aliases = Arc::new(config.alias_table());
        let pipeline = Arc::new(FactPipeline::new(config.marker_config(), config.boon_filter()));
        Self {
            http_client,
            config: Arc::new(config),
            aliases,
            pipeline,
        }
    }

    /// Build the HTTP client from config (timeout + user agent) and wrap it.
    pub fn from_config(config: ScoutConfig) -> ScoutResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.resolve_http_timeout_secs()))
            .user_agent(config.resolve_user_agent())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self::new(http_client, config))
    }
}
