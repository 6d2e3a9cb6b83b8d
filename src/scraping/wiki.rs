use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use crate::AppState;

/// Characters left as-is in a page slug besides ASCII alphanumerics.
const SLUG_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b':')
    .remove(b'(')
    .remove(b')')
    .remove(b'!');

/// Wiki page URL for a skill display name: spaces become `_`, everything
/// outside the slug-safe set is percent-encoded.
pub fn skill_page_url(wiki_base_url: &str, name: &str) -> String {
    let slug = name.replace(' ', "_");
    format!(
        "{}/{}",
        wiki_base_url.trim_end_matches('/'),
        utf8_percent_encode(&slug, SLUG_SAFE)
    )
}

/// Supplier of raw page markup for a skill.
///
/// `None` means the page is unavailable; callers must degrade to absent facts.
#[async_trait]
pub trait PageSource: Send + Sync {
    fn page_url(&self, name: &str) -> String;
    async fn fetch_page(&self, name: &str) -> Option<String>;
}

pub struct WikiPageClient {
    client: reqwest::Client,
    wiki_base_url: String,
}

impl WikiPageClient {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            client: state.http_client.clone(),
            wiki_base_url: state.config.resolve_wiki_base_url(),
        }
    }
}

#[async_trait]
impl PageSource for WikiPageClient {
    fn page_url(&self, name: &str) -> String {
        skill_page_url(&self.wiki_base_url, name)
    }

    async fn fetch_page(&self, name: &str) -> Option<String> {
        let url = self.page_url(name);
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("page fetch failed for '{}' ({}): {}", name, url, e);
                return None;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!("page for '{}' unavailable: HTTP {}", name, status.as_u16());
            return None;
        }

        match response.text().await {
            Ok(body) if !body.is_empty() => Some(body),
            Ok(_) => None,
            Err(e) => {
                warn!("failed to read page body for '{}': {}", name, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://en.gw2skills.net/wiki";

    #[test]
    fn slug_keeps_wiki_punctuation() {
        assert_eq!(
            skill_page_url(BASE, "Dual Orbits: Air and Earth"),
            "https://en.gw2skills.net/wiki/Dual_Orbits:_Air_and_Earth"
        );
        assert_eq!(
            skill_page_url(BASE, "\"Rise!\""),
            "https://en.gw2skills.net/wiki/%22Rise!%22"
        );
        assert_eq!(
            skill_page_url(BASE, "Reaper's Shroud"),
            "https://en.gw2skills.net/wiki/Reaper%27s_Shroud"
        );
        assert_eq!(
            skill_page_url(&format!("{BASE}/"), "\"Flash-Freeze!\""),
            "https://en.gw2skills.net/wiki/%22Flash-Freeze!%22"
        );
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(skill_page_url(BASE, "Épée"), "https://en.gw2skills.net/wiki/%C3%89p%C3%A9e");
    }
}
