use std::collections::HashMap;
use std::path::PathBuf;

use crate::facts::extract::BoonFilter;
use crate::facts::resolver::AliasTable;
use crate::facts::segment::MarkerConfig;

// ---------------------------------------------------------------------------
// ScoutConfig: file-based config loader (mitigation-scout.json) with env-var fallback
// ---------------------------------------------------------------------------

pub const ENV_CONFIG_PATH: &str = "MITIGATION_SCOUT_CONFIG";
pub const ENV_API_BASE: &str = "MITIGATION_SCOUT_API_BASE";
pub const ENV_WIKI_BASE: &str = "MITIGATION_SCOUT_WIKI_BASE";
pub const ENV_OUTPUT: &str = "MITIGATION_SCOUT_OUTPUT";
pub const ENV_HTTP_TIMEOUT: &str = "HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_BASE: &str = "https://api.guildwars2.com/v2";
pub const DEFAULT_WIKI_BASE: &str = "https://en.gw2skills.net/wiki";
pub const DEFAULT_USER_AGENT: &str = "gw2-damage-reduction-scraper/1.1 (personal use)";
pub const DEFAULT_OUTPUT: &str = "damage_reduction_wvw.csv";

/// Skills processed when neither the config file nor the CLI names any.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Frost Aura",
    "Frozen Ground",
    "Dual Orbits: Air and Earth",
    "Dual Orbits: Fire and Earth",
    "Dual Orbits: Water and Earth",
    "Grinding Stones",
    "Rocky Loop",
    "Explosive Thrust",
    "Steel Divide",
    "Swift Cut",
    "Restorative Glow",
    "Infusing Terror",
    "Perilous Gift",
    "Resilient Weapon",
    "Signet of Judgment",
    "Forced Engagement",
    "Vengeful Hammers",
    "Endure Pain",
    "Spectrum Shield",
    "Barrier Signet",
    "\"Guard!\"",
    "Dolyak Stance",
    "\"Flash-Freeze!\"",
    "\"Rise!\"",
    "Daring Advance",
    "Rite of the Great Dwarf",
    "Rampage",
    "\"Rebound!\"",
    "Weave Self",
    "Ancient Echo",
    "Facet of Nature",
    "Full Counter",
    "Drink Ambrosia",
    "Throw Enchanted Ice",
    "Enter Shadow Shroud",
    "Death Shroud",
    "Reaper's Shroud",
    "Ritualist's Shroud",
    "Lesser \"Guard!\"",
];

/// Per-mode marker overrides (mirrors the `markers` key in mitigation-scout.json).
/// A missing mode keeps its built-in candidate list.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct MarkerOverrides {
    pub pve: Option<Vec<String>>,
    pub pvp: Option<Vec<String>>,
    pub wvw: Option<Vec<String>>,
}

/// Top-level config loaded from `mitigation-scout.json`.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct ScoutConfig {
    /// Skills API base, e.g. `https://api.guildwars2.com/v2`.
    pub api_base_url: Option<String>,
    /// Wiki base the skill pages hang off, e.g. `https://en.gw2skills.net/wiki`.
    pub wiki_base_url: Option<String>,
    pub user_agent: Option<String>,
    pub http_timeout_secs: Option<u64>,
    /// Attempts against the skills API before the run is aborted. Default: 3.
    pub api_max_retries: Option<u32>,
    /// Pause between two skill page fetches. Default: 100ms.
    pub request_delay_ms: Option<u64>,
    pub output_path: Option<String>,
    pub skills: Option<Vec<String>>,
    /// Display name → name used for the id lookup.
    pub aliases: Option<HashMap<String, String>>,
    pub markers: Option<MarkerOverrides>,
    /// Lines starting with any of these (case-insensitive) are dropped before extraction.
    pub boon_prefixes: Option<Vec<String>>,
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl ScoutConfig {
    /// API base: JSON field → `MITIGATION_SCOUT_API_BASE` → official endpoint.
    pub fn resolve_api_base_url(&self) -> String {
        if let Some(u) = &self.api_base_url {
            if !u.trim().is_empty() {
                return u.trim_end_matches('/').to_string();
            }
        }
        env_non_empty(ENV_API_BASE)
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// Wiki base: JSON field → `MITIGATION_SCOUT_WIKI_BASE` → gw2skills.
    pub fn resolve_wiki_base_url(&self) -> String {
        if let Some(u) = &self.wiki_base_url {
            if !u.trim().is_empty() {
                return u.trim_end_matches('/').to_string();
            }
        }
        env_non_empty(ENV_WIKI_BASE)
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_WIKI_BASE.to_string())
    }

    pub fn resolve_user_agent(&self) -> String {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
            .to_string()
    }

    /// HTTP timeout: JSON field → `HTTP_TIMEOUT_SECS` → 60.
    pub fn resolve_http_timeout_secs(&self) -> u64 {
        if let Some(n) = self.http_timeout_secs {
            return n;
        }
        env_non_empty(ENV_HTTP_TIMEOUT)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(60)
    }

    pub fn resolve_api_max_retries(&self) -> u32 {
        self.api_max_retries.unwrap_or(3).max(1)
    }

    pub fn resolve_request_delay_ms(&self) -> u64 {
        self.request_delay_ms.unwrap_or(100)
    }

    /// Output path: JSON field → `MITIGATION_SCOUT_OUTPUT` → `damage_reduction_wvw.csv`.
    pub fn resolve_output_path(&self) -> PathBuf {
        if let Some(p) = &self.output_path {
            if !p.trim().is_empty() {
                return PathBuf::from(p.trim());
            }
        }
        PathBuf::from(env_non_empty(ENV_OUTPUT).unwrap_or_else(|| DEFAULT_OUTPUT.to_string()))
    }

    pub fn resolve_skills(&self) -> Vec<String> {
        match &self.skills {
            Some(list) if !list.is_empty() => list.clone(),
            _ => DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn alias_table(&self) -> AliasTable {
        AliasTable::new(self.aliases.clone().unwrap_or_default())
    }

    pub fn marker_config(&self) -> MarkerConfig {
        let mut markers = MarkerConfig::default();
        if let Some(overrides) = &self.markers {
            if let Some(v) = &overrides.pve {
                markers = markers.with_pve(v.clone());
            }
            if let Some(v) = &overrides.pvp {
                markers = markers.with_pvp(v.clone());
            }
            if let Some(v) = &overrides.wvw {
                markers = markers.with_wvw(v.clone());
            }
        }
        markers
    }

    pub fn boon_filter(&self) -> BoonFilter {
        match &self.boon_prefixes {
            Some(prefixes) => BoonFilter::new(prefixes.clone()),
            None => BoonFilter::default(),
        }
    }
}

/// Load `mitigation-scout.json` from standard locations.
///
/// Search order (first found wins):
/// 1. `MITIGATION_SCOUT_CONFIG` env var path
/// 2. `./mitigation-scout.json`
/// 3. `../mitigation-scout.json`
///
/// Missing file → `ScoutConfig::default()`.
/// Parse error → log a warning, return `ScoutConfig::default()`.
pub fn load_scout_config() -> ScoutConfig {
    let mut candidates = vec![
        PathBuf::from("mitigation-scout.json"),
        PathBuf::from("../mitigation-scout.json"),
    ];
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        candidates.insert(0, PathBuf::from(env_path));
    }

    for path in &candidates {
        match std::fs::read_to_string(path) {
            Ok(contents) => return parse_scout_config(&contents, &path.display().to_string()),
            Err(_) => continue,
        }
    }

    ScoutConfig::default()
}

/// Parse config JSON; `origin` is only used for log lines.
pub fn parse_scout_config(contents: &str, origin: &str) -> ScoutConfig {
    match serde_json::from_str::<ScoutConfig>(contents) {
        Ok(cfg) => {
            tracing::info!("mitigation-scout.json loaded from {}", origin);
            cfg
        }
        Err(e) => {
            tracing::warn!(
                "mitigation-scout.json parse error at {}: {}; using defaults",
                origin,
                e
            );
            ScoutConfig::default()
        }
    }
}
