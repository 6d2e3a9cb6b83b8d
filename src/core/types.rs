use serde::{Deserialize, Serialize};

/// One `{name, id}` pair from the bulk skills catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub id: u64,
}

/// Raw skill object as returned by `/v2/skills?ids=all`.
/// Only the two fields we index are kept; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct ApiSkill {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

impl ApiSkill {
    /// Entries with a missing/empty name or a zero id are not indexable.
    pub fn into_entry(self) -> Option<CatalogEntry> {
        let name = self.name.filter(|n| !n.is_empty())?;
        let id = self.id.filter(|id| *id != 0)?;
        Some(CatalogEntry { name, id })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Pve,
    Pvp,
    Wvw,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Pve, GameMode::Pvp, GameMode::Wvw];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Pve => "pve",
            GameMode::Pvp => "pvp",
            GameMode::Wvw => "wvw",
        }
    }
}

/// Which kind of incoming damage a mitigation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    All,
    CondOnly,
    StrikeOnly,
    Unknown,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::CondOnly => "cond_only",
            Scope::StrikeOnly => "strike_only",
            Scope::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MechanicType {
    PctReduction,
    Invuln,
    Other,
}

impl MechanicType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MechanicType::PctReduction => "pct_reduction",
            MechanicType::Invuln => "invuln",
            MechanicType::Other => "other",
        }
    }
}

/// Mitigation facts derived from a single page.
///
/// The invulnerability flags are `None` only when the page itself was
/// unavailable; a fetched page always yields `Some(_)` for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
    pub incoming_damage_reduction_pct: Option<u8>,
    pub incoming_condition_damage_reduction_pct: Option<u8>,
    pub scope: Scope,
    pub mechanic_type: MechanicType,
    pub invuln_detected: Option<bool>,
    pub invuln_strike_only: Option<bool>,
    pub duration_s: Option<f64>,
    pub cooldown_s: Option<u32>,
}

impl FactRecord {
    /// Record for a page that could not be fetched: every fact absent.
    pub fn unavailable() -> Self {
        Self {
            incoming_damage_reduction_pct: None,
            incoming_condition_damage_reduction_pct: None,
            scope: Scope::Unknown,
            mechanic_type: MechanicType::Other,
            invuln_detected: None,
            invuln_strike_only: None,
            duration_s: None,
            cooldown_s: None,
        }
    }
}

impl Default for FactRecord {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// One output row; field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRow {
    pub name: String,
    pub api_skill_id: Option<u64>,
    pub wvw_incoming_damage_reduction_pct: Option<u8>,
    pub wvw_incoming_condition_damage_reduction_pct: Option<u8>,
    pub scope: Scope,
    pub mechanic_type: MechanicType,
    pub invuln_detected: Option<bool>,
    pub invuln_strike_only: Option<bool>,
    pub wvw_duration_s_guess: Option<f64>,
    pub wvw_cooldown_s_guess: Option<u32>,
    pub gw2skills_url: String,
}

impl SkillRow {
    pub fn new(name: &str, api_skill_id: Option<u64>, facts: FactRecord, url: String) -> Self {
        Self {
            name: name.to_string(),
            api_skill_id,
            wvw_incoming_damage_reduction_pct: facts.incoming_damage_reduction_pct,
            wvw_incoming_condition_damage_reduction_pct: facts
                .incoming_condition_damage_reduction_pct,
            scope: facts.scope,
            mechanic_type: facts.mechanic_type,
            invuln_detected: facts.invuln_detected,
            invuln_strike_only: facts.invuln_strike_only,
            wvw_duration_s_guess: facts.duration_s,
            wvw_cooldown_s_guess: facts.cooldown_s,
            gw2skills_url: url,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub rows: Vec<SkillRow>,
    pub unresolved: Vec<String>,
}
