use super::rules::{RuleCategory, RuleTier, DURATION, EXTRACTION_RULES, INVULN_ANY, INVULN_STRIKE, RECHARGE};
use super::segment::ModeBlocks;

/// Drops lines that describe a boon rather than the skill itself.
///
/// Pages such as Signet of Judgment list the Protection/Resolution boon facts
/// next to the skill's own passive, which would otherwise be picked up as the
/// skill's reduction.
#[derive(Debug, Clone)]
pub struct BoonFilter {
    prefixes: Vec<String>,
}

impl Default for BoonFilter {
    fn default() -> Self {
        Self::new(vec!["protection".to_string(), "resolution".to_string()])
    }
}

impl BoonFilter {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn is_boon_line(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.prefixes.iter().any(|p| lower.starts_with(p.as_str()))
    }

    /// `text` without its boon lines, re-joined with `\n`.
    pub fn apply(&self, text: &str) -> String {
        text.lines()
            .filter(|line| !self.is_boon_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Raw facts pulled out of one page, before classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub dmg_candidates: Vec<i64>,
    pub cond_candidates: Vec<i64>,
    pub invuln_strike: bool,
    pub invuln_any: bool,
    pub duration_s: Option<f64>,
    pub cooldown_s: Option<u32>,
}

/// Applies the rule table to page text.
#[derive(Debug, Clone, Default)]
pub struct FactExtractor {
    boon_filter: BoonFilter,
}

impl FactExtractor {
    pub fn new(boon_filter: BoonFilter) -> Self {
        Self { boon_filter }
    }

    /// Percentages are read from the WvW block when it has content, otherwise
    /// from the whole page; invulnerability always from the unfiltered page.
    pub fn extract(&self, blocks: &ModeBlocks) -> Extraction {
        let primary = blocks.wvw_text().unwrap_or(blocks.all.as_str());
        let (dmg_candidates, cond_candidates) = self.percentages(primary, None);

        Extraction {
            dmg_candidates,
            cond_candidates,
            invuln_strike: INVULN_STRIKE.is_match(&blocks.all),
            invuln_any: INVULN_ANY.is_match(&blocks.all),
            duration_s: first_duration(primary),
            cooldown_s: first_recharge(primary),
        }
    }

    /// Damage and condition pools for `text` after boon filtering. `tier`
    /// restricts the rules applied; `None` applies every rule.
    pub fn percentages(&self, text: &str, tier: Option<RuleTier>) -> (Vec<i64>, Vec<i64>) {
        let filtered = self.boon_filter.apply(text);
        let mut dmg = Vec::new();
        let mut cond = Vec::new();

        for rule in EXTRACTION_RULES
            .iter()
            .filter(|r| tier.map_or(true, |t| r.tier == t))
        {
            let pool = match rule.category {
                RuleCategory::Damage => &mut dmg,
                RuleCategory::Condition => &mut cond,
            };
            pool.extend(rule.percentages(&filtered));
        }

        (dmg, cond)
    }
}

fn first_duration(text: &str) -> Option<f64> {
    DURATION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn first_recharge(text: &str) -> Option<u32> {
    RECHARGE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Largest-magnitude candidate within [-100, 100], returned as a magnitude.
/// On equal magnitude the earlier candidate wins.
pub fn pick_best(candidates: &[i64]) -> Option<u8> {
    let mut best: Option<i64> = None;
    for &v in candidates.iter().filter(|v| (-100..=100).contains(*v)) {
        if best.map_or(true, |b| v.abs() > b.abs()) {
            best = Some(v);
        }
    }
    best.map(|b| b.unsigned_abs() as u8)
}
