//! Phrasing table for mitigation facts.
//!
//! Every pattern is case-insensitive and compiled once. New wordings are added
//! to [`EXTRACTION_RULES`]; the extractor iterates the table and never needs
//! to know about individual phrasings.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Which candidate pool a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Reduction of all incoming (or incoming strike) damage.
    Damage,
    /// Reduction of incoming condition damage only.
    Condition,
}

/// `Strict` rules are the literal `<n>% Incoming ... Damage` tooltip facts and
/// are the only ones re-run by the full-text fallback pass. `Prose` rules
/// cover free-text descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTier {
    Strict,
    Prose,
}

#[derive(Debug)]
pub struct ExtractionRule {
    pub category: RuleCategory,
    pub tier: RuleTier,
    /// Capture group 1 is the signed integer percentage.
    pub pattern: Regex,
}

impl ExtractionRule {
    fn new(category: RuleCategory, tier: RuleTier, pattern: &str) -> Self {
        Self {
            category,
            tier,
            pattern: Regex::new(pattern).expect("extraction rule regex"),
        }
    }

    /// Every captured percentage in `text`, in match order. Captures that do
    /// not fit an `i64` are skipped.
    pub fn percentages<'t>(&'t self, text: &'t str) -> impl Iterator<Item = i64> + 't {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<i64>().ok())
    }
}

/// Pool order within a category follows table order.
pub static EXTRACTION_RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use RuleCategory::*;
    use RuleTier::*;
    vec![
        ExtractionRule::new(Damage, Strict, r"(?i)([+-]?\d+)\s*%\s+Incoming Damage\b"),
        ExtractionRule::new(
            Condition,
            Strict,
            r"(?i)([+-]?\d+)\s*%\s+Incoming Condition Damage\b",
        ),
        ExtractionRule::new(Damage, Prose, r"(?i)([+-]?\d+)\s*%\s+Incoming Strike Damage\b"),
        ExtractionRule::new(
            Damage,
            Prose,
            r"(?i)Incoming damage (?:is )?(?:reduced|decreased) by\s*([+-]?\d+)\s*%",
        ),
        ExtractionRule::new(
            Damage,
            Prose,
            r"(?i)Damage taken (?:is )?(?:reduced|decreased) by\s*([+-]?\d+)\s*%",
        ),
        ExtractionRule::new(
            Condition,
            Prose,
            r"(?i)Incoming condition damage (?:is )?(?:reduced|decreased) by\s*([+-]?\d+)\s*%",
        ),
    ]
});

/// Invulnerability limited to strikes/attacks.
pub static INVULN_STRIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)take no damage from (attacks|strikes)|invulnerable to (attacks|strikes)")
        .expect("INVULN_STRIKE regex")
});

/// Any invulnerability wording.
pub static INVULN_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\binvulnerab|\btake no damage\b").expect("INVULN_ANY regex")
});

/// `Recharge: 40` (colon optional).
pub static RECHARGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bRecharge\b\s*:?\s*(\d+)\b").expect("RECHARGE regex")
});

/// `Duration: 2.5s`, `Duration 4 sec`, `Duration: 3 seconds`.
pub static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bDuration\b\s*:?\s*(\d+(?:\.\d+)?)\s*(?:s|sec|seconds)\b")
        .expect("DURATION regex")
});
