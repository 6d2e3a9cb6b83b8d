use tracing::debug;

use super::extract::{pick_best, FactExtractor};
use super::rules::RuleTier;
use super::segment::ModeBlocks;
use crate::core::types::{FactRecord, MechanicType, Scope};

/// Turn a segmented page into a [`FactRecord`].
///
/// If the WvW block exists but yields neither a damage nor a condition
/// percentage, the strict percentage rules are re-run over the whole page.
pub fn classify(blocks: &ModeBlocks, extractor: &FactExtractor) -> FactRecord {
    let extraction = extractor.extract(blocks);
    let mut dmg = pick_best(&extraction.dmg_candidates);
    let mut cond = pick_best(&extraction.cond_candidates);

    if blocks.wvw_text().is_some() && dmg.is_none() && cond.is_none() {
        let (dmg_all, cond_all) = extractor.percentages(&blocks.all, Some(RuleTier::Strict));
        dmg = pick_best(&dmg_all);
        cond = pick_best(&cond_all);
        debug!("wvw block had no percentages; full-text fallback gave dmg={:?} cond={:?}", dmg, cond);
    }

    // dmg with or without cond is the same `All` outcome.
    let (scope, mechanic_type) = if extraction.invuln_strike {
        dmg = Some(100);
        (Scope::StrikeOnly, MechanicType::Invuln)
    } else if extraction.invuln_any {
        dmg = Some(100);
        cond = Some(100);
        (Scope::All, MechanicType::Invuln)
    } else if dmg.is_some() {
        (Scope::All, MechanicType::PctReduction)
    } else if cond.is_some() {
        (Scope::CondOnly, MechanicType::PctReduction)
    } else {
        (Scope::Unknown, MechanicType::Other)
    };

    FactRecord {
        incoming_damage_reduction_pct: dmg,
        incoming_condition_damage_reduction_pct: cond,
        scope,
        mechanic_type,
        invuln_detected: Some(extraction.invuln_any),
        invuln_strike_only: Some(extraction.invuln_strike),
        duration_s: extraction.duration_s,
        cooldown_s: extraction.cooldown_s,
    }
}
