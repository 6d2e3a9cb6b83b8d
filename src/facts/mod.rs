//! Fact extraction pipeline: page text → mode blocks → candidate pools → [`FactRecord`].
//!
//! Name → id resolution lives beside it in [`resolver`] and shares only the
//! output row with this path.

pub mod classify;
pub mod extract;
pub mod normalize;
pub mod resolver;
pub mod rules;
pub mod segment;

pub use classify::classify;
pub use extract::{pick_best, BoonFilter, Extraction, FactExtractor};
pub use normalize::normalize;
pub use resolver::{AliasTable, LookupTable};
pub use segment::{segment, MarkerConfig, ModeBlocks};

use crate::core::types::FactRecord;

/// Immutable per-run pipeline settings.
#[derive(Debug, Clone, Default)]
pub struct FactPipeline {
    markers: MarkerConfig,
    extractor: FactExtractor,
}

impl FactPipeline {
    pub fn new(markers: MarkerConfig, boon_filter: BoonFilter) -> Self {
        Self {
            markers,
            extractor: FactExtractor::new(boon_filter),
        }
    }

    /// Facts for one page. `None` or blank text means the page was
    /// unavailable and every fact is absent.
    pub fn run(&self, page_text: Option<&str>) -> FactRecord {
        match page_text {
            Some(text) if !text.trim().is_empty() => {
                classify(&segment(text, &self.markers), &self.extractor)
            }
            _ => FactRecord::unavailable(),
        }
    }
}
