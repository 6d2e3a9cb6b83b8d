use std::time::Duration;

use tracing::{info, warn};

use super::progress::Progress;
use crate::core::error::ScoutResult;
use crate::core::types::{CatalogEntry, RunReport, SkillRow};
use crate::facts::{AliasTable, FactPipeline, LookupTable};
use crate::scraping::catalog::CatalogSource;
use crate::scraping::text::main_text;
use crate::scraping::wiki::PageSource;

/// Everything the run loop needs, built once before the first skill.
pub struct RunContext<'a> {
    pub catalog: &'a dyn CatalogSource,
    pub pages: &'a dyn PageSource,
    pub aliases: &'a AliasTable,
    pub pipeline: &'a FactPipeline,
    /// Pause after each skill so the wiki is not hammered.
    pub request_delay: Duration,
}

/// Index the catalog, logging every 500 entries and at the end.
pub fn index_catalog(entries: &[CatalogEntry]) -> LookupTable {
    let progress = Progress::start(entries.len());
    let total = entries.len();
    LookupTable::build(entries.iter().enumerate().map(|(i, entry)| {
        let done = i + 1;
        if done % 500 == 0 || done == total {
            info!("[api] Indexed {}/{} skills {}", done, total, progress.status(done));
        }
        entry
    }))
}

/// Process `skills` strictly in order: resolve the id, fetch the page,
/// extract facts. Only a catalog failure aborts; everything after that is
/// reported per row.
pub async fn run(ctx: &RunContext<'_>, skills: &[String]) -> ScoutResult<RunReport> {
    info!("Building name->id map from official API (ids=all)...");
    let api_progress = Progress::start(0);
    let entries = ctx.catalog.fetch_catalog().await?;
    let lookup = index_catalog(&entries);
    info!("[api] Done in {}", api_progress.elapsed());

    let mut report = RunReport::default();
    let progress = Progress::start(skills.len());

    for (i, name) in skills.iter().enumerate() {
        let id = lookup.resolve(ctx.aliases, name);
        if id.is_none() {
            report.unresolved.push(name.clone());
        }

        let page_text = ctx
            .pages
            .fetch_page(name)
            .await
            .map(|html| main_text(&html));
        let facts = ctx.pipeline.run(page_text.as_deref());

        report
            .rows
            .push(SkillRow::new(name, id, facts, ctx.pages.page_url(name)));

        info!(
            "[skills] {}/{} {} {}",
            i + 1,
            progress.total(),
            name,
            progress.status(i + 1)
        );

        if !ctx.request_delay.is_zero() {
            tokio::time::sleep(ctx.request_delay).await;
        }
    }

    Ok(report)
}

/// Log the names that did not resolve to an id.
pub fn report_unresolved(unresolved: &[String]) {
    if unresolved.is_empty() {
        return;
    }
    warn!("Could not resolve API ids for:");
    for name in unresolved {
        warn!("  - {}", name);
    }
    warn!("Tip: fill `aliases` in mitigation-scout.json for those names, or they may not exist as /v2/skills entries.");
}
