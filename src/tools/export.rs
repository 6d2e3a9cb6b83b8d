use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::error::ScoutResult;
use crate::core::types::SkillRow;

/// Column order of the output table; matches the field order of [`SkillRow`].
pub const COLUMNS: [&str; 11] = [
    "name",
    "api_skill_id",
    "wvw_incoming_damage_reduction_pct",
    "wvw_incoming_condition_damage_reduction_pct",
    "scope",
    "mechanic_type",
    "invuln_detected",
    "invuln_strike_only",
    "wvw_duration_s_guess",
    "wvw_cooldown_s_guess",
    "gw2skills_url",
];

/// Serialize rows as CSV (header first) into any writer. Absent values are
/// written as empty cells.
pub fn write_rows<W: Write>(writer: W, rows: &[SkillRow]) -> ScoutResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        wtr.write_record(COLUMNS)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv(path: &Path, rows: &[SkillRow]) -> ScoutResult<()> {
    let file = std::fs::File::create(path)?;
    write_rows(file, rows)?;
    info!("Wrote {} with {} rows.", path.display(), rows.len());
    Ok(())
}
