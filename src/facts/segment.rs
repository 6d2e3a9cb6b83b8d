use crate::core::types::GameMode;

/// Candidate heading tokens per game mode, in priority order.
///
/// Tokens are matched against the ASCII-lowercased page text and are
/// lowercased on the way in.
#[derive(Debug, Clone)]
pub struct MarkerConfig {
    pve: Vec<String>,
    pvp: Vec<String>,
    wvw: Vec<String>,
}

fn default_candidates(mode: &str) -> Vec<String> {
    vec![
        format!("\n{mode}\n"),
        format!("#### {mode}"),
        mode.to_string(),
    ]
}

fn lowercase_all(candidates: Vec<String>) -> Vec<String> {
    candidates.into_iter().map(|c| c.to_ascii_lowercase()).collect()
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            pve: default_candidates("pve"),
            pvp: default_candidates("pvp"),
            wvw: default_candidates("wvw"),
        }
    }
}

impl MarkerConfig {
    pub fn with_pve(mut self, candidates: Vec<String>) -> Self {
        self.pve = lowercase_all(candidates);
        self
    }

    pub fn with_pvp(mut self, candidates: Vec<String>) -> Self {
        self.pvp = lowercase_all(candidates);
        self
    }

    pub fn with_wvw(mut self, candidates: Vec<String>) -> Self {
        self.wvw = lowercase_all(candidates);
        self
    }

    pub fn candidates(&self, mode: GameMode) -> &[String] {
        match mode {
            GameMode::Pve => &self.pve,
            GameMode::Pvp => &self.pvp,
            GameMode::Wvw => &self.wvw,
        }
    }

    /// Start offset of the first candidate (in priority order) that occurs
    /// anywhere in `lower`. A later candidate is never consulted once an earlier
    /// one is found, even if it occurs before it.
    pub fn locate(&self, lower: &str, mode: GameMode) -> Option<usize> {
        self.candidates(mode)
            .iter()
            .filter(|token| !token.is_empty())
            .find_map(|token| lower.find(token.as_str()))
    }
}

/// A page split into per-mode sub-texts. `all` is always the full input;
/// the others are empty when their marker was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeBlocks {
    pub all: String,
    pub pve: String,
    pub pvp: String,
    pub wvw: String,
}

impl ModeBlocks {
    pub fn get(&self, mode: GameMode) -> &str {
        match mode {
            GameMode::Pve => &self.pve,
            GameMode::Pvp => &self.pvp,
            GameMode::Wvw => &self.wvw,
        }
    }

    fn set(&mut self, mode: GameMode, block: String) {
        match mode {
            GameMode::Pve => self.pve = block,
            GameMode::Pvp => self.pvp = block,
            GameMode::Wvw => self.wvw = block,
        }
    }

    /// The WvW block when it has any non-whitespace content.
    pub fn wvw_text(&self) -> Option<&str> {
        let wvw = self.wvw.trim();
        (!wvw.is_empty()).then_some(wvw)
    }
}

/// Best-effort split of `text` into mode blocks.
///
/// Each found marker opens a block that runs up to the next found marker (by
/// offset) or to the end of the text. Text before the first marker belongs to
/// no mode block. Assumes at most one region per mode; repeated or nested
/// headings are not detected.
pub fn segment(text: &str, markers: &MarkerConfig) -> ModeBlocks {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();

    let mut found: Vec<(GameMode, usize)> = GameMode::ALL
        .iter()
        .filter_map(|mode| markers.locate(&lower, *mode).map(|idx| (*mode, idx)))
        .collect();
    found.sort_by_key(|(_, idx)| *idx);

    let mut blocks = ModeBlocks {
        all: text.to_string(),
        ..Default::default()
    };

    for (j, (mode, start)) in found.iter().enumerate() {
        let end = found.get(j + 1).map(|(_, idx)| *idx).unwrap_or(text.len());
        blocks.set(*mode, text[*start..end].to_string());
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_markers_partition_the_tail() {
        let text = "Endure Pain\nIntro text\nPvE\n33% Incoming Damage\nPvP\n25% Incoming Damage\nWvW\n20% Incoming Damage\nRecharge: 40";
        let blocks = segment(text, &MarkerConfig::default());

        assert_eq!(blocks.all, text);
        assert!(blocks.pve.starts_with("\nPvE\n"));
        assert!(blocks.pvp.starts_with("\nPvP\n"));
        assert!(blocks.wvw.starts_with("\nWvW\n"));
        assert!(blocks.wvw.ends_with("Recharge: 40"));

        let first = text.find("\nPvE\n").unwrap();
        let joined = format!("{}{}{}", blocks.pve, blocks.pvp, blocks.wvw);
        assert_eq!(joined, &text[first..]);
        assert!(!blocks.pve.contains("Intro text"));
    }

    #[test]
    fn no_markers_leaves_mode_blocks_empty() {
        let text = "Frost Aura\nGrants frost aura.";
        let blocks = segment(text, &MarkerConfig::default());
        assert_eq!(blocks.all, text);
        assert!(blocks.pve.is_empty());
        assert!(blocks.pvp.is_empty());
        assert!(blocks.wvw.is_empty());
        assert_eq!(blocks.wvw_text(), None);
    }

    #[test]
    fn blocks_follow_marker_offset_not_mode_order() {
        let text = "WvW\n10% Incoming Damage\nPvE\n20% Incoming Damage";
        let blocks = segment(text, &MarkerConfig::default());
        // "wvw" at offset 0 is found by the bare-word candidate
        assert_eq!(blocks.wvw, "WvW\n10% Incoming Damage");
        assert_eq!(blocks.pve, "\nPvE\n20% Incoming Damage");
        assert!(blocks.pvp.is_empty());
    }

    #[test]
    fn higher_priority_candidate_wins_even_when_later_in_text() {
        let text = "see wvw notes\n#### WvW\nWvW only text";
        let markers = MarkerConfig::default().with_wvw(vec!["#### wvw".into(), "wvw".into()]);
        let blocks = segment(text, &markers);
        assert_eq!(blocks.wvw, "#### WvW\nWvW only text");
    }

    #[test]
    fn single_marker_runs_to_end_of_text() {
        let text = "Header\nWvW\nDuration: 4s";
        let blocks = segment(text, &MarkerConfig::default());
        assert_eq!(blocks.wvw, "\nWvW\nDuration: 4s");
        assert_eq!(blocks.get(GameMode::Wvw), blocks.wvw);
    }

    #[test]
    fn empty_text_yields_empty_blocks() {
        let blocks = segment("", &MarkerConfig::default());
        assert_eq!(blocks, ModeBlocks::default());
    }
}
