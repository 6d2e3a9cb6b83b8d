/// Canonical matching key for a skill display name.
///
/// Lowercases, folds `’` into `'`, drops every quotation mark and then every
/// character outside `[a-z0-9]`, so `"Rise!"` and `RISE` both become `rise`.
/// Total and idempotent.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .filter(|c| !matches!(c, '"' | '\u{201C}' | '\u{201D}'))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quotes_and_punctuation() {
        assert_eq!(normalize("\"Rise!\""), "rise");
        assert_eq!(normalize("Lesser \u{201C}Guard!\u{201D}"), "lesserguard");
        assert_eq!(normalize("Reaper\u{2019}s Shroud"), "reapersshroud");
        assert_eq!(normalize("Dual Orbits: Air and Earth"), "dualorbitsairandearth");
        assert_eq!(normalize("\"Flash-Freeze!\""), "flashfreeze");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! ---"), "");
        assert_eq!(normalize("Épée 2"), "pe2");
    }

    #[test]
    fn idempotent() {
        for s in ["", "Rite of the Great Dwarf", "\"Guard!\"", "ÀÉÎ  x9", "Reaper's Shroud"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }
}
