use std::collections::HashMap;

use tracing::debug;

use super::normalize::normalize;
use crate::core::types::CatalogEntry;

/// Display-name overrides applied before the id lookup.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }

    /// The override for `name`, or `name` itself.
    pub fn get<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Name variant → skill id.
///
/// Every catalog entry is indexed under its exact name, its lowercase form and
/// its [`normalize`]d form. Colliding keys keep the entry inserted last; the
/// catalog legitimately contains several skills sharing a normalized name, so
/// this is not treated as an error.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    ids: HashMap<String, u64>,
}

impl LookupTable {
    pub fn build<'a, I>(catalog: I) -> Self
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        let mut ids = HashMap::new();
        for entry in catalog {
            ids.insert(entry.name.clone(), entry.id);
            ids.insert(entry.name.to_lowercase(), entry.id);
            ids.insert(normalize(&entry.name), entry.id);
        }
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve a display name: alias, then exact → lowercase → normalized key.
    pub fn resolve(&self, aliases: &AliasTable, name: &str) -> Option<u64> {
        let target = aliases.get(name);
        let id = self
            .ids
            .get(target)
            .or_else(|| self.ids.get(&target.to_lowercase()))
            .or_else(|| self.ids.get(&normalize(target)))
            .copied();
        if id.is_none() {
            debug!("no skill id for '{}' (looked up as '{}')", name, target);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, id: u64) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            id,
        }
    }

    #[test]
    fn canonical_names_always_resolve() {
        let catalog = vec![
            entry("Frost Aura", 5678),
            entry("\"Guard!\"", 9083),
            entry("Reaper's Shroud", 30792),
        ];
        let table = LookupTable::build(&catalog);
        let aliases = AliasTable::default();
        for e in &catalog {
            assert_eq!(table.resolve(&aliases, &e.name), Some(e.id));
        }
    }

    #[test]
    fn punctuation_and_case_fall_through_to_normalized_key() {
        let table = LookupTable::build(&[entry("\"Rise!\"", 11)]);
        let aliases = AliasTable::default();
        assert_eq!(table.resolve(&aliases, "RISE"), Some(11));
        assert_eq!(table.resolve(&aliases, "rise!"), Some(11));
        assert_eq!(table.resolve(&aliases, "Fall"), None);
    }

    #[test]
    fn alias_is_applied_before_lookup() {
        let table = LookupTable::build(&[entry("Ambrosia", 7)]);
        let aliases = AliasTable::new(HashMap::from([(
            "Drink Ambrosia".to_string(),
            "Ambrosia".to_string(),
        )]));
        assert_eq!(table.resolve(&aliases, "Drink Ambrosia"), Some(7));
        assert_eq!(table.resolve(&AliasTable::default(), "Drink Ambrosia"), None);
    }

    #[test]
    fn later_entry_wins_on_collision() {
        let table = LookupTable::build(&[entry("Guard!", 1), entry("\"Guard!\"", 2)]);
        let aliases = AliasTable::default();
        // both normalize to "guard"; exact keys stay distinct
        assert_eq!(table.resolve(&aliases, "Guard!"), Some(1));
        assert_eq!(table.resolve(&aliases, "GUARD"), Some(2));
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let table = LookupTable::build(&Vec::<CatalogEntry>::new());
        assert!(table.is_empty());
        assert_eq!(table.resolve(&AliasTable::default(), "Frost Aura"), None);
    }
}
