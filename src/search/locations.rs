//! City to hierarchical location string lookup.
//!
//! Sourcing platforms want region-qualified locations; the table maps a
//! bare city to a `Country > Region > City` path. Unmapped cities pass
//! through literally. The table is per-instance state so batch callers
//! can override it without touching anyone else's assembler.

use std::collections::BTreeMap;

use crate::utils::text::fold_key;

/// Dutch region table from the sourcing playbook. Keyed per region so
/// overrides can be layered on top.
const NL_REGIONS: &[(&str, &[&str])] = &[
    ("Gelderland", &["Arnhem", "Nijmegen", "Apeldoorn", "Ede", "Doetinchem"]),
    ("Overijssel", &["Zwolle", "Enschede", "Deventer", "Almelo", "Hengelo"]),
    ("Noord-Brabant", &["Eindhoven", "Tilburg", "Breda", "'s-Hertogenbosch", "Helmond"]),
    ("Limburg", &["Maastricht", "Venlo", "Roermond", "Heerlen", "Sittard"]),
    ("Utrecht", &["Utrecht", "Amersfoort", "Nieuwegein", "Veenendaal", "Zeist"]),
    ("Noord-Holland", &["Amsterdam", "Haarlem", "Zaandam", "Amstelveen", "Hoofddorp"]),
    ("Zuid-Holland", &["Rotterdam", "Den Haag", "Delft", "Leiden", "Dordrecht"]),
];

/// Case-insensitive city lookup table.
#[derive(Debug, Clone)]
pub struct LocationIndex {
    entries: BTreeMap<String, String>,
}

impl Default for LocationIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocationIndex {
    /// The built-in Dutch city table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for (region, cities) in NL_REGIONS {
            for city in *cities {
                entries.insert(fold_key(city), format!("Netherlands > {region} > {city}"));
            }
        }
        Self { entries }
    }

    /// An empty table; every lookup passes through literally.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Layer caller overrides on top of the current table. Keys are
    /// city names, values the full hierarchy string.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (city, hierarchy) in overrides {
            self.entries.insert(fold_key(city), hierarchy.clone());
        }
        self
    }

    /// Map a city to its hierarchy string; unmapped cities pass through
    /// literally (trimmed).
    #[must_use]
    pub fn resolve(&self, location: &str) -> String {
        let trimmed = location.trim();
        self.entries
            .get(&fold_key(trimmed))
            .cloned()
            .unwrap_or_else(|| trimmed.to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
