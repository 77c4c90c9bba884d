// src/catalogue.rs

//! The sorted view of the colour table.
//!
//! Names are sorted by ordinal (byte) comparison and each one gets the id
//! `COLOUR_ID_OFFSET + index`. This ordering is the only one used for output:
//! both generated files and every lookup here index colours by it.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::OnceCell;

use crate::color::Cmyk;
use crate::config::COLOUR_ID_OFFSET;
use crate::error::Result;
use crate::table::ColourTable;

/// Prefix of the symbolic constants emitted in the header.
pub const TOKEN_PREFIX: &str = "COLOUR_";

/// One colour in SortedNames order together with its assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    pub id: i32,
    pub name: String,
    pub cmyk: Cmyk,
}

impl CatalogueEntry {
    /// The header's symbolic constant for this colour, e.g. `COLOUR_RED`.
    pub fn token(&self) -> String {
        format!("{}{}", TOKEN_PREFIX, self.name)
    }

    /// Length of the name in characters.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

#[derive(Debug, Clone)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    by_name: HashMap<String, usize>,
}

static STANDARD: OnceCell<Catalogue> = OnceCell::new();

impl Catalogue {
    pub fn from_table(table: &ColourTable) -> Self {
        let entries: Vec<CatalogueEntry> = table
            .sorted_names()
            .into_iter()
            .enumerate()
            .filter_map(|(index, name)| {
                let entry = table.get(name)?;
                Some(CatalogueEntry {
                    id: COLOUR_ID_OFFSET + index as i32,
                    name: entry.name.clone(),
                    cmyk: entry.cmyk,
                })
            })
            .collect();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        debug!(
            "Catalogue assigned ids {}..={} to {} colours",
            COLOUR_ID_OFFSET,
            COLOUR_ID_OFFSET + entries.len() as i32 - 1,
            entries.len()
        );
        Catalogue { entries, by_name }
    }

    /// The catalogue of the standard table, built on first use.
    pub fn standard() -> Result<&'static Catalogue> {
        STANDARD.get_or_try_init(|| ColourTable::standard().map(|t| Catalogue::from_table(&t)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in SortedNames order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogueEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&CatalogueEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn id_of(&self, name: &str) -> Option<i32> {
        self.get(name).map(|e| e.id)
    }

    /// Resolves a user-typed name: surrounding whitespace is ignored and
    /// ASCII case does not matter.
    pub fn resolve(&self, name: &str) -> Option<&CatalogueEntry> {
        let name = name.trim();
        self.get(name)
            .or_else(|| self.get(&name.to_ascii_uppercase()))
            .or_else(|| self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name)))
    }

    pub fn by_id(&self, id: i32) -> Option<&CatalogueEntry> {
        let index = id.checked_sub(COLOUR_ID_OFFSET)?;
        usize::try_from(index).ok().and_then(|i| self.entries.get(i))
    }

    pub fn name_of(&self, id: i32) -> Option<&str> {
        self.by_id(id).map(|e| e.name.as_str())
    }

    pub fn cmyk_of(&self, id: i32) -> Option<Cmyk> {
        self.by_id(id).map(|e| e.cmyk)
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a CatalogueEntry;
    type IntoIter = std::slice::Iter<'a, CatalogueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
