// src/table.rs

//! The master colour table.
//!
//! The table is seeded from `LITERAL_COLOURS` and then extended with a
//! grey ramp: for every level 0..=100 one `GREY<nn>` and one `GRAY<nn>`
//! entry, both pure black ink at that percentage. Once built, the table is
//! read-only.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use log::debug;

use crate::color::{Cmyk, ColourEntry};
use crate::error::{GenerateError, Result};

/// Prefixes used for the generated grey ramp, in insertion order.
pub const GREY_PREFIXES: [&str; 2] = ["GREY", "GRAY"];

/// Levels covered by the generated grey ramp.
pub const GREY_LEVELS: RangeInclusive<u32> = 0..=100;

/// Number of entries the grey ramp adds to the table.
pub const GREY_RAMP_LEN: usize = 202;

/// Named colours, `[c, m, y, k]`.
pub const LITERAL_COLOURS: &[(&str, [f64; 4])] = &[
    ("GREENYELLOW", [0.15, 0.0, 0.69, 0.0]),
    ("YELLOW", [0.0, 0.0, 1.0, 0.0]),
    ("GOLDENROD", [0.0, 0.10, 0.84, 0.0]),
    ("DANDELION", [0.0, 0.29, 0.84, 0.0]),
    ("APRICOT", [0.0, 0.32, 0.52, 0.0]),
    ("PEACH", [0.0, 0.50, 0.70, 0.0]),
    ("MELON", [0.0, 0.46, 0.50, 0.0]),
    ("YELLOWORANGE", [0.0, 0.42, 1.0, 0.0]),
    ("ORANGE", [0.0, 0.61, 0.87, 0.0]),
    ("BURNTORANGE", [0.0, 0.51, 1.0, 0.0]),
    ("BITTERSWEET", [0.0, 0.75, 1.0, 0.24]),
    ("REDORANGE", [0.0, 0.77, 0.87, 0.0]),
    ("MAHOGANY", [0.0, 0.85, 0.87, 0.35]),
    ("MAROON", [0.0, 0.87, 0.68, 0.32]),
    ("BRICKRED", [0.0, 0.89, 0.94, 0.28]),
    ("RED", [0.0, 1.0, 1.0, 0.0]),
    ("ORANGERED", [0.0, 1.0, 0.50, 0.0]),
    ("RUBINERED", [0.0, 1.0, 0.13, 0.0]),
    ("WILDSTRAWBERRY", [0.0, 0.96, 0.39, 0.0]),
    ("SALMON", [0.0, 0.53, 0.38, 0.0]),
    ("CARNATIONPINK", [0.0, 0.63, 0.0, 0.0]),
    ("MAGENTA", [0.0, 1.0, 0.0, 0.0]),
    ("VIOLETRED", [0.0, 0.81, 0.0, 0.0]),
    ("RHODAMINE", [0.0, 0.82, 0.0, 0.0]),
    ("MULBERRY", [0.34, 0.90, 0.0, 0.02]),
    ("REDVIOLET", [0.07, 0.90, 0.0, 0.34]),
    ("FUCHSIA", [0.47, 0.91, 0.0, 0.08]),
    ("LAVENDER", [0.0, 0.48, 0.0, 0.0]),
    ("THISTLE", [0.12, 0.59, 0.0, 0.0]),
    ("ORCHID", [0.32, 0.64, 0.0, 0.0]),
    ("DARKORCHID", [0.40, 0.80, 0.20, 0.0]),
    ("PURPLE", [0.45, 0.86, 0.0, 0.0]),
    ("PLUM", [0.50, 1.0, 0.0, 0.0]),
    ("VIOLET", [0.79, 0.88, 0.0, 0.0]),
    ("ROYALPURPLE", [0.75, 0.90, 0.0, 0.0]),
    ("BLUEVIOLET", [0.86, 0.91, 0.0, 0.04]),
    ("PERIWINKLE", [0.57, 0.55, 0.0, 0.0]),
    ("CADETBLUE", [0.62, 0.57, 0.23, 0.0]),
    ("CORNFLOWERBLUE", [0.65, 0.13, 0.0, 0.0]),
    ("MIDNIGHTBLUE", [0.98, 0.13, 0.0, 0.43]),
    ("NAVYBLUE", [0.94, 0.54, 0.0, 0.0]),
    ("ROYALBLUE", [1.0, 0.50, 0.0, 0.0]),
    ("BLUE", [1.0, 1.0, 0.0, 0.0]),
    ("CERULEAN", [0.94, 0.11, 0.0, 0.0]),
    ("CYAN", [1.0, 0.0, 0.0, 0.0]),
    ("PROCESSBLUE", [0.96, 0.0, 0.0, 0.0]),
    ("SKYBLUE", [0.62, 0.0, 0.12, 0.0]),
    ("TURQUOISE", [0.85, 0.0, 0.20, 0.0]),
    ("TEALBLUE", [0.86, 0.0, 0.34, 0.02]),
    ("AQUAMARINE", [0.82, 0.0, 0.30, 0.0]),
    ("BLUEGREEN", [0.85, 0.0, 0.33, 0.0]),
    ("EMERALD", [1.0, 0.0, 0.50, 0.0]),
    ("JUNGLEGREEN", [0.99, 0.0, 0.52, 0.0]),
    ("SEAGREEN", [0.69, 0.0, 0.50, 0.0]),
    ("GREEN", [1.0, 0.0, 1.0, 0.0]),
    ("FORESTGREEN", [0.91, 0.0, 0.88, 0.12]),
    ("PINEGREEN", [0.92, 0.0, 0.59, 0.25]),
    ("LIMEGREEN", [0.50, 0.0, 1.0, 0.0]),
    ("YELLOWGREEN", [0.44, 0.0, 0.74, 0.0]),
    ("SPRINGGREEN", [0.26, 0.0, 0.76, 0.0]),
    ("OLIVEGREEN", [0.64, 0.0, 0.95, 0.40]),
    ("RAWSIENNA", [0.0, 0.72, 1.0, 0.45]),
    ("SEPIA", [0.0, 0.83, 1.0, 0.70]),
    ("BROWN", [0.0, 0.81, 1.0, 0.60]),
    ("TAN", [0.14, 0.42, 0.56, 0.0]),
    ("GRAY", [0.0, 0.0, 0.0, 0.50]),
    ("GREY", [0.0, 0.0, 0.0, 0.50]),
    ("BLACK", [0.0, 0.0, 0.0, 1.0]),
    ("WHITE", [0.0, 0.0, 0.0, 0.0]),
];

/// Formats a grey ramp name, zero-padding the level to two digits.
pub fn grey_name(prefix: &str, level: u32) -> String {
    format!("{}{:02}", prefix, level)
}

/// Accumulates entries and rejects duplicate names.
#[derive(Debug, Default)]
pub struct ColourTableBuilder {
    entries: Vec<ColourEntry>,
    index: HashMap<String, usize>,
}

impl ColourTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry.
    ///
    /// # Errors
    /// Returns `GenerateError::DuplicateColour` if `name` is already present.
    pub fn insert(&mut self, name: &str, cmyk: Cmyk) -> Result<&mut Self> {
        if self.index.contains_key(name) {
            return Err(GenerateError::DuplicateColour {
                name: name.to_string(),
            });
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(ColourEntry::new(name, cmyk));
        Ok(self)
    }

    /// Adds every `(name, [c, m, y, k])` pair in order.
    pub fn with_literals(mut self, literals: &[(&str, [f64; 4])]) -> Result<Self> {
        for (name, channels) in literals {
            self.insert(name, Cmyk::from_channels(*channels))?;
        }
        debug!("Added {} literal colours", literals.len());
        Ok(self)
    }

    /// Adds the `GREY<nn>`/`GRAY<nn>` ramp.
    pub fn with_grey_ramp(mut self) -> Result<Self> {
        let before = self.entries.len();
        for level in GREY_LEVELS {
            for prefix in GREY_PREFIXES {
                self.insert(&grey_name(prefix, level), Cmyk::grey(level))?;
            }
        }
        debug!("Added {} grey ramp colours", self.entries.len() - before);
        Ok(self)
    }

    pub fn build(self) -> ColourTable {
        ColourTable {
            entries: self.entries,
            index: self.index,
        }
    }
}

/// Insertion-ordered mapping from colour name to `ColourEntry`.
#[derive(Debug, Clone)]
pub struct ColourTable {
    entries: Vec<ColourEntry>,
    index: HashMap<String, usize>,
}

impl ColourTable {
    /// The literal colours followed by the grey ramp.
    pub fn standard() -> Result<Self> {
        let table = ColourTableBuilder::new()
            .with_literals(LITERAL_COLOURS)?
            .with_grey_ramp()?
            .build();
        debug!("Colour table built with {} entries", table.len());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ColourEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in insertion order. Output order is never derived from this.
    pub fn iter(&self) -> impl Iterator<Item = &ColourEntry> {
        self.entries.iter()
    }

    /// All names in ascending byte order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}
