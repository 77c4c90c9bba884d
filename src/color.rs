// src/color.rs

//! Defines the ink-mixture colour value (`Cmyk`) and the named table record
//! (`ColourEntry`).
//!
//! Channel values are passed straight through to the generated arrays; no
//! conversion to or from RGB happens here.

/// Number of grey levels between white and black (inclusive upper bound).
const GREY_LEVEL_MAX: u32 = 100;

/// A four-component ink mixture: cyan, magenta, yellow and black, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Cmyk { c, m, y, k }
    }

    /// Builds a mixture from `[c, m, y, k]`.
    pub const fn from_channels(channels: [f64; 4]) -> Self {
        Cmyk::new(channels[0], channels[1], channels[2], channels[3])
    }

    /// Pure black ink at `level` percent, i.e. `(0, 0, 0, level / 100)`.
    ///
    /// # Panics
    /// Panics if `level` is above 100.
    pub fn grey(level: u32) -> Self {
        if level > GREY_LEVEL_MAX {
            panic!("Invalid grey level: {}. Must be 0-100.", level);
        }
        Cmyk::new(0.0, 0.0, 0.0, f64::from(level) / f64::from(GREY_LEVEL_MAX))
    }

    /// Channels in C, M, Y, K order.
    pub fn channels(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Returns `true` when every channel lies within `[0, 1]`.
    pub fn is_in_unit_range(&self) -> bool {
        self.channels()
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

impl From<[f64; 4]> for Cmyk {
    fn from(channels: [f64; 4]) -> Self {
        Cmyk::from_channels(channels)
    }
}

/// A named colour as stored in the colour table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourEntry {
    /// Case-sensitive unique key, uppercase by convention.
    pub name: String,
    pub cmyk: Cmyk,
}

impl ColourEntry {
    pub fn new(name: impl Into<String>, cmyk: Cmyk) -> Self {
        ColourEntry {
            name: name.into(),
            cmyk,
        }
    }
}
