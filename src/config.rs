// src/config.rs

//! Output layout for the generator.
//!
//! There is no configuration file: the defaults below are the only layout the
//! consuming build understands. The struct exists so tests can point the
//! generator at a scratch directory.

use std::path::{Path, PathBuf};

/// First id handed out. Hand-written consumers hardcode this offset.
pub const COLOUR_ID_OFFSET: i32 = 20000;

/// Header path relative to the output root.
pub const HEADER_RELATIVE_PATH: &str = "src/ppl_colours.h";

/// Data file path relative to the output root.
pub const DATA_RELATIVE_PATH: &str = "src/ppl_colours.c";

/// Where and how the generated sources are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root that the relative output paths are resolved against.
    pub output_dir: PathBuf,
    /// Header path, relative to `output_dir`.
    pub header_path: PathBuf,
    /// Data file path, relative to `output_dir`.
    pub data_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from("."),
            header_path: PathBuf::from(HEADER_RELATIVE_PATH),
            data_path: PathBuf::from(DATA_RELATIVE_PATH),
        }
    }
}

impl GeneratorConfig {
    /// Default layout rooted at `output_dir`.
    pub fn with_output_dir(output_dir: impl AsRef<Path>) -> Self {
        GeneratorConfig {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn header_file(&self) -> PathBuf {
        self.output_dir.join(&self.header_path)
    }

    pub fn data_file(&self) -> PathBuf {
        self.output_dir.join(&self.data_path)
    }
}
