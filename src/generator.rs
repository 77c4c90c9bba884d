// src/generator.rs

//! Writes the generated header and data file to disk.
//!
//! The pipeline is linear: build the catalogue, render both files, write the
//! header, then write the data file. Files are always rewritten in full.
//! Nothing is rolled back: if the data file cannot be written, the header
//! already on disk stays as written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::catalogue::Catalogue;
use crate::codegen::{render_data, render_header};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub colour_count: usize,
    pub header_path: PathBuf,
    pub data_path: PathBuf,
}

/// Generates `src/ppl_colours.h` and `src/ppl_colours.c` under `output_dir`
/// from the standard colour table.
///
/// The `src` directory must already exist.
pub fn generate(output_dir: &Path) -> Result<GenerateReport> {
    let catalogue = Catalogue::standard()?;
    generate_with(&GeneratorConfig::with_output_dir(output_dir), catalogue)
}

/// Renders `catalogue` and writes both files to the locations in `config`.
pub fn generate_with(config: &GeneratorConfig, catalogue: &Catalogue) -> Result<GenerateReport> {
    info!("Generating sources for {} colours", catalogue.len());

    let header_path = config.header_file();
    let data_path = config.data_file();

    write_file(&header_path, &render_header(catalogue))?;
    write_file(&data_path, &render_data(catalogue))?;

    Ok(GenerateReport {
        colour_count: catalogue.len(),
        header_path,
        data_path,
    })
}

/// Creates (or truncates) `path` and writes `contents`, flushing before the
/// handle is dropped.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    let result = File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()
    });
    match result {
        Ok(()) => {
            info!("Wrote {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Failed to write {}: {}", path.display(), e);
            Err(GenerateError::io(path, e))
        }
    }
}
