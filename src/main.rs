// src/main.rs

use std::path::Path;

use anyhow::Context;
use log::info;

use ppl_colours::generate;

/// Writes `src/ppl_colours.h` and `src/ppl_colours.c` relative to the
/// current directory.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let report = generate(Path::new(".")).context("Failed to generate colour sources")?;

    info!(
        "Generated {} colours into {} and {}",
        report.colour_count,
        report.header_path.display(),
        report.data_path.display()
    );
    Ok(())
}
