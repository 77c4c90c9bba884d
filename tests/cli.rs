// tests/cli.rs

use std::fs;
use std::process::Command;

fn run_in(dir: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ppl-colours"))
        .current_dir(dir)
        .env("RUST_LOG", "info")
        .output()
        .expect("run ppl-colours")
}

#[test]
fn test_binary_generates_into_current_dir() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("src")).unwrap();

    let output = run_in(root.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let header = fs::read_to_string(root.path().join("src/ppl_colours.h")).unwrap();
    let data = fs::read_to_string(root.path().join("src/ppl_colours.c")).unwrap();
    assert_eq!(header.lines().filter(|l| l.starts_with("#define COLOUR_")).count(), 271);
    assert!(data.starts_with("// This file auto-generated by colours_generate.py\n"));
}

#[test]
fn test_binary_output_matches_library_rendering() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("src")).unwrap();
    assert!(run_in(root.path()).status.success());

    let catalogue = ppl_colours::Catalogue::standard().unwrap();
    assert_eq!(
        fs::read_to_string(root.path().join("src/ppl_colours.h")).unwrap(),
        ppl_colours::codegen::render_header(catalogue)
    );
    assert_eq!(
        fs::read_to_string(root.path().join("src/ppl_colours.c")).unwrap(),
        ppl_colours::codegen::render_data(catalogue)
    );
}

#[test]
fn test_binary_fails_without_writable_target() {
    let root = tempfile::tempdir().unwrap();
    // No src/ directory: the header cannot be created.
    let output = run_in(root.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to generate colour sources"));
    assert!(!root.path().join("src").exists());
}
