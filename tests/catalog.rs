use soundlib::command::catalog::{
    catalog_directory, render_catalog, write_catalog, CatalogOptions, Output, WriteMode,
};
use soundlib::{HierarchyBuilder, DEFAULT_OUTPUT_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn sample_library(root: &Path) -> PathBuf {
    let kit = root.join("kit");
    fs::create_dir(&kit).unwrap();
    fs::write(kit.join("Piano_120_C_I-IV-V.mp3"), b"").unwrap();
    fs::create_dir(kit.join("extras")).unwrap();
    kit
}

#[test]
fn overwrite_leaves_a_single_document() {
    let temp_dir = TempDir::new().unwrap();
    let kit = sample_library(temp_dir.path());
    let output = temp_dir.path().join("library.json");
    let options = CatalogOptions {
        output: Output::File(output.clone()),
        mode: WriteMode::Overwrite,
    };

    let builder = HierarchyBuilder::new();
    let node = catalog_directory(&kit, &builder, &options).unwrap();
    catalog_directory(&kit, &builder, &options).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, render_catalog(&node).unwrap());
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, node.to_json());
}

#[test]
fn append_concatenates_documents() {
    let temp_dir = TempDir::new().unwrap();
    let kit = sample_library(temp_dir.path());
    let output = temp_dir.path().join("library.json");
    let options = CatalogOptions {
        output: Output::File(output.clone()),
        mode: WriteMode::Append,
    };

    let node = HierarchyBuilder::new().build(&kit).unwrap();
    write_catalog(&node, &options).unwrap();
    write_catalog(&node, &options).unwrap();

    let document = render_catalog(&node).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, format!("{document}{document}"));
    assert!(serde_json::from_str::<serde_json::Value>(&text).is_err());

    let documents: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&text)
        .into_iter::<serde_json::Value>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(documents.len(), 2);
}

#[test]
fn failed_build_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("library.json");
    let options = CatalogOptions {
        output: Output::File(output.clone()),
        mode: WriteMode::Append,
    };

    let result = catalog_directory(
        &temp_dir.path().join("missing"),
        &HierarchyBuilder::new(),
        &options,
    );
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn dash_selects_stdout() {
    assert_eq!(Output::from_arg(Path::new("-")), Output::Stdout);
    assert_eq!(
        Output::from_arg(Path::new("out.json")),
        Output::File(PathBuf::from("out.json"))
    );
    assert_eq!(
        CatalogOptions::default().output,
        Output::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
    );
}

#[test]
fn cli_writes_default_file_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let kit = sample_library(temp_dir.path());

    let status = Command::new(env!("CARGO_BIN_EXE_soundlib"))
        .arg(&kit)
        .current_dir(temp_dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let text = fs::read_to_string(temp_dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["netsbloxSoundLibrary"].as_array().unwrap().len(), 2);
    assert!(text.starts_with("{\n  \"netsbloxSoundLibrary\": ["));
}

#[test]
fn cli_defaults_to_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let kit = sample_library(temp_dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_soundlib"))
        .args(["--sort", "-o", "-"])
        .current_dir(&kit)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let children = parsed["netsbloxSoundLibrary"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["Path"], "./Piano_120_C_I-IV-V.mp3");
    assert!(!kit.join(DEFAULT_OUTPUT_FILE).exists());
}

#[test]
fn cli_append_runs_concatenate() {
    let temp_dir = TempDir::new().unwrap();
    let kit = sample_library(temp_dir.path());

    for _ in 0..2 {
        let status = Command::new(env!("CARGO_BIN_EXE_soundlib"))
            .arg("--append")
            .arg(&kit)
            .current_dir(temp_dir.path())
            .status()
            .unwrap();
        assert!(status.success());
    }

    let text = fs::read_to_string(temp_dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap();
    assert!(text.contains("}{"));
    assert!(serde_json::from_str::<serde_json::Value>(&text).is_err());
}

#[test]
fn cli_fails_on_missing_directory() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_soundlib"))
        .arg("does-not-exist")
        .env_remove("RUST_LOG")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("does-not-exist").count(), 1);
    assert!(!temp_dir.path().join(DEFAULT_OUTPUT_FILE).exists());
}

#[test]
fn cli_repeat_runs_replace_output() {
    let temp_dir = TempDir::new().unwrap();
    let kit = sample_library(temp_dir.path());

    for _ in 0..2 {
        let status = Command::new(env!("CARGO_BIN_EXE_soundlib"))
            .arg(&kit)
            .current_dir(temp_dir.path())
            .status()
            .unwrap();
        assert!(status.success());
    }

    let text = fs::read_to_string(temp_dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap();
    assert!(!text.contains("}{"));
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["netsbloxSoundLibrary"].as_array().unwrap().len(), 2);
}
