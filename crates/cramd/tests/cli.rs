//! Integration tests for the cram CLI commands.
//!
//! Everything here runs offline: generation paths are exercised only up to
//! the point where a missing API key stops them.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

// Helper function to create a clean command instance with no ambient key
fn cram() -> Command {
  let mut cmd = Command::cargo_bin("cram").unwrap();
  cmd.env_remove("OPENAI_API_KEY");
  cmd
}

// Helper to write a config file with no API key in it
fn keyless_config(dir: &tempfile::TempDir) -> PathBuf {
  let path = dir.path().join("config.toml");
  std::fs::write(&path, "model = \"gpt-3.5-turbo\"\n").unwrap();
  path
}

#[test]
fn help_lists_all_commands() {
  cram()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("summarize"))
    .stdout(predicate::str::contains("flashcards"))
    .stdout(predicate::str::contains("quiz"))
    .stdout(predicate::str::contains("study"));
}

#[test]
fn unsupported_extension_is_reported() {
  let dir = tempdir().unwrap();
  let config = keyless_config(&dir);
  let notes = dir.path().join("slides.pptx");
  std::fs::write(&notes, "not a supported format").unwrap();

  cram()
    .arg("summarize")
    .arg(&notes)
    .arg("--config")
    .arg(&config)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn missing_file_is_reported() {
  let dir = tempdir().unwrap();
  let config = keyless_config(&dir);

  cram()
    .arg("quiz")
    .arg(dir.path().join("nowhere.txt"))
    .arg("--config")
    .arg(&config)
    .assert()
    .failure();
}

#[test]
fn empty_document_short_circuits_before_the_model() {
  let dir = tempdir().unwrap();
  let config = keyless_config(&dir);
  let notes = dir.path().join("blank.txt");
  std::fs::write(&notes, "   \n  \n").unwrap();

  // No API key is configured, so reaching the model would fail; an empty
  // document must bail out before that.
  cram()
    .arg("summarize")
    .arg(&notes)
    .arg("--config")
    .arg(&config)
    .assert()
    .success()
    .stdout(predicate::str::contains("No text could be extracted"));
}

#[test]
fn generation_without_an_api_key_fails_cleanly() {
  let dir = tempdir().unwrap();
  let config = keyless_config(&dir);
  let notes = dir.path().join("notes.txt");
  std::fs::write(&notes, "The mitochondrion produces ATP.\n").unwrap();

  cram()
    .arg("flashcards")
    .arg(&notes)
    .arg("--config")
    .arg(&config)
    .assert()
    .failure()
    .stderr(predicate::str::contains("No API key"));
}

#[test]
fn invalid_summary_style_is_rejected_by_clap() {
  cram()
    .arg("summarize")
    .arg("notes.txt")
    .arg("--style")
    .arg("haiku")
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown summary style"));
}

#[test]
fn missing_config_file_is_reported() {
  cram()
    .arg("summarize")
    .arg("notes.txt")
    .arg("--config")
    .arg("definitely/not/a/config.toml")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load configuration"));
}
