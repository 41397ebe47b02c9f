//! Integration tests for gsd-forge

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashMap;

use gsd_forge::{
    corpus,
    gsd::{into_domains, Lexicon, MergeEngine, MergeReport, Pattern},
    types::Provenance,
};

fn counts(items: &[String]) -> HashMap<&str, usize> {
    let mut map = HashMap::new();
    for item in items {
        *map.entry(item.as_str()).or_insert(0) += 1;
    }
    map
}

#[test]
fn test_full_pipeline_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    std::fs::write(&input, "good.com\nsafe.org\n").unwrap();

    let original = corpus::load(&input).unwrap();
    assert_eq!(original.len(), 2);

    let mut engine = MergeEngine::with_seed(Lexicon::builtin(), 1234);
    let merged = engine.merge(original, 3);
    assert_eq!(merged.len(), 5);

    let report = MergeReport::from_merged(2, &merged);
    assert_eq!(report.synthetic_count, 3);
    assert!((report.synthetic_pct - 60.0).abs() < 1e-9);

    let domains = into_domains(merged);
    corpus::save(&domains, &output).unwrap();

    let reloaded = corpus::load(&output).unwrap();
    assert_eq!(counts(&reloaded), counts(&domains));
}

#[test]
fn test_scenario_two_originals_three_synthetic() {
    let lexicon = Lexicon::builtin();
    let original = vec!["good.com".to_string(), "safe.org".to_string()];

    let mut engine = MergeEngine::with_seed(lexicon.clone(), 99);
    let merged = engine.merge(original, 3);

    assert_eq!(merged.len(), 5);
    let domains = into_domains(merged.clone());
    assert_eq!(domains.iter().filter(|d| *d == "good.com").count(), 1);
    assert_eq!(domains.iter().filter(|d| *d == "safe.org").count(), 1);

    for entry in merged.iter().filter(|e| e.provenance == Provenance::Synthetic) {
        assert!(
            Pattern::classify(&entry.domain, &lexicon).is_some(),
            "synthetic domain {} does not match any grammar",
            entry.domain
        );
        assert!(
            lexicon
                .tlds()
                .iter()
                .any(|tld| entry.domain.ends_with(tld.as_str())),
            "synthetic domain {} has unexpected tld",
            entry.domain
        );
    }
}

#[test]
fn test_scenario_empty_original_zero_synthetic() {
    let mut engine = MergeEngine::with_seed(Lexicon::builtin(), 0);
    let merged = engine.merge(Vec::new(), 0);
    assert!(merged.is_empty());

    let report = MergeReport::from_merged(0, &merged);
    assert_eq!(report.synthetic_pct, 0.0);
    assert!(report.to_string().contains("GSD percentage: 0.00%"));
}

#[test]
fn test_seeded_merge_is_reproducible() {
    let original = vec!["a.com".to_string(), "b.net".to_string()];

    let mut first = MergeEngine::with_seed(Lexicon::builtin(), 77);
    let mut second = MergeEngine::with_seed(Lexicon::builtin(), 77);

    assert_eq!(
        first.merge(original.clone(), 10),
        second.merge(original, 10)
    );
}

#[test]
fn test_cli_blend_writes_output_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    std::fs::write(&input, "good.com\nsafe.org\n").unwrap();

    Command::cargo_bin("gsd-forge")
        .unwrap()
        .args([
            "blend",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "3",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OUTPUT ANALYSIS"))
        .stdout(predicate::str::contains("Total domains: 5"))
        .stdout(predicate::str::contains("GSD domains inserted: 3"));

    let written = corpus::load(&output).unwrap();
    assert_eq!(written.len(), 5);
}

#[test]
fn test_cli_blend_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    Command::cargo_bin("gsd-forge")
        .unwrap()
        .args(["blend", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_blend_empty_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "  \n\n").unwrap();

    Command::cargo_bin("gsd-forge")
        .unwrap()
        .args([
            "blend",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No domains to process"));

    assert!(!output.exists());
}

#[test]
fn test_cli_filter_keeps_even_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "one\ntwo\nthree\nfour\n").unwrap();

    Command::cargo_bin("gsd-forge")
        .unwrap()
        .args([
            "filter",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 4 lines"))
        .stdout(predicate::str::contains("Kept 2 even-numbered lines"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "two\nfour\n");
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("gsd-forge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("blend"));
}

#[test]
fn test_cli_unknown_command_fails() {
    Command::cargo_bin("gsd-forge")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command"));
}

#[test]
fn test_error_messages() {
    use gsd_forge::GsdForgeError;

    let error = GsdForgeError::not_found("missing.txt");
    assert!(error.to_string().contains("missing.txt"));

    let error = GsdForgeError::empty_corpus("empty.txt");
    assert!(error.to_string().contains("empty.txt"));

    let error = GsdForgeError::validation("bad lexicon");
    assert!(error.to_string().contains("bad lexicon"));
}

#[test]
fn test_library_initialization() {
    let result = gsd_forge::init();
    assert!(result.is_ok());
}
