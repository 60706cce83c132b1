use std::fs;
use std::process::Command;

#[test]
fn check_prints_every_strategy() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let output = Command::new(exe)
        .args(["check", "Beast", "baste", "--all"])
        .output()
        .expect("check failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("is_anagram_prime- Beast, baste: true"));
    assert!(stdout.contains("is_anagram_lettercount- Beast, baste: true"));
    assert!(stdout.contains("is_anagram_sort- Beast, baste: true"));
    assert!(stdout.contains("is_anagram_checkoff- Beast, baste: true"));
}

#[test]
fn check_identical_words_is_false() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let output = Command::new(exe)
        .args(["check", "tea", "TEA", "--strategy", "sorted"])
        .output()
        .expect("check failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "is_anagram_sort- tea, TEA: false");
}

#[test]
fn largest_from_file() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "pat\nmouse\ntap\nchicken\nstop\npots\ntops\n").unwrap();

    let output = Command::new(exe)
        .args(["largest", corpus.to_str().unwrap()])
        .output()
        .expect("largest failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "pots\n");
}

#[test]
fn largest_without_anagrams_prints_empty_line() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let output = Command::new(exe)
        .args(["largest", "--words", "cat", "dog"])
        .output()
        .expect("largest failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
}

#[test]
fn groups_json_and_csv() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("groups.csv");

    let output = Command::new(exe)
        .args(["groups", "--json", "--csv", csv_path.to_str().unwrap()])
        .args(["--words", "abed", "abled", "bade", "baled", "bead", "blade"])
        .output()
        .expect("groups failed");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = value["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["fingerprint"], "462");
    assert_eq!(groups[0]["words"], serde_json::json!(["abed", "bade", "bead"]));
    assert_eq!(value["representative"], "abed");
    assert_eq!(value["stats"]["largest_group"], 3);

    let csv_text = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv_text.lines();
    assert_eq!(lines.next(), Some("fingerprint,size,words"));
    assert_eq!(lines.next(), Some("462,3,abed bade bead"));
    assert_eq!(lines.next(), Some("17094,3,abled baled blade"));
}

#[test]
fn invalid_word_fails_unless_skipped() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let output = Command::new(exe)
        .args(["groups", "--words", "tap", "Pat"])
        .output()
        .expect("groups failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--skip-invalid"));

    let output = Command::new(exe)
        .args(["groups", "--skip-invalid", "--words", "tap", "Pat", "apt"])
        .output()
        .expect("groups failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "7526: tap, apt");
}

#[test]
fn missing_corpus_file() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .args(["largest", dir.path().join("nope.txt").to_str().unwrap()])
        .output()
        .expect("largest failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading corpus"));
}

#[test]
fn group_summary_histogram() {
    let exe = env!("CARGO_BIN_EXE_group_summary");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "pat\nmouse\ntap\n\nstop\npots\ntops\nit's\n").unwrap();

    let output = Command::new(exe)
        .arg(&corpus)
        .output()
        .expect("group_summary failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1-word groups: 1"));
    assert!(stdout.contains("2-word groups: 1"));
    assert!(stdout.contains("3-word groups: 1"));
    assert!(stdout.contains("Skipped words: 1"));
    assert!(stdout.contains("Largest group representative: pots"));
}

#[test]
fn length_bounds_apply_to_bundled_dictionary() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let output = Command::new(exe)
        .args(["check", "eat", "tea", "--min-len", "4"])
        .output()
        .expect("check failed");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "is_anagram_prime- eat, tea: false"
    );

    let output = Command::new(exe)
        .args(["check", "tale", "late", "--min-len", "4", "--max-len", "4"])
        .output()
        .expect("check failed");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "is_anagram_prime- tale, late: true"
    );
}

#[test]
fn unwritable_csv_target_reports_path() {
    let exe = env!("CARGO_BIN_EXE_primegram");
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("missing").join("groups.csv");
    let output = Command::new(exe)
        .args(["groups", "--csv", csv_path.to_str().unwrap()])
        .args(["--words", "tap", "pat"])
        .output()
        .expect("groups failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error writing CSV"));
    assert!(stderr.contains("groups.csv"));
}
