use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pwd_audit() -> Command {
    let mut cmd = Command::cargo_bin("pwd-audit").unwrap();
    cmd.env_remove("PWD_AUDIT_WORDS_PATH")
        .env_remove("PWD_AUDIT_SCORER")
        .env("RUST_LOG", "pwd_audit=info");
    cmd
}

#[test]
fn test_usage_hint_without_actions() {
    pwd_audit()
        .assert()
        .success()
        .stdout(predicate::str::contains("Provide --password"));
}

#[test]
fn test_analyze_with_heuristic_scorer() {
    pwd_audit()
        .args(["--password", "password", "--heuristic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scorer: heuristic"))
        .stdout(predicate::str::contains("Score: 0/4"))
        .stdout(predicate::str::contains("Feedback: Contains a common word"));
}

#[test]
fn test_analyze_penalizes_inputs() {
    pwd_audit()
        .args(["--password", "Biscuit2014!", "--inputs", "biscuit", "--heuristic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("personal information"));
}

#[test]
fn test_scorer_env_override() {
    pwd_audit()
        .env("PWD_AUDIT_SCORER", "heuristic")
        .args(["--password", "xQ7#mV2!rT9$kL4&"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scorer: heuristic"))
        .stdout(predicate::str::contains("Crack time: months or more"));
}

#[test]
fn test_wordlist_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out").join("alice.txt");

    pwd_audit()
        .args(["--inputs", "alice", "--years", "1990", "--max-size", "100", "--wordlist"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated wordlist with 100 entries"));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "alice");
    assert!(content.ends_with('\n'));
}

#[test]
fn test_wordlist_without_leet_or_years() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.txt");

    pwd_audit()
        .args(["--inputs", "rex", "ace", "--years", "", "--no-leet", "--separators", ""])
        .arg("--wordlist")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated wordlist with 24 entries"));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    // 3 case forms per token, then 3 x 3 joins in each direction
    assert_eq!(&lines[..6], &["rex", "REX", "Rex", "ace", "ACE", "Ace"]);
    assert_eq!(lines.len(), 6 + 18);
    assert_eq!(lines[6], "rexace");
    assert!(lines.contains(&"AceRex"));
}

#[test]
fn test_max_size_zero_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.txt");

    pwd_audit()
        .args(["--inputs", "alice", "--max-size", "0", "--wordlist"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum wordlist size must be at least 1"));

    assert!(!path.exists());
}

#[test]
fn test_reversed_years_fail() {
    let dir = tempdir().unwrap();

    pwd_audit()
        .args(["--inputs", "alice", "--years", "2000-1990", "--wordlist"])
        .arg(dir.path().join("never.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("2000-1990"))
        .stderr(predicate::str::contains("range start is after range end"));
}
