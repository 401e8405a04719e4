// ABOUTME: Integration tests for the gramlens CLI binary.
// ABOUTME: Tests saved-HTML extraction, output files, and argument validation.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn gramlens_cmd() -> Command {
    Command::cargo_bin("gramlens").unwrap()
}

const SAVED_POST_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Some User (@someuser) on Instagram</title>
    <meta property="og:description" content="1,234 Likes, 56 Comments - some caption">
    <script type="application/ld+json">{
        "uploadDate": "2024-08-16T05:00:00.000Z",
        "caption": "some caption"
    }</script>
</head>
<body></body>
</html>"#;

#[test]
fn extract_from_saved_html() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("post.html");
    fs::write(&html_path, SAVED_POST_HTML).unwrap();

    gramlens_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://www.instagram.com/p/ABC123/")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-08-16 14:00 (KST)"))
        .stdout(predicate::str::contains("\"likes\": \"1,234\""))
        .stdout(predicate::str::contains("\"postType\": \"Post\""));
}

#[test]
fn invalid_url_prints_error_record_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("post.html");
    fs::write(&html_path, SAVED_POST_HTML).unwrap();

    gramlens_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://www.example.com/p/ABC123/")
        .assert()
        .failure()
        .stdout(predicate::str::contains("유효하지 않은 인스타그램 URL"));
}

#[test]
fn output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("post.html");
    let output_path = temp_dir.path().join("report.json");
    fs::write(&html_path, SAVED_POST_HTML).unwrap();

    gramlens_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://www.instagram.com/reel/XYZ789/")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let output_content = fs::read_to_string(&output_path).unwrap();
    assert!(output_content.contains("\"postType\": \"Reel\""));
    assert!(output_content.contains("\"views\": \"비공개\""));
}

#[test]
fn timing_flag_prints_elapsed() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("post.html");
    fs::write(&html_path, SAVED_POST_HTML).unwrap();

    gramlens_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://www.instagram.com/p/ABC123/")
        .arg("--timing")
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"))
        .stderr(predicate::str::contains("ms"));
}

#[test]
fn missing_url_with_html_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("post.html");
    fs::write(&html_path, SAVED_POST_HTML).unwrap();

    gramlens_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url is required"));
}

#[test]
fn no_args_fails() {
    gramlens_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one URL is required"));
}
