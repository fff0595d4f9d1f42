// ABOUTME: Integration tests for the tibianews CLI binary.
// ABOUTME: Tests article and listing extraction from files and stdin, and failure exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tibianews_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tibianews").unwrap();
    cmd.env_remove("TIBIANEWS_API_HOST");
    cmd.env_remove("TIBIANEWS_GENERATION");
    cmd
}

const TICKER_HTML: &str = r#"<div class="NewsHeadline"><div class="NewsHeadlineBackground">
<img src="https://static.tibia.com/images/global/content/newsicon_support_big.gif" class="NewsHeadlineIcon">
<div class="NewsHeadlineDate">Oct&#160;17&#160;2023 - </div>
<div class="NewsHeadlineText">News Ticker</div></div></div>
<table><tr><td class="NewsTableContainer"><p>Hi there</p></td></tr></table>"#;

const LISTING_HTML: &str = r#"<table>
<tr class="Odd"><td>Oct&#160;17&#160;2023</td><td><img src="newsicon_technical_small.gif"><div>News</div></td>
<td><a href="https://www.tibia.com/news/?subtopic=newsarchive&amp;id=8123&amp;fbegind=1">Patch notes</a></td></tr>
</table>"#;

#[test]
fn article_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("ticker.html");
    fs::write(&html_path, TICKER_HTML).unwrap();

    tibianews_cmd()
        .arg("article")
        .arg("--id")
        .arg("8123")
        .arg("--url")
        .arg("https://www.tibia.com/news/?subtopic=newsarchive&id=8123")
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"ticker\""))
        .stdout(predicate::str::contains("\"content\": \"Hi there\""))
        .stdout(predicate::str::contains("\"date\": \"2023-10-17\""));
}

#[test]
fn listing_from_stdin_with_api_host() {
    let output = tibianews_cmd()
        .arg("list")
        .arg("--compact")
        .arg("--api-host")
        .arg("api.tibiadata.com")
        .write_stdin(LISTING_HTML)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 8123);
    assert_eq!(items[0]["url_api"], "https://api.tibiadata.com/v4/news/id/8123");
    assert_eq!(items[0]["url"], "https://www.tibia.com/news/?subtopic=newsarchive&id=8123");
}

#[test]
fn legacy_flag_names_unknown_values() {
    let markup = LISTING_HTML.replace("newsicon_technical_small.gif", "other.gif");

    tibianews_cmd()
        .arg("list")
        .arg("--legacy")
        .arg("--compact")
        .write_stdin(markup)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\":\"unknown\""))
        .stdout(predicate::str::contains("url_api").not());
}

#[test]
fn generation_option_selects_api_version() {
    let output = tibianews_cmd()
        .arg("list")
        .arg("--compact")
        .arg("--generation")
        .arg("v3")
        .arg("--api-host")
        .arg("api.tibiadata.com")
        .write_stdin(LISTING_HTML)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["url_api"], "https://api.tibiadata.com/v3/news/id/8123");
}

#[test]
fn generation_from_environment() {
    let markup = LISTING_HTML.replace("newsicon_technical_small.gif", "other.gif");

    tibianews_cmd()
        .env("TIBIANEWS_GENERATION", "legacy")
        .arg("list")
        .arg("--compact")
        .write_stdin(markup)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\":\"unknown\""));
}

#[test]
fn unparseable_markup_fails() {
    tibianews_cmd()
        .arg("list")
        .write_stdin("plain words, no tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse markup"));
}

#[test]
fn missing_file_fails() {
    tibianews_cmd()
        .arg("article")
        .arg("--id")
        .arg("1")
        .arg("--url")
        .arg("https://www.tibia.com/news/?id=1")
        .arg("/nonexistent/article.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
