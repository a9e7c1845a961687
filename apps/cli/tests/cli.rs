use assert_cmd::Command;
use predicates::prelude::*;

fn fxfeed() -> Command {
    let mut cmd = Command::cargo_bin("fxfeed").unwrap();
    cmd.env("FXFEED_REQUEST_TIMEOUT_MS", "2000")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_help_lists_commands() {
    fxfeed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rates"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn test_unreachable_feed_reports_network_error() {
    fxfeed()
        .args(["--url", "http://127.0.0.1:9/gbp/rss.xml", "rates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Network error while downloading rates.",
        ));
}

#[test]
fn test_convert_requires_amount() {
    fxfeed().args(["convert", "AED"]).assert().failure();
}
