//! End-to-End CLI Tests for shootsync
//!
//! Developed by The ShootSync Team (c)2024

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the shootsync binary
fn shootsync() -> Command {
    let mut cmd = cargo_bin_cmd!("shootsync");
    cmd.env_remove("RUST_LOG");
    cmd
}

const VALID_DRAFT: &str = r#"{
    "first_name": "  Ada ",
    "last_name": "Lovelace",
    "email": "ada@example.com",
    "phone": "+1 (555) 123-4567",
    "service": "ugc_content",
    "budget": "$10,000 - $25,000",
    "message": "We need a launch campaign for our new app."
}"#;

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        shootsync()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("shootsync"))
            .stdout(predicate::str::contains("catalog"))
            .stdout(predicate::str::contains("inquiry"));
    }

    #[test]
    fn shows_version() {
        shootsync()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lists_pages() {
        shootsync()
            .arg("pages")
            .assert()
            .success()
            .stdout(predicate::str::contains("shootsync."))
            .stdout(predicate::str::contains("/portfolio"))
            .stdout(predicate::str::contains("Work"))
            .stdout(predicate::str::contains("/studio"));
    }

    #[test]
    fn pages_use_configured_brand() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("site.toml");
        std::fs::write(&config, "brand = \"shootsync studio.\"\n").expect("write config");

        shootsync()
            .arg("--config")
            .arg(&config)
            .arg("pages")
            .assert()
            .success()
            .stdout(predicate::str::contains("shootsync studio."));
    }
}

// ============================================
// Catalog Tests
// ============================================

mod catalog {
    use super::*;

    #[test]
    fn lists_all_items_by_default() {
        shootsync()
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("ALL (9)"))
            .stdout(predicate::str::contains("Nike Air Max Campaign"))
            .stdout(predicate::str::contains("Sustainable Brand Identity"));
    }

    #[test]
    fn filters_by_category() {
        shootsync()
            .args(["catalog", "--category", "commercial"])
            .assert()
            .success()
            .stdout(predicate::str::contains("COMMERCIAL (2)"))
            .stdout(predicate::str::contains("Fitness App Commercial"))
            .stdout(predicate::str::contains("Beauty Brand UGC").not());
    }

    #[test]
    fn json_output_keeps_metric_order() {
        let output = shootsync()
            .args(["catalog", "--category", "PERFORMANCE", "--json"])
            .output()
            .expect("run shootsync");
        assert!(output.status.success());

        let items: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("catalog JSON");
        let items = items.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "E-commerce Performance");

        let raw = String::from_utf8_lossy(&output.stdout);
        let roas = raw.find("\"roas\"").expect("roas");
        let ctr = raw.find("\"ctr\"").expect("ctr");
        assert!(roas < ctr);
    }

    #[test]
    fn rejects_unknown_category() {
        shootsync()
            .args(["catalog", "--category", "VIRAL"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("VIRAL"));
    }
}

// ============================================
// Check Tests
// ============================================

mod check {
    use super::*;

    #[test]
    fn built_in_content_passes() {
        shootsync()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("filter options cover every category"));
    }

    #[test]
    fn missing_media_only_warns() {
        let temp = TempDir::new().expect("temp dir");

        shootsync()
            .args(["check", "--assets"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Ecommerce.JPG not found"))
            .stdout(predicate::str::contains("/placeholder.svg"));
    }
}

// ============================================
// Inquiry Tests
// ============================================

mod inquiry {
    use super::*;

    #[test]
    fn accepts_valid_draft_from_file() {
        let temp = TempDir::new().expect("temp dir");
        let draft = temp.path().join("draft.json");
        std::fs::write(&draft, VALID_DRAFT).expect("write draft");

        shootsync()
            .arg("inquiry")
            .arg(&draft)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"first_name\": \"Ada\""))
            .stdout(predicate::str::contains("\"service\": \"ugc_content\""));
    }

    #[test]
    fn reads_draft_from_stdin() {
        shootsync()
            .args(["inquiry", "-"])
            .write_stdin(VALID_DRAFT)
            .assert()
            .success()
            .stdout(predicate::str::contains("ada@example.com"));
    }

    #[test]
    fn reports_every_bad_field() {
        shootsync()
            .args(["inquiry", "-"])
            .write_stdin(r#"{"email": "not-an-email", "message": "hi"}"#)
            .assert()
            .failure()
            .stderr(predicate::str::contains("first_name"))
            .stderr(predicate::str::contains("email"))
            .stderr(predicate::str::contains("service"))
            .stderr(predicate::str::contains("message"));
    }

    #[test]
    fn rejects_non_json_input() {
        shootsync()
            .args(["inquiry", "-"])
            .write_stdin("first_name=Ada")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Draft is not a JSON object"));
    }
}
