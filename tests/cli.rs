//! End-to-end tests for the `pomo` binary.
//!
//! The Slack client is replaced by a shell script that logs its arguments.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join(".pomo-timer.json")
    }

    fn slack_log(&self) -> PathBuf {
        self.dir.path().join("slack.log")
    }

    fn read_config(&self) -> Value {
        serde_json::from_str(&std::fs::read_to_string(self.config()).unwrap()).unwrap()
    }

    fn slack_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.slack_log())
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    #[cfg(unix)]
    fn fake_slack(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("fake-slack");
        std::fs::write(
            &path,
            "#!/bin/sh\n\
             echo \"$SLACK_CLI_TOKEN $*\" >> \"$FAKE_SLACK_LOG\"\n\
             if [ -n \"$FAKE_SLACK_FAIL\" ] && [ \"$1\" = \"$FAKE_SLACK_FAIL\" ]; then\n\
             \techo \"fake failure\" >&2\n\
             \texit 1\n\
             fi\n",
        )
        .unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn pomo(&self) -> Command {
        let mut cmd = Command::cargo_bin("pomo").unwrap();
        cmd.env("POMO_CONFIG", self.config())
            .env("POMO_SILENT", "true")
            .env("POMO_TICK_SECS", "0")
            .env("POMO_SLACK_BIN", self.dir.path().join("missing-slack"))
            .env("FAKE_SLACK_LOG", self.slack_log())
            .env_remove("FAKE_SLACK_FAIL")
            .env_remove("RUST_LOG");
        cmd
    }

    #[cfg(unix)]
    fn pomo_with_slack(&self) -> Command {
        let mut cmd = self.pomo();
        cmd.env("POMO_SLACK_BIN", self.fake_slack());
        cmd
    }
}

fn init(sandbox: &Sandbox, token: &str) {
    sandbox.pomo().args(["--init", token]).assert().success();
}

#[test]
fn init_writes_token_and_zero_minutes() {
    let sandbox = Sandbox::new();

    sandbox
        .pomo()
        .args(["--init", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config created at"));

    assert_eq!(
        sandbox.read_config(),
        json!({ "credentialToken": "xyz", "remainingMinutes": 0 })
    );
}

#[test]
fn short_init_flag() {
    let sandbox = Sandbox::new();

    sandbox.pomo().args(["-i", "abc"]).assert().success();

    assert_eq!(sandbox.read_config()["credentialToken"], "abc");
}

#[test]
fn non_numeric_minutes_fail_without_touching_config() {
    let sandbox = Sandbox::new();

    sandbox
        .pomo()
        .arg("abc")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be a number"));

    assert!(!sandbox.config().exists());
}

#[test]
fn non_numeric_minutes_leave_existing_config_alone() {
    let sandbox = Sandbox::new();
    init(&sandbox, "xyz");
    let before = std::fs::read_to_string(sandbox.config()).unwrap();

    sandbox.pomo().arg("abc").assert().failure();

    assert_eq!(std::fs::read_to_string(sandbox.config()).unwrap(), before);
}

#[test]
fn start_without_token_asks_for_init() {
    let sandbox = Sandbox::new();

    sandbox
        .pomo()
        .arg("5")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--init"));

    assert!(!sandbox.config().exists());
    assert!(sandbox.slack_calls().is_empty());
}

#[test]
fn complete_without_token_asks_for_init() {
    let sandbox = Sandbox::new();

    sandbox
        .pomo()
        .arg("--complete")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("tokens have not been set up correctly"));

    assert!(!sandbox.config().exists());
}

#[test]
fn corrupt_config_is_reported() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.config(), "not json").unwrap();

    sandbox
        .pomo()
        .arg("-c")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse failed"));
}

#[test]
fn missing_slack_client_fails_start() {
    let sandbox = Sandbox::new();
    init(&sandbox, "xyz");

    sandbox
        .pomo()
        .arg("3")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("status edit"));
}

#[cfg(unix)]
#[test]
fn complete_resets_presence() {
    let sandbox = Sandbox::new();
    init(&sandbox, "xyz");

    sandbox
        .pomo_with_slack()
        .arg("--complete")
        .assert()
        .success()
        .stdout(predicate::str::contains("stopping"));

    assert_eq!(
        sandbox.slack_calls(),
        vec![
            "xyz status edit --text free --emoji :pickle_rick:",
            "xyz presence active",
            "xyz snooze end",
        ]
    );
    assert_eq!(sandbox.read_config()["remainingMinutes"], 0);
}

#[cfg(unix)]
#[test]
fn complete_tolerates_failed_snooze_end() {
    let sandbox = Sandbox::new();
    init(&sandbox, "xyz");

    sandbox
        .pomo_with_slack()
        .arg("-c")
        .env("FAKE_SLACK_FAIL", "snooze")
        .assert()
        .success();

    assert_eq!(sandbox.read_config()["remainingMinutes"], 0);
}

#[cfg(unix)]
#[test]
fn complete_fails_when_status_fails() {
    let sandbox = Sandbox::new();
    init(&sandbox, "xyz");

    sandbox
        .pomo_with_slack()
        .arg("-c")
        .env("FAKE_SLACK_FAIL", "status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fake failure"));
}

#[cfg(unix)]
#[test]
fn two_minute_countdown_runs_to_the_end() {
    let sandbox = Sandbox::new();
    init(&sandbox, "xyz");

    sandbox
        .pomo_with_slack()
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("starting new pomo timer"))
        .stdout(predicate::str::contains("timer: 1"))
        .stdout(predicate::str::contains("timer: 0"));

    assert_eq!(
        sandbox.slack_calls(),
        vec![
            "xyz status edit --text free in 2 mins --emoji :tomato:",
            "xyz presence away",
            "xyz snooze start --minutes 2",
            "xyz status edit --text free in 1 mins --emoji :tomato:",
            "xyz status edit --text free --emoji :pickle_rick:",
            "xyz presence active",
            "xyz snooze end",
        ]
    );
    assert_eq!(
        sandbox.read_config(),
        json!({ "credentialToken": "xyz", "remainingMinutes": 0 })
    );
}
