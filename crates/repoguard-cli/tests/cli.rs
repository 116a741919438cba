use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get a Command for the repoguard binary.
#[allow(deprecated)]
fn repoguard_cmd() -> Command {
    Command::cargo_bin("repoguard").unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Mirror tree with an opt-out org config and a `widget` repository.
fn mirror(org_doc: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "acme/.repoguard/security.yaml", org_doc);
    write(tmp.path(), "acme/widget/README.md", "# widget\n");
    tmp
}

fn check_cmd(tmp: &TempDir) -> Command {
    let mut cmd = repoguard_cmd();
    cmd.args(["check", "--owner", "acme", "--repo", "widget", "--mirror"])
        .arg(tmp.path());
    cmd
}

#[test]
fn help_works() {
    repoguard_cmd().arg("--help").assert().success();
}

#[test]
fn policies_lists_security_policy() {
    repoguard_cmd()
        .arg("policies")
        .assert()
        .success()
        .stdout("SECURITY.md\n");
}

#[test]
fn schema_org_describes_opt_config() {
    repoguard_cmd()
        .args(["schema", "org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disableRepoOverride"))
        .stdout(predicate::str::contains("optConfig"));
}

#[test]
fn schema_unknown_kind_fails() {
    repoguard_cmd()
        .args(["schema", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown schema"));
}

#[test]
fn missing_policy_with_issue_action_exits_2() {
    let tmp = mirror("optConfig:\n  optOutStrategy: true\naction: issue\n");

    check_cmd(&tmp)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("| `SECURITY.md` | fail | issue |"))
        .stdout(predicate::str::contains("Security policy not enabled."));
}

#[test]
fn published_policy_passes() {
    let tmp = mirror("optConfig:\n  optOutStrategy: true\n");
    write(tmp.path(), "acme/widget/SECURITY.md", "Report to security@acme.test\n");

    check_cmd(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("| `SECURITY.md` | pass | - |"));
}

#[test]
fn repo_opt_out_disables_policy() {
    let tmp = mirror("optConfig:\n  optOutStrategy: true\n");
    write(
        tmp.path(),
        "acme/widget/.repoguard/security.yaml",
        "optConfig:\n  optOut: true\n",
    );

    check_cmd(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("| `SECURITY.md` | disabled | - |"));
}

#[test]
fn json_report_carries_details() {
    let tmp = mirror("optConfig:\n  optOutStrategy: true\n");

    let assert = check_cmd(&tmp).args(["--format", "json"]).assert().code(2);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["schema"], "repoguard.enforce.v1");
    assert_eq!(report["outcomes"][0]["status"], "fail");
    assert_eq!(report["outcomes"][0]["action"], "log");
    assert_eq!(report["outcomes"][0]["result"]["details"]["enabled"], false);
    assert_eq!(report["outcomes"][0]["result"]["details"]["url"], "");
}

#[test]
fn report_written_to_output_file() {
    let tmp = mirror("optConfig:\n  optOutStrategy: true\n");
    let out = tmp.path().join("out/report.md");

    check_cmd(&tmp).arg("--output").arg(&out).assert().code(2);

    let text = fs::read_to_string(out).unwrap();
    assert!(text.starts_with("## repoguard: acme/widget"));
}

#[test]
fn missing_repository_exits_1() {
    let tmp = mirror("");

    let mut cmd = repoguard_cmd();
    cmd.args(["check", "--owner", "acme", "--repo", "gone", "--mirror"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("| `SECURITY.md` | error | - |"));
}

#[test]
fn unknown_report_format_is_runtime_error() {
    let tmp = mirror("");

    check_cmd(&tmp)
        .args(["--format", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown report format"));
}
