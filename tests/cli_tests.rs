use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    table_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let table_path = dir.path().join("opportunities.csv");

        let mut file = File::create(&table_path).unwrap();
        writeln!(file, "Opportunity,Speed,Cost,Score").unwrap();
        writeln!(file, "Alpha,4,,9").unwrap();
        writeln!(file, "Beta,6,2,8").unwrap();
        writeln!(file, "Gamma,high,5,7").unwrap();

        Self {
            _dir: dir,
            table_path,
        }
    }
}

fn build_binary() {
    let _ = Command::new("cargo")
        .arg("build")
        .arg("--release")
        .status()
        .unwrap();
}

fn run_oppgauge(args: &[&str]) -> std::process::Output {
    Command::new("./target/release/oppgauge")
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_cli_rank_execution() {
    build_binary();
    let ctx = TestContext::new();

    let output = run_oppgauge(&["rank", "--file", ctx.table_path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // All three opportunities appear in the ranking table.
    for name in ["Alpha", "Beta", "Gamma"] {
        assert!(stdout.contains(name), "missing '{}' in:\n{}", name, stdout);
    }
    // Gamma: high->3 fallback + 5 = 8 beats Alpha 4+3=7 and Beta 5+2=7.
    let gamma_pos = stdout.find("Gamma").unwrap();
    let alpha_pos = stdout.find("Alpha").unwrap();
    assert!(gamma_pos < alpha_pos, "Gamma should rank first:\n{}", stdout);
}

#[test]
fn test_cli_rank_with_override() {
    build_binary();
    let ctx = TestContext::new();

    let output = run_oppgauge(&[
        "rank",
        "--file",
        ctx.table_path.to_str().unwrap(),
        "--set",
        "Alpha:Cost=5",
        "--set",
        "Alpha:Speed=5",
    ]);
    assert!(output.status.success());

    // Alpha now totals 10 and overtakes Gamma's 8.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let alpha_pos = stdout.find("Alpha").unwrap();
    let gamma_pos = stdout.find("Gamma").unwrap();
    assert!(alpha_pos < gamma_pos, "Alpha should rank first:\n{}", stdout);
}

#[test]
fn test_cli_rejects_out_of_range_override() {
    build_binary();
    let ctx = TestContext::new();

    let output = run_oppgauge(&[
        "rank",
        "--file",
        ctx.table_path.to_str().unwrap(),
        "--set",
        "Alpha:Cost=9",
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_inspect_reports_exclusions() {
    build_binary();
    let ctx = TestContext::new();

    let output = run_oppgauge(&["inspect", "--file", ctx.table_path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Score"), "exclusions missing:\n{}", stdout);
    assert!(stdout.contains("Speed"));
}

#[test]
fn test_cli_missing_file_fails() {
    build_binary();
    let output = run_oppgauge(&["rank", "--file", "does_not_exist.csv"]);
    assert!(!output.status.success());
}
