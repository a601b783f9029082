use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use std::process::Output;

/// Get a Command for gradebook
pub fn gradebook() -> Command {
    cargo_bin_cmd!("gradebook")
}

/// Extract the assigned id from add command output (first line)
pub fn extract_id(output: &Output) -> u64 {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .and_then(|s| s.trim().parse().ok())
        .expect("Failed to extract id from output")
}

/// Initialize a store in the given directory
pub fn init_store(dir: &Path) {
    gradebook()
        .current_dir(dir)
        .arg("init")
        .assert()
        .success();
}

/// Add an assessment and return its id
pub fn add(dir: &Path, title: &str, weight: &str, due: &str, score: Option<&str>) -> u64 {
    let mut cmd = gradebook();
    cmd.current_dir(dir)
        .args(["add", title, "--weight", weight, "--due", due]);
    if let Some(score) = score {
        cmd.args(["--score", score]);
    }
    let output = cmd.output().expect("Failed to run add");
    assert!(output.status.success(), "add failed: {output:?}");
    extract_id(&output)
}

/// Run a subcommand with --format json and parse stdout
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut cmd = gradebook();
    cmd.current_dir(dir).arg("--format").arg("json").args(args);
    let output = cmd.output().expect("Failed to run command");
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
