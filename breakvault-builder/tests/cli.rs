use std::process::Command;

#[test]
fn cli_fails_fast_on_missing_workbook() {
    let exe = env!("CARGO_BIN_EXE_breakvault-builder");
    let output = Command::new(exe)
        .args(["--input", "does-not-exist.xlsx"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("workbook not found"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn cli_reports_version() {
    let exe = env!("CARGO_BIN_EXE_breakvault-builder");
    let output = Command::new(exe)
        .arg("--version")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("breakvault-builder"));
}
