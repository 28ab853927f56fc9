use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn readit_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_readit").expect("readit test binary not built")
}

#[test]
fn readit_help_mentions_name() {
    let output = Command::new(readit_bin())
        .arg("--help")
        .output()
        .expect("run readit --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("readit"));
    assert!(combined.contains("piper"));
}

#[test]
fn readit_rejects_bad_speed() {
    let output = Command::new(readit_bin())
        .args(["--speed", "9.0", "hello"])
        .output()
        .expect("run readit with bad speed");
    assert!(!output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("--speed"));
}

#[test]
fn readit_rejects_missing_file() {
    let output = Command::new(readit_bin())
        .args(["--file", "/no/such/file.txt"])
        .output()
        .expect("run readit with missing file");
    assert!(!output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("--file"));
}

#[test]
fn readit_rejects_conflicting_sources() {
    let output = Command::new(readit_bin())
        .args(["--clipboard", "hello"])
        .output()
        .expect("run readit with two sources");
    assert!(!output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("text source"));
}
