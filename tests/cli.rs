use assert_cmd::Command;
use std::path::PathBuf;

fn trisum() -> Command {
    let mut cmd = Command::cargo_bin("trisum").unwrap();
    // isolate from user configuration
    cmd.env("HOME", empty_home())
        .env_remove("TRISUM_WIDTH")
        .env_remove("TRISUM_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn empty_home() -> PathBuf {
    let home = std::env::temp_dir().join("trisum-test-home");
    std::fs::create_dir_all(&home).unwrap();
    home
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_piped_transcript() {
    let output = trisum().write_stdin("5\n10\n3\n").output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Enter x: Enter y: Enter z: Processing...\nFinal Output = 189\n"
    );
}

#[test]
fn test_non_positive_inputs() {
    let output = trisum().write_stdin("0\n0\n0\n").output().unwrap();
    assert!(stdout(&output).ends_with("Final Output = 1\n"));

    let output = trisum().write_stdin("-1\n-1\n-1\n").output().unwrap();
    assert!(stdout(&output).ends_with("Final Output = 1\n"));
}

#[test]
fn test_positional_values() {
    let output = trisum().args(["5", "10", "3"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Processing...\nFinal Output = 189\n");

    let output = trisum().args(["-1", "-1", "-1"]).output().unwrap();
    assert_eq!(stdout(&output), "Processing...\nFinal Output = 1\n");
}

#[test]
fn test_wraparound() {
    let output = trisum().args(["13", "47", "3"]).output().unwrap();
    let expected = (6227020800i64 + 2971215073 + 14) as i32;
    assert_eq!(
        stdout(&output),
        format!("Processing...\nFinal Output = {expected}\n")
    );

    let output = trisum()
        .args(["--width", "i64", "13", "47", "3"])
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output),
        "Processing...\nFinal Output = 9198235887\n"
    );

    let output = trisum()
        .env("TRISUM_WIDTH", "i64")
        .args(["13", "0", "0"])
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output),
        "Processing...\nFinal Output = 6227020800\n"
    );
}

#[test]
fn test_breakdown() {
    let output = trisum()
        .args(["--breakdown", "5", "10", "3"])
        .output()
        .unwrap();

    assert_eq!(
        stdout(&output),
        "Processing...\n\
         factorial(5) = 120\n\
         fibonacci(10) = 55\n\
         sum_of_squares(3) = 14\n\
         Final Output = 189\n"
    );
}

#[test]
fn test_invalid_input_reprompt() {
    let output = trisum().write_stdin("abc\n5\n10\n3\n").output().unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("error: `abc` is not a valid i32 integer"));
    assert!(out.ends_with("Final Output = 189\n"));
}

#[test]
fn test_input_end_keeps_zero_values() {
    let output = trisum().write_stdin("5\n").output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Enter x: Enter y: Enter z: Processing...\nFinal Output = 120\n"
    );

    let output = trisum().write_stdin("").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Final Output = 1\n"));
}

#[test]
fn test_several_values_on_one_line() {
    let output = trisum().write_stdin("5 10 3\n").output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Enter x: Enter y: Enter z: Processing...\nFinal Output = 189\n"
    );
}

#[test]
fn test_invalid_positional_value() {
    let output = trisum().args(["5", "ten", "3"]).output().unwrap();
    assert!(!output.status.success());

    let output = trisum().args(["3000000000", "0", "0"]).output().unwrap();
    assert!(!output.status.success());

    let output = trisum().args(["5", "10"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_config_file() {
    let path = empty_home().join("trisum-cli-config.toml");
    std::fs::write(&path, "width = \"i64\"\nbreakdown = true\n").unwrap();

    let output = trisum()
        .arg("--config")
        .arg(&path)
        .args(["13", "0", "0"])
        .output()
        .unwrap();

    assert_eq!(
        stdout(&output),
        "Processing...\n\
         factorial(13) = 6227020800\n\
         fibonacci(0) = 0\n\
         sum_of_squares(0) = 0\n\
         Final Output = 6227020800\n"
    );
}
