use std::fs;
use std::process::Command;

#[test]
fn test_forwards_long_all_listing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    fs::write(dir.path().join(".hidden"), "h").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_wla"))
        .arg(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().filter_map(|l| l.split_whitespace().last()).collect();
    assert_eq!(names, vec![".", "..", ".hidden", "notes.txt"]);
}

#[test]
fn test_forwards_child_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_wla"))
        .arg(dir.path().join("missing"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}
