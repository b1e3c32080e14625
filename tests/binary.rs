use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_shell(input: &str, cwd: &Path) -> Output {
    let home = tempfile::tempdir().unwrap();
    let rc = home.path().join("test.rc");
    fs::write(&rc, "color = never\nbanner = false\n").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_mishell"))
        .arg("--config")
        .arg(&rc)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_exit_with_arguments_is_success() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell("exit 7\n", dir.path());

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_closed_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell("", dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("EOF"));
}

#[test]
fn test_external_output_is_inherited() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell("echo hi\nexit\n", dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.trim_end().ends_with("hi")));
    assert!(stdout.contains("> "));
}

#[test]
fn test_prompt_is_written_without_terminal() {
    let root = tempfile::tempdir().unwrap();
    let project = root.path().join("project");
    fs::create_dir_all(project.join(".git")).unwrap();
    fs::write(project.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();

    let output = run_shell("echo hi\nexit\n", &project);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("> "));
    assert_eq!(stdout.matches("> project:(main) ").count(), 2);
}

#[test]
fn test_failed_cd_reports_one_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_shell("cd /no/such/path\nexit\n", dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let errors: Vec<_> = stderr.lines().filter(|l| l.contains("/no/such/path")).collect();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_help_and_version_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_mishell"))
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Mishell "));

    let output = Command::new(env!("CARGO_BIN_EXE_mishell"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--config"));
}
