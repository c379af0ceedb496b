//! CLI end-to-end tests.
//!
//! These tests spawn the actual tool binaries and validate stdout, file
//! effects, and exit codes.
//!
//! Exit code expectations:
//! - 0: Success
//! - 2: Invalid arguments (no files, bad directory, bad regex)
//! - 3: Access error (unreadable directory or file)
//! - 4: Syntax error (malformed JSON)

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a tool in `dir` and return (stdout, stderr, exit_code).
fn run_tool(exe: &str, dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(exe)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute tool");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn write(dir: &Path, name: &str, contents: &[u8]) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// ============================================================================
// Argument Handling
// ============================================================================

#[test]
fn file_tools_without_specs_exit_2() {
    let dir = TempDir::new().unwrap();
    for exe in [
        env!("CARGO_BIN_EXE_indentclassifier"),
        env!("CARGO_BIN_EXE_isplainascii"),
        env!("CARGO_BIN_EXE_xeol"),
        env!("CARGO_BIN_EXE_stripws"),
        env!("CARGO_BIN_EXE_jsonpp"),
    ] {
        let (stdout, stderr, exit_code) = run_tool(exe, dir.path(), &[]);
        assert_eq!(exit_code, 2, "{exe}: {stderr}");
        assert!(stdout.is_empty());
        assert!(stderr.contains("No files specified"), "{exe}: {stderr}");
    }
}

#[test]
fn spec_with_trailing_separator_exits_2() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_stripws"), dir.path(), &["sub/"]);
    assert_eq!(exit_code, 2, "{stderr}");
}

#[test]
fn missing_directory_exits_3() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_stripws"), dir.path(), &["missing/*.txt"]);
    assert_eq!(exit_code, 3, "{stderr}");
}

// ============================================================================
// Per-tool Behavior
// ============================================================================

#[test]
fn indentclassifier_reports_each_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "spaces.txt", b"a\n  b\n");
    write(dir.path(), "tabs.txt", b"a\n\tb\n");

    let (stdout, _stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_indentclassifier"), dir.path(), &["*.txt"]);
    assert_eq!(exit_code, 0);

    let mut lines: Vec<&str> = stdout.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["S spaces.txt", "T tabs.txt"]);
}

#[test]
fn isplainascii_reports_non_ascii_runs() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", "plain\nna\u{ef}ve\n".as_bytes());

    let (stdout, _stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_isplainascii"), dir.path(), &["a.txt"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("a.txt, line 2, approx. column 3:"), "{stdout}");
}

#[test]
fn xeol_queries_and_converts() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "dos.txt", b"a\r\nb\r\n");

    let exe = env!("CARGO_BIN_EXE_xeol");
    let (stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["dos.txt"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "D dos.txt\n");

    let (_stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["-u", "dos.txt"]);
    assert_eq!(exit_code, 0);
    assert_eq!(fs::read(dir.path().join("dos.txt")).unwrap(), b"a\nb\n");
}

#[test]
fn xeol_force_without_target_exits_2() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", b"a\n");
    let (_stdout, _stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_xeol"), dir.path(), &["-f", "a.txt"]);
    assert_eq!(exit_code, 2);
}

#[test]
fn xeol_rejects_two_targets() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", b"a\n");
    let (_stdout, _stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_xeol"), dir.path(), &["-d", "-u", "a.txt"]);
    assert_eq!(exit_code, 2);
}

#[test]
fn stripws_query_then_strip() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", b"x  \ny\t\n");
    write(dir.path(), "clean.txt", b"x\n");

    let exe = env!("CARGO_BIN_EXE_stripws");
    let (stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["*.txt"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "   a.txt -- 2 lines end in 2 spaces and 1 tabs\n");

    let (stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["-s", "*.txt"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "   a.txt -- 2 spaces and 1 tabs stripped from 2 lines\n");
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"x\ny\n");
}

#[test]
fn stripws_recursive_reaches_subdirectories() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sub/deep/a.txt", b"x \n");

    let exe = env!("CARGO_BIN_EXE_stripws");
    let (stdout, _stderr, _) = run_tool(exe, dir.path(), &["*.txt"]);
    assert!(stdout.is_empty());

    let (stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["-r", "*.txt"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("a.txt -- 1 lines end in 1 spaces"), "{stdout}");
}

#[test]
fn jsonpp_writes_pretty_sibling() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "data.json", br#"{"b":[1,2],"a":null}"#);

    let (_stdout, _stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_jsonpp"), dir.path(), &["data.json"]);
    assert_eq!(exit_code, 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("data-pretty.json")).unwrap(),
        "{\n\t\"b\" : [\n\t\t1,\n\t\t2\n\t],\n\t\"a\" : null\n}\n"
    );
}

#[test]
fn jsonpp_syntax_error_exits_4() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.json", b"{\n  \"a\": \n}");

    let (_stdout, stderr, exit_code) =
        run_tool(env!("CARGO_BIN_EXE_jsonpp"), dir.path(), &["-m", "bad.json"]);
    assert_eq!(exit_code, 4, "{stderr}");
    assert!(stderr.contains("Parse error near line 3"), "{stderr}");
}

#[test]
fn regexmove_renames_with_groups() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "root/img1.jpeg", b"");
    write(dir.path(), "root/img2.jpeg", b"");

    let (stdout, _stderr, exit_code) = run_tool(
        env!("CARGO_BIN_EXE_regexmove"),
        dir.path(),
        &["-v", "root", r"img(\d)\.jpeg", "photo-${1}.jpg"],
    );
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 2);
    assert!(dir.path().join("root/photo-1.jpg").is_file());
    assert!(dir.path().join("root/photo-2.jpg").is_file());
}

#[test]
fn regexmove_bad_arguments_exit_2() {
    let dir = TempDir::new().unwrap();
    let exe = env!("CARGO_BIN_EXE_regexmove");

    let (_stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["nope", "a", "b"]);
    assert_eq!(exit_code, 2);

    let (_stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &[".", "(", "b"]);
    assert_eq!(exit_code, 2);
}

#[test]
fn findfileext_lists_extensions() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/a.rs", b"");
    write(dir.path(), "src/b.rs", b"");
    write(dir.path(), "src/c.toml", b"");

    let exe = env!("CARGO_BIN_EXE_findfileext");
    let (stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["-c", "-w", "src"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\n*.rs -- 2\n*.toml -- 1\n\n");

    let (_stdout, stderr, exit_code) = run_tool(exe, dir.path(), &[]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("No directories specified"), "{stderr}");
}

#[test]
fn random_prints_requested_count() {
    let dir = TempDir::new().unwrap();
    let exe = env!("CARGO_BIN_EXE_random");

    let (stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["-5", "5", "20"]);
    assert_eq!(exit_code, 0);
    let values: Vec<i64> = stdout.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values.len(), 20);
    assert!(values.iter().all(|v| (-5..=5).contains(v)));

    let (_stdout, _stderr, exit_code) = run_tool(exe, dir.path(), &["9", "1"]);
    assert_eq!(exit_code, 2);
}

#[test]
fn xformcvsstatus_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_xformcvsstatus"))
        .arg("-u")
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to execute xformcvsstatus");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(
            b"cvs status: Examining lib\n\
              File: a.c   \tStatus: Up-to-date\n\
              File: b.c   \tStatus: Locally Modified\n",
        )
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "M  lib/b.c\n");
}
