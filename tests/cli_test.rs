/*!
Tests for the license-swap binary: stdout contract and exit codes
*/

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn license_swap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_license-swap"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run license-swap")
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn setup() -> (TempDir, String, String, String) {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    fs::create_dir(&src).unwrap();
    let old = root.path().join("old.c");
    let new = root.path().join("new.c");
    fs::write(&old, "// Copyright ACME 2010\n// All rights reserved\n").unwrap();
    fs::write(&new, "// Copyright ACME 2024\n// All rights reserved\n").unwrap();
    let (src, old, new) = (path_str(&src), path_str(&old), path_str(&new));
    (root, src, old, new)
}

#[test]
fn test_run_prints_updates_and_summary() {
    let (root, src, old, new) = setup();
    let file = root.path().join("src").join("main.c");
    fs::write(&file, "// Copyright ACME 2010\n// All rights reserved\n\nint main(){}").unwrap();
    fs::write(root.path().join("src").join("plain.c"), "int x;\n").unwrap();

    let output = license_swap(&[
        "--dir",
        &src,
        "--source-exemplar",
        &old,
        "--target-exemplar",
        &new,
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("Updated: {}", file.display()).as_str(),
            "Done. Scanned=2, Changed=1",
        ]
    );
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "// Copyright ACME 2024\n// All rights reserved\n\nint main(){}"
    );
}

#[test]
fn test_missing_directory_exits_with_two() {
    let (root, _src, old, new) = setup();
    let missing = path_str(&root.path().join("missing"));

    let output = license_swap(&[
        "--dir",
        &missing,
        "--source-exemplar",
        &old,
        "--target-exemplar",
        &new,
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a directory"));
}

#[test]
fn test_exemplar_without_header_exits_with_two() {
    let (root, src, _old, new) = setup();
    let headerless = root.path().join("headerless.c");
    fs::write(&headerless, "int main(void) { return 0; }\n").unwrap();
    let candidate = root.path().join("src").join("a.c");
    fs::write(&candidate, "// Copyright ACME 2010\n").unwrap();

    let output = license_swap(&[
        "--dir",
        &src,
        "--source-exemplar",
        &path_str(&headerless),
        "--target-exemplar",
        &new,
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Source exemplar has no leading comment header"));
    assert_eq!(fs::read_to_string(&candidate).unwrap(), "// Copyright ACME 2010\n");
}

#[test]
fn test_missing_required_flag_is_usage_error() {
    let output = license_swap(&["--dir", "."]);
    assert_eq!(output.status.code(), Some(2));
}
