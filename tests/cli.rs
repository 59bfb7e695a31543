use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use walkdir::WalkDir;

/// Get the path to the tex2text binary built for this test run
fn tex2text_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tex2text"))
}

/// Run tex2text with the given arguments
fn run_tex2text<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(tex2text_bin())
        .args(args)
        .output()
        .expect("Failed to run tex2text")
}

/// Get all .tex files in a directory (recursively)
fn get_tex_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("tex"))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

#[test]
fn test_fixture_files() {
    let fixture_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let test_files = get_tex_files(&fixture_dir);

    assert!(!test_files.is_empty(), "No test files found in tests/fixtures");

    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    for test_file in test_files {
        let test_name = test_file.file_name().unwrap().to_string_lossy();
        eprintln!("\nTesting: {}", test_name);

        let expected = fs::read_to_string(test_file.with_extension("txt"))
            .expect("Missing expected .txt next to fixture");
        let output_path = out_dir.path().join(format!("{}.txt", test_name));

        let result = run_tex2text(&[&test_file, &output_path]);
        assert!(
            result.status.success(),
            "tex2text failed on {}: {}",
            test_name,
            String::from_utf8_lossy(&result.stderr)
        );

        let actual = fs::read_to_string(&output_path).expect("Output file was not written");
        assert_eq!(
            expected, actual,
            "Output mismatch for {}\n\nExpected:\n{}\n\nActual:\n{}",
            test_name, expected, actual
        );

        eprintln!("  ✓ Passed");
    }
}

#[test]
fn test_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tex");
    let output = dir.path().join("out.txt");
    fs::write(&input, "Hello\n").unwrap();
    fs::write(&output, "previous run left a much longer file here").unwrap();

    let result = run_tex2text(&[&input, &output]);
    assert!(result.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "Hello ");
}

#[test]
fn test_missing_arguments_print_usage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tex");

    let result = run_tex2text(&[&input]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Usage"), "unexpected stderr: {}", stderr);

    let result = run_tex2text::<&Path>(&[]);
    assert!(!result.status.success());
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.tex");
    let output = dir.path().join("out.txt");

    let result = run_tex2text(&[&input, &output]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("can't read"), "unexpected stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tex");
    fs::write(&input, "text\n").unwrap();
    let output = dir.path().join("missing-dir").join("out.txt");

    let result = run_tex2text(&[&input, &output]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("can't write"), "unexpected stderr: {}", stderr);
}
