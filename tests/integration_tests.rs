use anyhow::Result;
use comp_dom::{ClassifierEngine, ClassifierPipeline, ClassifyError, CliConfig, LocalStorage};
use std::collections::BTreeSet;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("domains.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_engine(input: &Path, pattern: &str) -> comp_dom::Result<String> {
    let config = CliConfig {
        input_path: input.to_path_buf(),
        pattern: pattern.to_string(),
        verbose: false,
    };
    ClassifierEngine::new(ClassifierPipeline::new(LocalStorage::new(), config)).run()
}

/// Parses a rendered `['a', 'b']` list back into a set.
fn parse_list(field: &str) -> BTreeSet<String> {
    field
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(", ")
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_matches('\'').to_string())
        .collect()
}

#[test]
fn test_end_to_end_deleted_domain() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "id1 domA 10\nid1 domB 20\nid2 domA 12\n");

    let report = run_engine(&input, "id2")?;
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "#ID\tMantain\tDel\tAdd\tStatus");

    let fields: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(fields[0], "id2");
    assert_eq!(parse_list(fields[1]), BTreeSet::from(["domA".to_string()]));
    assert_eq!(parse_list(fields[2]), BTreeSet::from(["domB".to_string()]));
    assert!(parse_list(fields[3]).is_empty());
    assert_eq!(fields[4], "Del (Keep all the domains)");
    Ok(())
}

#[test]
fn test_end_to_end_partial_delete() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "id1 domA 10\nid1 domB 20\nid2 domA 2\n");

    let report = run_engine(&input, "id2")?;
    assert!(report.ends_with("\tDel(Delete part of the domain)\n"));
    Ok(())
}

#[test]
fn test_added_and_deleted_is_change() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "id1 domA 10\nid1 domB 20\nid2 domA 11\nid2 domC 4\n");

    let report = run_engine(&input, "id2")?;
    assert!(report.ends_with("id2\t['domA']\t['domB']\t['domC']\tChange (Keep all the domains)\n"));
    Ok(())
}

#[test]
fn test_empty_file_has_no_overlap() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "");

    let report = run_engine(&input, "id2")?;
    assert!(report.ends_with("id2\t[]\t[]\t[]\tMantain-\n"));
    Ok(())
}

#[test]
fn test_missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = run_engine(&dir.path().join("absent.txt"), "id2").unwrap_err();
    assert!(matches!(err, ClassifyError::InputNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_binary_prints_report_on_stdout() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "id1 domA 10\nid2 domA 12\n");

    let output = Command::new(env!("CARGO_BIN_EXE_comp-dom"))
        .arg(&input)
        .arg("id2")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "#ID\tMantain\tDel\tAdd\tStatus\nid2\t['domA']\t[]\t[]\tMantain (Keep all the domains)\n"
    );
    Ok(())
}

#[test]
fn test_binary_fails_on_malformed_line() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "id1 domA 10\nid2 domA\n");

    let output = Command::new(env!("CARGO_BIN_EXE_comp-dom"))
        .arg(&input)
        .arg("id2")
        .output()?;

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_binary_fails_on_missing_file() -> Result<()> {
    let dir = TempDir::new()?;

    let output = Command::new(env!("CARGO_BIN_EXE_comp-dom"))
        .arg(dir.path().join("absent.txt"))
        .arg("id2")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_tab_inside_domain_keeps_five_columns() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "id1 dom\tX 10\nid2 dom\tX 12\n");

    let report = run_engine(&input, "id2")?;
    let row = report.lines().nth(1).unwrap();
    assert_eq!(row.split('\t').count(), 5);
    assert_eq!(row, "id2\t['dom\\tX']\t[]\t[]\tMantain (Keep all the domains)");
    Ok(())
}

#[test]
fn test_blank_line_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "id1 domA 10\n\nid2 domA 12\n");

    let err = run_engine(&input, "id2").unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedRecord { line: 2, .. }));
}

#[test]
fn test_binary_fails_on_blank_line() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "id1 domA 10\n\nid2 domA 12\n");

    let output = Command::new(env!("CARGO_BIN_EXE_comp-dom"))
        .arg(&input)
        .arg("id2")
        .output()?;

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());
    Ok(())
}
