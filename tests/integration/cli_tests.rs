use chronodupe::cli::Cli;
use chronodupe::error::ExitCode;
use clap::Parser;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_exit_code_success_without_duplicates() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("unique.txt"), b"unique").unwrap();

    let cli = Cli::try_parse_from(["chronodupe", dir.path().to_str().unwrap()]).unwrap();

    assert_eq!(chronodupe::run_app(cli).unwrap(), ExitCode::Success);
}

#[test]
fn test_exit_code_success_with_skipped_sets() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"dup").unwrap();
    fs::write(dir.path().join("b.txt"), b"dup").unwrap();

    let cli = Cli::try_parse_from(["chronodupe", dir.path().to_str().unwrap()]).unwrap();

    // Skipped sets are not a distinct outcome
    assert_eq!(chronodupe::run_app(cli).unwrap(), ExitCode::Success);
}

#[test]
fn test_unknown_action_runs_report_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2024-01-01_00.00.00_a"), b"dup").unwrap();
    fs::write(dir.path().join("2024-01-02_00.00.00_b"), b"dup").unwrap();

    let cli =
        Cli::try_parse_from(["chronodupe", dir.path().to_str().unwrap(), "delete"]).unwrap();
    let config = cli.to_config();
    assert!(!config.remove);

    // Never reaches stdin in report-only mode
    assert_eq!(chronodupe::run_app(cli).unwrap(), ExitCode::Success);
    assert!(dir.path().join("2024-01-02_00.00.00_b").exists());
    assert!(!dir.path().join("REMOVED").exists());
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let cli = Cli::try_parse_from(["chronodupe", missing.to_str().unwrap()]).unwrap();
    let err = chronodupe::run_app(cli).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("Failed to scan"));
    assert!(message.contains("Path not found"));
}

#[test]
fn test_root_is_a_file_is_an_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"x").unwrap();

    let cli = Cli::try_parse_from(["chronodupe", file.to_str().unwrap()]).unwrap();
    let err = chronodupe::run_app(cli).unwrap_err();

    assert!(format!("{err:#}").contains("Not a directory"));
}

#[test]
fn test_usage_error_without_root() {
    let err = Cli::try_parse_from(["chronodupe"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}
