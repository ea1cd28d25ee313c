use chronodupe::cli::RunConfig;
use chronodupe::duplicates::{DuplicateFinder, FinderError, OrderError};
use chronodupe::scanner::checksum_bytes;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

fn report_for(root: &std::path::Path) -> String {
    let mut out = Vec::new();
    chronodupe::run(&RunConfig::new(root.to_path_buf()), std::io::empty(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let finder = DuplicateFinder::new();

    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.duplicate_sets(), 0);
    assert_eq!(report_for(dir.path()), "");
}

#[test]
fn test_scan_unique_files() {
    let dir = tempdir().unwrap();

    for (name, content) in [
        ("2024-01-01_00.00.00_a.txt", "content a"),
        ("2024-01-01_00.00.00_b.txt", "content b"),
        ("2024-01-01_00.00.00_c.txt", "content c"),
    ] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
    }

    let (groups, summary) = DuplicateFinder::new().find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.checksum_groups, 3);
    assert_eq!(summary.removable, 0);
}

#[test]
fn test_report_two_file_example() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("2024-01-01_10.00.00_a.txt");
    let b = dir.path().join("2024-01-02_10.00.00_b.txt");
    // Written newest first so discovery order differs from name order
    fs::write(&b, b"identical").unwrap();
    fs::write(&a, b"identical").unwrap();

    let c = format!("{:08x}", checksum_bytes(b"identical"));
    let expected = format!(
        "{c};1;{}\n{c};2;{}\n",
        a.display(),
        b.display()
    );

    assert_eq!(report_for(dir.path()), expected);
}

#[test]
fn test_ranks_follow_timestamps_across_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    // Discovery order: 2023, 2024, then a/b/2022
    fs::write(dir.path().join("2024-05-05_05.05.05_x.jpg"), b"photo").unwrap();
    fs::write(dir.path().join("2023-05-05_05.05.05_y.jpg"), b"photo").unwrap();
    fs::write(nested.join("2022-05-05_05.05.05_z.jpg"), b"photo").unwrap();

    let report = report_for(dir.path());
    let lines: Vec<_> = report.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(";1;") && lines[0].ends_with("2022-05-05_05.05.05_z.jpg"));
    assert!(lines[1].contains(";2;") && lines[1].ends_with("2023-05-05_05.05.05_y.jpg"));
    assert!(lines[2].contains(";3;") && lines[2].ends_with("2024-05-05_05.05.05_x.jpg"));
}

#[test]
fn test_groups_reported_in_checksum_order() {
    let dir = tempdir().unwrap();
    let contents: [&[u8]; 3] = [b"first", b"second", b"third"];

    for (i, content) in contents.iter().enumerate() {
        for copy in 0..2 {
            let name = format!("2024-01-0{}_00.00.0{}_{}.bin", i + 1, copy, copy);
            fs::write(dir.path().join(name), content).unwrap();
        }
    }

    let report = report_for(dir.path());
    let checksums: Vec<u32> = report
        .lines()
        .map(|l| u32::from_str_radix(&l[..8], 16).unwrap())
        .collect();

    assert_eq!(checksums.len(), 6);
    let mut sorted = checksums.clone();
    sorted.sort_unstable();
    assert_eq!(checksums, sorted);
}

#[test]
fn test_unorderable_group_disappears() {
    let dir = tempdir().unwrap();

    // Orderable duplicate set
    fs::write(dir.path().join("2024-01-01_00.00.00_ok1"), b"good").unwrap();
    fs::write(dir.path().join("2024-01-02_00.00.00_ok2"), b"good").unwrap();

    // One malformed name drops the whole set
    fs::write(dir.path().join("2024-01-01_00.00.00_bad1"), b"bad").unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), b"bad").unwrap();

    let (groups, summary) = DuplicateFinder::new().find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(summary.removable, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].checksum, checksum_bytes(b"bad"));
    assert!(matches!(
        summary.skipped[0].error,
        OrderError::PathTooShort { .. }
    ));

    let bad_hex = format!("{:08x}", checksum_bytes(b"bad"));
    let report = report_for(dir.path());
    assert_eq!(report.lines().count(), 2);
    assert!(!report.contains(&bad_hex));
}

#[test]
fn test_bad_pattern_group_disappears() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2024-01-01_00.00.00_a"), b"x").unwrap();
    fs::write(dir.path().join("2024-13-01_00.00.00_b"), b"x").unwrap();

    let (groups, summary) = DuplicateFinder::new().find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.removable, 0);
    assert!(matches!(
        summary.skipped[0].error,
        OrderError::TimestampParse { .. }
    ));
}

#[test]
fn test_leap_second_group_disappears() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2024-01-01_10.00.60_a"), b"leap").unwrap();
    fs::write(dir.path().join("2024-01-01_10.00.59_b"), b"leap").unwrap();

    let (groups, summary) = DuplicateFinder::new().find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.skipped.len(), 1);
    assert!(matches!(
        summary.skipped[0].error,
        OrderError::SecondOutOfRange { .. }
    ));
    assert_eq!(report_for(dir.path()), "");

    // Nothing is offered for removal either
    let config = RunConfig::new(dir.path().to_path_buf()).with_remove(true);
    let outcome = chronodupe::run(&config, &b"Y\n"[..], std::io::sink()).unwrap();
    assert_eq!(outcome.removable, 0);
    assert!(dir.path().join("2024-01-01_10.00.59_b").exists());
    assert!(dir.path().join("2024-01-01_10.00.60_a").exists());
}

#[test]
fn test_misshapen_prefix_group_disappears() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2024-01-01_00.00.00_a"), b"y").unwrap();
    fs::write(dir.path().join("2024-01-01-00.00.00_b"), b"y").unwrap();

    let (groups, summary) = DuplicateFinder::new().find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert!(matches!(
        summary.skipped[0].error,
        OrderError::InvalidFilename { .. }
    ));
}

#[test]
fn test_badly_named_unique_files_are_fine() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), b"one").unwrap();
    fs::write(dir.path().join("todo.txt"), b"two").unwrap();

    let (groups, summary) = DuplicateFinder::new().find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert!(summary.skipped.is_empty());
}

#[test]
fn test_report_is_idempotent() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();

    for i in 0..5 {
        fs::write(
            dir.path().join(format!("2024-02-0{}_12.00.00_f.dat", i + 1)),
            format!("content {}", i % 2),
        )
        .unwrap();
        fs::write(
            sub.join(format!("2023-02-0{}_12.00.00_g.dat", i + 1)),
            format!("content {}", i % 3),
        )
        .unwrap();
    }

    let first = report_for(dir.path());
    let second = report_for(dir.path());

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_empty_files_group_together() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("2024-01-01_00.00.00_e1")).unwrap();
    File::create(dir.path().join("2024-01-01_00.00.01_e2")).unwrap();

    let report = report_for(dir.path());

    assert_eq!(report.lines().count(), 2);
    assert!(report.starts_with("00000000;1;"));
}

#[test]
fn test_scan_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let result = DuplicateFinder::new().find_duplicates(&dir.path().join("missing"));

    assert!(matches!(result, Err(FinderError::Scan(_))));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("2024-01-01_00.00.00_locked");
    fs::write(&locked, b"secret").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root bypasses permission checks
    let readable = fs::read(&locked).is_ok();
    let result = DuplicateFinder::new().find_duplicates(dir.path());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    if !readable {
        assert!(matches!(result, Err(FinderError::Hash(_))));
    }
}
