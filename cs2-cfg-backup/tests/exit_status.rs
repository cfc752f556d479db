use camino_tempfile::tempdir;
use std::fs;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_cs2-cfg-backup");

#[test]
fn test_blocked_backup_folder_still_exits_zero() {
    let tmp = tempdir().unwrap();
    let home = tmp.path().join("home");
    let steam = tmp.path().join("steam");

    fs::create_dir_all(home.join("Documents")).unwrap();
    fs::write(home.join("Documents/CS2_Backups"), "not a directory").unwrap();

    let output = Command::new(BIN)
        .args(["--steam-root", steam.as_str(), "--home", home.as_str()])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("failed to create backup folder"));
    assert_eq!(1, stderr.matches("(os error").count());
}

#[test]
fn test_missing_sources_exit_zero() {
    let tmp = tempdir().unwrap();
    let home = tmp.path().join("home");
    let steam = tmp.path().join("steam");

    let output = Command::new(BIN)
        .args(["--steam-root", steam.as_str(), "--home", home.as_str()])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("main cfg not found, 0 user(s) backed up, 0 skipped"));
    assert!(home.join("Documents/CS2_Backups").is_dir());
}
