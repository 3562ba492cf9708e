use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const CMAKE_SRC: &str = "if(CONFIG_BOARD_TYPE_ESP_BOX_3)
    set(BOARD_TYPE \"esp-box-3\")
elseif(CONFIG_BOARD_TYPE_HU_087)
    set(BOARD_TYPE \"hu-087\")
endif()
";

const KCONFIG_SRC: &str = "choice BOARD_TYPE
    config BOARD_TYPE_HU_087
        bool \"HU-087\"
    config BOARD_TYPE_ESP_BOX_3
        bool \"ESP BOX 3\"
endchoice
";

fn board_setup(dir: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_board-setup"))
        .arg(dir)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_first_run_updates_second_run_skips() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("CMakeLists.txt"), CMAKE_SRC).unwrap();
    fs::write(dir.path().join("Kconfig.projbuild"), KCONFIG_SRC).unwrap();

    let output = board_setup(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("CMakeLists.txt updated"));
    assert!(stdout.contains("Kconfig.projbuild updated"));
    assert!(stdout.contains("Updated:            2"));

    let output = board_setup(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("CMakeLists.txt already contains ESP32C3_SUPERMINI, skipping"));
    assert!(stdout.contains("Kconfig.projbuild already contains ESP32C3_SUPERMINI, skipping"));
    assert!(!stdout.contains("CMakeLists.txt updated"));
    assert!(stdout.contains("Already patched:    2"));
}

#[test]
fn test_cli_missing_anchor_exits_zero_without_update_line() {
    let dir = tempdir().unwrap();
    let cmake = "if(CONFIG_BOARD_TYPE_ESP_BOX_3)\nendif()\n";
    let kconfig = "choice BOARD_TYPE\n    config BOARD_TYPE_ESP_BOX_3\nendchoice\n";
    fs::write(dir.path().join("CMakeLists.txt"), cmake).unwrap();
    fs::write(dir.path().join("Kconfig.projbuild"), kconfig).unwrap();

    let output = board_setup(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(!stdout.contains("CMakeLists.txt updated"));
    assert!(!stdout.contains("Kconfig.projbuild updated"));
    assert_eq!(stdout.matches("WARN (Anchor").count(), 2);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("nothing inserted"));
    assert!(stdout.contains("Left untouched:     2"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap(),
        cmake
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Kconfig.projbuild")).unwrap(),
        kconfig
    );
}

#[test]
fn test_cli_missing_kconfig_patches_cmake_then_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("CMakeLists.txt"), CMAKE_SRC).unwrap();

    let output = board_setup(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("CMakeLists.txt updated"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Kconfig.projbuild"));

    let cmake = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    assert!(cmake.contains("elseif(CONFIG_BOARD_TYPE_ESP32C3_SUPERMINI)\n"));
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("CMakeLists.txt"), CMAKE_SRC).unwrap();
    fs::write(dir.path().join("Kconfig.projbuild"), KCONFIG_SRC).unwrap();

    let output = board_setup(dir.path(), &["--dry-run"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("[DRY RUN] CMakeLists.txt would be updated"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap(),
        CMAKE_SRC
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Kconfig.projbuild")).unwrap(),
        KCONFIG_SRC
    );
}
