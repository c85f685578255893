#![allow(dead_code)]

pub mod images;

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const READY_LISTING: &str = "List of devices attached\nemulator-5554\tdevice\n";
const OFFLINE_LISTING: &str = "List of devices attached\nemulator-5554\toffline\n";

/// A temp working directory plus a shell script standing in for `adb`.
///
/// The script appends every invocation to `bin/adb.log`, answers `devices`
/// with a canned listing and serves `bin/screen.png` for `exec-out screencap`.
pub struct FakePhone {
    pub dir: TempDir,
    pub adb: PathBuf,
}

impl FakePhone {
    pub fn new(listing: &str, screen: &[u8]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let bin = dir.path().join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create bin dir");

        std::fs::write(bin.join("screen.png"), screen).expect("Failed to write screen");
        std::fs::write(bin.join("devices.txt"), listing).expect("Failed to write listing");

        let adb = bin.join("adb");
        std::fs::write(
            &adb,
            r#"#!/bin/sh
DIR="$(dirname "$0")"
if [ "$1" = "-s" ]; then shift 2; fi
echo "$@" >> "$DIR/adb.log"
case "$1" in
  devices) cat "$DIR/devices.txt" ;;
  exec-out) cat "$DIR/screen.png" ;;
esac
"#,
        )
        .expect("Failed to write fake adb");
        std::fs::set_permissions(&adb, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake adb executable");

        FakePhone { dir, adb }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn log(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("bin").join("adb.log")).unwrap_or_default()
    }

    pub fn swipes(&self) -> Vec<String> {
        self.log()
            .lines()
            .filter(|line| line.starts_with("shell input swipe"))
            .map(str::to_string)
            .collect()
    }

    /// Write a config that removes all drawing delays.
    pub fn fast_config(&self) -> PathBuf {
        let config = self.dir.child("revodraw.yaml");
        config
            .write_str("drawing:\n  stroke_delay_ms: 0\n  shape_delay_ms: 0\n")
            .expect("Failed to write config");
        config.path().to_path_buf()
    }

    pub fn command(&self, args: &[&str]) -> Command {
        run_revodraw_command(self.path(), &self.adb, args)
    }

    /// Same as [`command`](Self::command) with the zero-delay config.
    pub fn fast_command(&self, args: &[&str]) -> Command {
        let config = self.fast_config();
        let mut cmd = self.command(&["--config", &config.display().to_string()]);
        cmd.args(args);
        cmd
    }
}

#[fixture]
pub fn phone() -> FakePhone {
    FakePhone::new(READY_LISTING, &images::card_screen_png())
}

#[fixture]
pub fn offline_phone() -> FakePhone {
    FakePhone::new(OFFLINE_LISTING, &images::card_screen_png())
}

#[fixture]
pub fn blank_phone() -> FakePhone {
    FakePhone::new(READY_LISTING, &images::blank_screen_png())
}

pub fn run_revodraw_command(dir: &Path, adb: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("revodraw").expect("Failed to find revodraw binary");
    cmd.current_dir(dir)
        .env("REVODRAW_ADB", adb)
        .env_remove("REVODRAW_SERIAL")
        .env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
