//! The phone, reached through `adb`.
//!
//! Everything the rest of the crate needs from the device goes through the
//! [`InputDevice`] trait: a swipe, a screenshot and a connectivity check.

use std::process::{Output, Stdio};

use anyhow::Result;
use bytes::Bytes;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::artifacts::geometry::Point;
use crate::config::DeviceConfig;
use crate::errors::DeviceError;

/// A line of `adb devices` output for a device that is ready.
const READY_DEVICE_REGEX: &str = r"(?m)^(\S+)\s+device\s*$";

#[async_trait::async_trait]
pub trait InputDevice: Send + Sync {
    /// One straight touch stroke from `from` to `to`.
    async fn swipe(&self, from: Point, to: Point, duration_ms: u64) -> Result<()>;

    /// PNG-encoded screenshot of the current screen.
    async fn screencap(&self) -> Result<Bytes>;

    /// Fail unless a device is connected and authorised.
    async fn verify(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Adb {
    program: String,
    serial: Option<String>,
}

impl Adb {
    pub fn new(program: impl Into<String>, serial: Option<String>) -> Self {
        Adb {
            program: program.into(),
            serial,
        }
    }

    pub fn from_config(config: &DeviceConfig) -> Self {
        Adb::new(config.adb_path.clone(), config.serial.clone())
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(serial) = &self.serial {
            cmd.arg("-s").arg(serial);
        }
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }

    async fn run(&self, args: &[&str]) -> Result<Output, DeviceError> {
        debug!(program = %self.program, ?args, "spawning adb");

        let output = self
            .command(args)
            .output()
            .await
            .map_err(|source| DeviceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DeviceError::CommandFailed {
                command: args.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

/// Serials of every device in `adb devices` output that is in the `device`
/// state; unauthorised and offline entries are skipped.
pub fn ready_devices(listing: &str) -> Result<Vec<String>> {
    let re = regex::Regex::new(READY_DEVICE_REGEX)?;
    Ok(re
        .captures_iter(listing)
        .map(|caps| caps[1].to_string())
        .collect())
}

#[async_trait::async_trait]
impl InputDevice for Adb {
    #[instrument(skip(self))]
    async fn swipe(&self, from: Point, to: Point, duration_ms: u64) -> Result<()> {
        let args = [
            from.x.to_string(),
            from.y.to_string(),
            to.x.to_string(),
            to.y.to_string(),
            duration_ms.to_string(),
        ];
        let mut command = vec!["shell", "input", "swipe"];
        command.extend(args.iter().map(String::as_str));

        self.run(&command).await?;
        Ok(())
    }

    async fn screencap(&self) -> Result<Bytes> {
        let output = self.run(&["exec-out", "screencap", "-p"]).await?;
        debug!(bytes = output.stdout.len(), "captured screenshot");
        Ok(Bytes::from(output.stdout))
    }

    async fn verify(&self) -> Result<()> {
        let output = self.run(&["devices"]).await?;
        let listing = String::from_utf8_lossy(&output.stdout);

        let devices = ready_devices(&listing)?;
        if devices.is_empty() {
            return Err(DeviceError::NoDevice.into());
        }
        debug!(?devices, "adb devices ready");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::sync::Mutex;

    pub type Swipe = (Point, Point, u64);

    /// Remembers every swipe instead of touching a phone.
    #[derive(Default)]
    pub struct RecordingDevice {
        swipes: Mutex<Vec<Swipe>>,
        screen: Option<Bytes>,
        fail_after: Option<usize>,
    }

    impl RecordingDevice {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_screen(screen: Vec<u8>) -> Self {
            RecordingDevice {
                screen: Some(Bytes::from(screen)),
                ..Self::default()
            }
        }

        /// Accept `count` swipes, then fail every further one.
        pub fn failing_after(count: usize) -> Self {
            RecordingDevice {
                fail_after: Some(count),
                ..Self::default()
            }
        }

        pub fn swipes(&self) -> Vec<Swipe> {
            self.swipes.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl InputDevice for RecordingDevice {
        async fn swipe(&self, from: Point, to: Point, duration_ms: u64) -> Result<()> {
            let mut swipes = self.swipes.lock().unwrap();
            if self.fail_after.is_some_and(|limit| swipes.len() >= limit) {
                anyhow::bail!("device went away");
            }
            swipes.push((from, to, duration_ms));
            Ok(())
        }

        async fn screencap(&self) -> Result<Bytes> {
            match &self.screen {
                Some(screen) => Ok(screen.clone()),
                None => Err(DeviceError::NoDevice.into()),
            }
        }

        async fn verify(&self) -> Result<()> {
            Ok(())
        }
    }
}
