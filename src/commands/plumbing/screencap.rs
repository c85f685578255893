use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::areas::session::Session;

impl Session {
    /// Capture the phone screen as PNG into `output`, or into the workspace
    /// when no path is given.
    pub async fn screencap(&self, output: Option<&Path>) -> anyhow::Result<()> {
        let png = self.device().screencap().await?;

        let target = match output {
            Some(path) => {
                std::fs::write(path, &png)
                    .with_context(|| format!("Failed to write screenshot {}", path.display()))?;
                path.to_path_buf()
            }
            None => self.workspace().save_screenshot(&png)?,
        };

        writeln!(self.writer(), "Screenshot saved to {}", target.display())?;
        Ok(())
    }
}
