use std::io::Write;
use std::path::Path;

use crate::areas::session::Session;
use crate::artifacts::extraction::{ExtractOptions, MAX_IMAGE_SIZE, extract_paths, load_image};

impl Session {
    /// Print the paths extracted from `image`, with stats, as JSON.
    pub fn extract(&self, image: &Path, options: &ExtractOptions, pretty: bool) -> anyhow::Result<()> {
        if !image.exists() {
            anyhow::bail!("Image not found: {}", image.display());
        }

        let gray = load_image(image, MAX_IMAGE_SIZE)?;
        let (method, paths) = extract_paths(&gray, options);
        let report = paths.into_report(method);

        let json = if pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        writeln!(self.writer(), "{}", json)?;

        Ok(())
    }
}
