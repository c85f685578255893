use std::io::Write;

use crate::areas::session::Session;
use crate::artifacts::shapes::{CLI_TEXT_BUDGET, centered_text};
use crate::commands::porcelain::shape::ShapeTarget;

impl Session {
    /// Draw one line of text centred on the target, shrunk to fit.
    pub async fn draw_text(&self, text: &str, target: &ShapeTarget<'_>) -> anyhow::Result<()> {
        let center = self.resolve_center(target).await?;
        writeln!(self.writer(), "Drawing text: {}", text)?;

        self.draw_shape_strokes(&centered_text(text, center, CLI_TEXT_BUDGET))
            .await
    }
}
