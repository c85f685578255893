use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::ShapeKind;
use crate::areas::session::Session;
use crate::artifacts::plotter::DrawSettings;
use crate::artifacts::shapes::{INTERACTIVE_TEXT_BUDGET, Stroke, centered_text, shape_strokes};
use crate::commands::porcelain::shape::ShapeTarget;

const PROMPT: &str = "draw> ";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Shape(ShapeKind),
    Text(String),
    Quit,
    Empty,
    Unknown(String),
}

impl PromptCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return PromptCommand::Empty;
        }

        let (action, rest) = match line.split_once(char::is_whitespace) {
            Some((action, rest)) => (action, rest.trim()),
            None => (line, ""),
        };

        match action.to_lowercase().as_str() {
            "quit" | "exit" | "q" => PromptCommand::Quit,
            "heart" => PromptCommand::Shape(ShapeKind::Heart),
            "star" => PromptCommand::Shape(ShapeKind::Star),
            "circle" => PromptCommand::Shape(ShapeKind::Circle),
            "spiral" => PromptCommand::Shape(ShapeKind::Spiral),
            "demo" => PromptCommand::Shape(ShapeKind::Demo),
            "text" if !rest.is_empty() => PromptCommand::Text(rest.to_string()),
            other => PromptCommand::Unknown(other.to_string()),
        }
    }
}

impl Session {
    /// Read commands from `input` until `quit` or end of input, drawing each
    /// one around a centre resolved once up front.
    pub async fn interactive<R>(
        &self,
        mut input: R,
        size: i32,
        target: &ShapeTarget<'_>,
        show_prompt: bool,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let center = self.resolve_center(target).await?;
        self.device().verify().await?;

        writeln!(self.writer(), "\n{}", "=== Interactive Mode ===".bold())?;
        writeln!(self.writer(), "Center: {}, Size: {}", center, size)?;
        writeln!(
            self.writer(),
            "Commands: heart, star, circle, spiral, text <msg>, demo, quit\n"
        )?;

        let settings = DrawSettings::for_shapes(&self.config().drawing);
        let plotter = self.plotter();
        let mut line = String::new();

        loop {
            if show_prompt {
                write!(self.writer(), "{}", PROMPT)?;
                self.writer().flush()?;
            }

            line.clear();
            if input.read_line(&mut line).await? == 0 {
                break;
            }

            let strokes: Vec<Stroke> = match PromptCommand::parse(&line) {
                PromptCommand::Quit => break,
                PromptCommand::Empty => continue,
                PromptCommand::Unknown(action) => {
                    writeln!(self.writer(), "Unknown: {}", action)?;
                    continue;
                }
                PromptCommand::Shape(kind) => shape_strokes(kind, center, size),
                PromptCommand::Text(text) => centered_text(&text, center, INTERACTIVE_TEXT_BUDGET),
            };

            if let Err(e) = plotter.draw_strokes(&strokes, &settings).await {
                tracing::error!(error = %e, "drawing failed");
                writeln!(self.writer(), "{} {:#}", "Error:".red(), e)?;
            }
        }

        writeln!(self.writer(), "Bye!")?;
        Ok(())
    }
}
