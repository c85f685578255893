use std::io::Write;
use std::sync::Arc;

use colored::Colorize;

use crate::areas::session::Session;
use crate::server::{AppState, run_server};

impl Session {
    /// Run the web UI until interrupted. `listen` overrides the configured
    /// address.
    pub async fn serve(&self, listen: Option<&str>) -> anyhow::Result<()> {
        let listen = listen.unwrap_or(&self.config().server.listen).to_string();
        let state = Arc::new(AppState::with_device(self.config().clone(), self.device()));

        writeln!(self.writer(), "{}", "RevoDraw - Card Drawing Web UI".bold())?;
        writeln!(self.writer(), "Connect your Android phone via USB with USB debugging enabled")?;
        writeln!(self.writer(), "Open in browser: http://{}", listen)?;
        self.writer().flush()?;

        run_server(state, &listen).await
    }
}
