use std::cell::{RefCell, RefMut};
use std::sync::Arc;

use crate::areas::device::{Adb, InputDevice};
use crate::areas::workspace::Workspace;
use crate::artifacts::plotter::Plotter;
use crate::config::Config;

/// Everything a command runs against: configuration, the device, where
/// output files go and where user-facing text is written.
pub struct Session {
    config: Config,
    writer: RefCell<Box<dyn std::io::Write>>,
    device: Arc<dyn InputDevice>,
    workspace: Workspace,
}

impl Session {
    pub fn new(config: Config, writer: Box<dyn std::io::Write>) -> Self {
        let device = Arc::new(Adb::from_config(&config.device));
        Self::with_device(config, writer, device)
    }

    pub fn with_device(
        config: Config,
        writer: Box<dyn std::io::Write>,
        device: Arc<dyn InputDevice>,
    ) -> Self {
        let workspace = Workspace::new(config.detection.output_dir.clone().into_boxed_path());

        Session {
            config,
            writer: RefCell::new(writer),
            device,
            workspace,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn device(&self) -> Arc<dyn InputDevice> {
        self.device.clone()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn plotter(&self) -> Plotter {
        Plotter::new(self.device())
    }
}
