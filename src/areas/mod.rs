//! What a drawing session works against
//!
//! - `device`: The phone, reached through `adb`
//! - `session`: Configuration, device, workspace and output writer bundled
//!   for the commands
//! - `workspace`: Output directory for screenshots, debug images and previews

pub mod device;
pub mod session;
pub mod workspace;
