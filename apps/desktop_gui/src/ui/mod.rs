//! UI layer for the desktop shell: root tab app, placeholder screens, and the
//! fixed light appearance.

pub mod app;
pub mod screens;
pub mod theme;

pub use app::{LatchGuiApp, StartupConfig};
