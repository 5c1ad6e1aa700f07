//! Browser widgets for the documentation site: a light/dark theme toggle and
//! copy-to-clipboard buttons on code blocks.

pub mod app;
pub mod config;
pub mod copy;
pub mod error;
pub mod theme;

pub use app::{load_config, start};
pub use config::{CopyStrings, SiteConfig};
pub use error::WidgetError;
