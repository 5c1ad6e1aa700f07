//! Light/dark theme switching.
//!
//! [`ThemeToggle`] holds the cycling logic and knows nothing about the page;
//! [`mount_theme_toggle`] binds it to the toggle control, `<html>` and local
//! storage.

mod dom;
mod map;
mod toggle;

pub use dom::{mount_theme_toggle, ThemeEnvironment};
pub use map::ThemeMap;
pub use toggle::{ThemeCallback, ThemeToggle, ThemeToggleOptions};
