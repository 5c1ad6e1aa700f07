use std::rc::Rc;

use crate::config::SiteConfig;
use crate::copy::{inject_copy_buttons, SystemClipboard};
use crate::error::WidgetError;
use crate::theme::{mount_theme_toggle, ThemeEnvironment};

/// Wire both widgets into the current page.
///
/// The theme toggle and the copy buttons do not depend on each other, so a
/// failure in one still lets the other run. The first failure is returned.
pub fn start(config: &SiteConfig) -> Result<(), WidgetError> {
    let window = web_sys::window().ok_or_else(|| WidgetError::MissingElement("window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::MissingElement("document".to_string()))?;

    let env = ThemeEnvironment::detect(&window, &config.storage_key);
    let theme = mount_theme_toggle(&document, config, env);
    if let Err(err) = &theme {
        log::error!("Theme toggle disabled: {}", err);
    }

    let copied = inject_copy_buttons(&document, config, Rc::new(SystemClipboard));
    if let Err(err) = &copied {
        log::error!("Copy buttons disabled: {}", err);
    }

    theme?;
    copied?;
    Ok(())
}

/// Config from the page's embedded JSON, or the defaults when there is none
/// or it does not parse.
pub fn load_config() -> (SiteConfig, Option<WidgetError>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return (SiteConfig::default(), None);
    };
    match SiteConfig::from_document(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    }
}
