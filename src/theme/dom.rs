use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::SiteConfig;
use crate::error::{dom_error, js_error_message, WidgetError};

use super::map::ThemeMap;
use super::toggle::{ThemeToggle, ThemeToggleOptions};

/// Browser state the theme toggle starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeEnvironment {
    /// Theme previously written to local storage, if any.
    pub cached_theme: Option<String>,
    /// Whether `(prefers-color-scheme: dark)` matches.
    pub prefers_dark: bool,
}

impl ThemeEnvironment {
    pub fn detect(window: &web_sys::Window, storage_key: &str) -> Self {
        let cached_theme = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(storage_key).ok().flatten());

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());

        Self {
            cached_theme,
            prefers_dark,
        }
    }
}

/// Set the theme attribute on `<html>` and mirror dark mode into the
/// control's `aria-pressed`.
fn apply_to_page(root: &web_sys::Element, control: &web_sys::Element, attribute: &str, theme: &str, dark: bool) {
    if let Err(err) = root.set_attribute(attribute, theme) {
        log::warn!("Failed to set {}: {}", attribute, js_error_message(&err));
    }
    if let Err(err) = control.set_attribute("aria-pressed", if dark { "true" } else { "false" }) {
        log::warn!("Failed to set aria-pressed: {}", js_error_message(&err));
    }
}

fn cache_theme(storage_key: &str, theme: &str) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        log::warn!("Local storage unavailable, theme not cached");
        return;
    };
    if let Err(err) = storage.set_item(storage_key, theme) {
        log::warn!("Failed to cache theme: {}", js_error_message(&err));
    }
}

/// Build the theme toggle for the page's toggle control and wire its clicks.
///
/// The returned handle shares state with the click listener, so reading
/// `current_theme()` from it always reflects the page.
pub fn mount_theme_toggle(
    document: &web_sys::Document,
    config: &SiteConfig,
    env: ThemeEnvironment,
) -> Result<Rc<RefCell<ThemeToggle>>, WidgetError> {
    let control = document
        .get_element_by_id(&config.toggle_id)
        .ok_or_else(|| WidgetError::MissingElement(format!("#{}", config.toggle_id)))?;
    let root = document
        .document_element()
        .ok_or_else(|| WidgetError::MissingElement("<html>".to_string()))?;

    let themes = ThemeMap::from(config.themes.clone());

    // Stale storage from an older theme set should not brick the toggle.
    let cached_theme = env.cached_theme.filter(|theme| {
        let known = themes.contains(theme);
        if !known {
            log::warn!("Ignoring unknown cached theme '{}'", theme);
        }
        known
    });

    let apply_theme = {
        let control = control.clone();
        let attribute = config.theme_attribute.clone();
        let dark_theme = config.dark_theme.clone();
        move |theme: &str| apply_to_page(&root, &control, &attribute, theme, theme == dark_theme)
    };
    let storage_key = config.storage_key.clone();

    let toggle = ThemeToggle::new(ThemeToggleOptions {
        initial_theme: config.preferred_theme(env.prefers_dark).to_string(),
        cached_theme,
        themes,
        apply_theme: Box::new(apply_theme),
        cache_theme: Some(Box::new(move |theme: &str| cache_theme(&storage_key, theme))),
    })?;
    log::info!("Theme toggle ready, current theme '{}'", toggle.current_theme());

    let toggle = Rc::new(RefCell::new(toggle));
    let handle = toggle.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        let theme = handle.borrow_mut().toggle().to_string();
        log::debug!("Theme toggled to '{}'", theme);
    });
    control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_click.forget();

    Ok(toggle)
}
