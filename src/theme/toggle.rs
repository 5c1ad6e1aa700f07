use crate::error::WidgetError;

use super::map::ThemeMap;

pub type ThemeCallback = Box<dyn Fn(&str)>;

pub struct ThemeToggleOptions {
    /// Used when no cached theme is supplied, typically the system preference.
    pub initial_theme: String,
    /// Previously cached theme; wins over `initial_theme` when present.
    pub cached_theme: Option<String>,
    pub themes: ThemeMap,
    /// Applies a theme to the page. Called on construction and on every toggle.
    pub apply_theme: ThemeCallback,
    /// Persists a theme. Called on toggle only.
    pub cache_theme: Option<ThemeCallback>,
}

/// A theme switch cycling through a [`ThemeMap`].
///
/// The toggle owns no page state of its own: applying and caching a theme are
/// both delegated to the callbacks it was built with.
pub struct ThemeToggle {
    current: String,
    themes: ThemeMap,
    apply_theme: ThemeCallback,
    cache_theme: Option<ThemeCallback>,
}

impl ThemeToggle {
    pub fn new(options: ThemeToggleOptions) -> Result<Self, WidgetError> {
        let ThemeToggleOptions {
            initial_theme,
            cached_theme,
            themes,
            apply_theme,
            cache_theme,
        } = options;

        let initial = cached_theme.unwrap_or(initial_theme);
        themes.validate(&initial)?;

        let toggle = Self {
            current: initial,
            themes,
            apply_theme,
            cache_theme,
        };
        (toggle.apply_theme)(&toggle.current);
        Ok(toggle)
    }

    pub fn current_theme(&self) -> &str {
        &self.current
    }

    /// The theme the next call to [`toggle`](Self::toggle) will switch to.
    pub fn next_theme(&self) -> &str {
        // Validation guarantees every theme has a transition.
        self.themes.next(&self.current).unwrap_or(&self.current)
    }

    /// Advance to the next theme, apply it, then cache it.
    pub fn toggle(&mut self) -> &str {
        self.current = self.next_theme().to_string();
        (self.apply_theme)(&self.current);
        if let Some(cache) = &self.cache_theme {
            cache(&self.current);
        }
        &self.current
    }
}

impl std::fmt::Debug for ThemeToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeToggle")
            .field("current", &self.current)
            .field("themes", &self.themes)
            .field("cache_theme", &self.cache_theme.is_some())
            .finish()
    }
}
