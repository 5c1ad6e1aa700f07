use std::collections::{BTreeMap, BTreeSet};

use crate::error::WidgetError;

/// Theme transitions: on toggle, the current theme becomes `next(current)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeMap {
    transitions: BTreeMap<String, String>,
}

impl ThemeMap {
    pub fn new(transitions: BTreeMap<String, String>) -> Self {
        Self { transitions }
    }

    /// Check that every theme, `initial` included, has a target state and is
    /// reachable from some other state.
    pub fn validate(&self, initial: &str) -> Result<(), WidgetError> {
        let keys: BTreeSet<&str> = self.transitions.keys().map(String::as_str).collect();
        let values: BTreeSet<&str> = self.transitions.values().map(String::as_str).collect();

        let mut all = keys.clone();
        all.extend(values.iter().copied());
        all.insert(initial);

        if all.len() != keys.len() || all.len() != values.len() {
            return Err(WidgetError::InvalidThemeMap);
        }
        Ok(())
    }

    pub fn next(&self, theme: &str) -> Option<&str> {
        self.transitions.get(theme).map(String::as_str)
    }

    pub fn contains(&self, theme: &str) -> bool {
        self.transitions.contains_key(theme)
    }
}

impl From<BTreeMap<String, String>> for ThemeMap {
    fn from(transitions: BTreeMap<String, String>) -> Self {
        Self::new(transitions)
    }
}

impl<K, V> FromIterator<(K, V)> for ThemeMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_dark() -> ThemeMap {
        [("light", "dark"), ("dark", "light")].into_iter().collect()
    }

    #[test]
    fn test_two_cycle_is_valid() {
        assert!(light_dark().validate("light").is_ok());
        assert!(light_dark().validate("dark").is_ok());
    }

    #[test]
    fn test_missing_reverse_edge_is_rejected() {
        let map: ThemeMap = [("A", "B")].into_iter().collect();
        assert_eq!(map.validate("A"), Err(WidgetError::InvalidThemeMap));
    }

    #[test]
    fn test_unknown_initial_is_rejected() {
        assert_eq!(light_dark().validate("sepia"), Err(WidgetError::InvalidThemeMap));
    }

    #[test]
    fn test_unreachable_key_is_rejected() {
        // Both point at "dark"; "light" is never a target.
        let map: ThemeMap = [("light", "dark"), ("dark", "dark")].into_iter().collect();
        assert_eq!(map.validate("dark"), Err(WidgetError::InvalidThemeMap));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let map: ThemeMap = [("only", "only")].into_iter().collect();
        assert!(map.validate("only").is_ok());
        assert_eq!(map.next("only"), Some("only"));
    }

    #[test]
    fn test_empty_map_rejects_any_initial() {
        assert_eq!(ThemeMap::default().validate("light"), Err(WidgetError::InvalidThemeMap));
    }

    #[test]
    fn test_next_lookup() {
        let map = light_dark();
        assert_eq!(map.next("light"), Some("dark"));
        assert_eq!(map.next("dark"), Some("light"));
        assert_eq!(map.next("sepia"), None);
    }
}
