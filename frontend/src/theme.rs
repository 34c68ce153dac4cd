//! Light/dark theme preference.
//!
//! The preference lives under one `localStorage` key. It is read once at
//! startup and applied to `<body>` before the first paint, then written back
//! on every toggle.

use log::{debug, warn};

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon shown on the toggle: the moon offers dark mode, the sun offers
    /// light mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Key-value store the preference is persisted in.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The browser's `localStorage`.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("Could not persist {}={}", key, value);
                }
            }
            None => warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}

pub fn load(store: &impl PreferenceStore) -> Theme {
    Theme::from_stored(store.get(config::THEME_STORAGE_KEY).as_deref())
}

pub fn save(store: &impl PreferenceStore, theme: Theme) {
    store.set(config::THEME_STORAGE_KEY, theme.as_str());
}

/// Flips the theme, persists it and returns the new value.
pub fn toggle(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    save(store, next);
    next
}

/// Sets or clears the dark theme class on `<body>`.
pub fn apply_to_body(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        match body.class_list().toggle_with_force(config::DARK_THEME_CLASS, theme.is_dark()) {
            Ok(_) => debug!("Theme applied: {}", theme.as_str()),
            Err(e) => warn!("Could not apply {} theme: {:?}", theme.as_str(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn missing_or_unknown_preference_is_light() {
        let store = MemoryStore::default();
        assert_eq!(load(&store), Theme::Light);
        store.set("theme", "solarized");
        assert_eq!(load(&store), Theme::Light);
    }

    #[test]
    fn stored_dark_starts_dark_with_sun_icon() {
        let store = MemoryStore::default();
        store.set("theme", "dark");
        let theme = load(&store);
        assert!(theme.is_dark());
        assert_eq!(theme.icon_class(), "fas fa-sun");
    }

    #[test]
    fn toggling_twice_restores_theme_and_stored_value() {
        let store = MemoryStore::default();
        store.set("theme", "light");
        let start = load(&store);

        let once = toggle(&store, start);
        assert_eq!(once, Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        let twice = toggle(&store, once);
        assert_eq!(twice, start);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(twice.icon_class(), "fas fa-moon");
    }

    #[test]
    fn persisted_value_survives_reload() {
        let store = MemoryStore::default();
        let theme = toggle(&store, Theme::Light);
        assert_eq!(load(&store), theme);
    }
}
