use std::{fmt, str::FromStr};

use thiserror::Error;

/// Key the display mode is persisted under.
pub const THEME_KEY: &str = "theme";

/// Media query answering the OS dark-mode hint.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme mode: {0:?}")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("couldn't read preference: {0}")]
    Read(String),
    #[error("couldn't write preference: {0}")]
    Write(String),
}

/// Read the OS dark-mode hint through `matches`, which must evaluate a media
/// query synchronously. A query the environment can't answer counts as no
/// preference.
pub fn prefers_dark<M>(matches: M) -> bool
where
    M: FnOnce(&str) -> Option<bool>,
{
    matches(PREFERS_DARK_QUERY).unwrap_or(false)
}

/// Key-value surface the display mode is persisted to.
///
/// In the browser this is `localStorage`; anything that can hold a string per
/// key will do.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Owns the active display mode and its persisted copy.
///
/// There is exactly one writer: whoever holds the resolver. Everything else
/// reads [`ThemeResolver::active`].
pub struct ThemeResolver<S> {
    store: S,
    active: ThemeMode,
}

impl<S: PreferenceStore> ThemeResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            active: ThemeMode::default(),
        }
    }

    /// Resolve the starting mode from the stored preference, falling back to
    /// the OS hint.
    ///
    /// `prefers_dark` is only queried when there is no usable stored value.
    /// The result becomes the active mode but is not written back.
    pub fn initialize<H>(&mut self, prefers_dark: H) -> ThemeMode
    where
        H: FnOnce() -> bool,
    {
        let mode = self.stored().unwrap_or_else(|| {
            if prefers_dark() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        });
        log::debug!("initial theme resolved to {mode}");
        self.active = mode;
        mode
    }

    /// Make `mode` the active one and persist it.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory mode
    /// still changes.
    pub fn apply(&mut self, mode: ThemeMode) {
        self.active = mode;
        if let Err(e) = self.store.set(THEME_KEY, mode.as_str()) {
            log::warn!("theme not persisted: {e}");
        }
    }

    pub fn toggle(current: ThemeMode) -> ThemeMode {
        current.toggled()
    }

    /// Flip the active mode, persist it, and return the new mode.
    pub fn toggle_active(&mut self) -> ThemeMode {
        let next = Self::toggle(self.active);
        self.apply(next);
        next
    }

    pub fn active(&self) -> ThemeMode {
        self.active
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored(&self) -> Option<ThemeMode> {
        let raw = match self.store.get(THEME_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("stored theme unreadable, using OS preference: {e}");
                return None;
            }
        };
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                log::debug!("ignoring stored theme: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
        writes: usize,
    }

    impl MemoryStore {
        fn with(value: &str) -> Self {
            let mut store = Self::default();
            store.values.insert(THEME_KEY.to_string(), value.to_string());
            store
        }

        fn theme(&self) -> Option<&str> {
            self.values.get(THEME_KEY).map(String::as_str)
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.values.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.writes += 1;
            self.values.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    // Storage that refuses every read and write, like a locked-down browser.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("system".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_toggle_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let once = ThemeResolver::<MemoryStore>::toggle(mode);
            assert_ne!(once, mode);
            assert_eq!(ThemeResolver::<MemoryStore>::toggle(once), mode);
        }
    }

    #[test]
    fn test_initialize_without_valid_preference_uses_hint() {
        for stored in [None, Some(""), Some("system"), Some("DARK"), Some("blue")] {
            for hint in [false, true] {
                let store = stored.map(MemoryStore::with).unwrap_or_default();
                let mut resolver = ThemeResolver::new(store);
                let expected = if hint {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                };
                assert_eq!(resolver.initialize(|| hint), expected, "stored {stored:?}");
            }
        }
    }

    #[test]
    fn test_stored_preference_wins_over_hint() {
        let mut resolver = ThemeResolver::new(MemoryStore::with("dark"));
        assert_eq!(resolver.initialize(|| false), ThemeMode::Dark);

        let mut resolver = ThemeResolver::new(MemoryStore::with("light"));
        assert_eq!(resolver.initialize(|| true), ThemeMode::Light);
    }

    #[test]
    fn test_hint_not_queried_when_preference_stored() {
        let mut resolver = ThemeResolver::new(MemoryStore::with("light"));
        let mode = resolver.initialize(|| panic!("hint should not be read"));
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_initialize_does_not_write_back() {
        let mut resolver = ThemeResolver::new(MemoryStore::default());
        assert_eq!(resolver.initialize(|| false), ThemeMode::Light);
        assert_eq!(resolver.active(), ThemeMode::Light);
        assert_eq!(resolver.store().theme(), None);
        assert_eq!(resolver.store().writes, 0);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut resolver = ThemeResolver::new(MemoryStore::default());
        resolver.apply(ThemeMode::Dark);
        let after_one = resolver.store().theme().map(str::to_string);
        resolver.apply(ThemeMode::Dark);
        assert_eq!(resolver.store().theme().map(str::to_string), after_one);
        assert_eq!(resolver.store().theme(), Some("dark"));
        assert_eq!(resolver.active(), ThemeMode::Dark);
    }

    #[test]
    fn test_hint_dark_then_toggle_persists_light() {
        let mut resolver = ThemeResolver::new(MemoryStore::default());
        assert_eq!(resolver.initialize(|| true), ThemeMode::Dark);
        assert_eq!(resolver.toggle_active(), ThemeMode::Light);
        assert_eq!(resolver.active(), ThemeMode::Light);
        assert_eq!(resolver.store().theme(), Some("light"));
    }

    #[test]
    fn test_prefers_dark_reads_media_query() {
        let mut asked = None;
        assert!(prefers_dark(|q| {
            asked = Some(q.to_string());
            Some(true)
        }));
        assert_eq!(asked.as_deref(), Some("(prefers-color-scheme: dark)"));
        assert!(!prefers_dark(|_| Some(false)));
        assert!(!prefers_dark(|_| None));
    }

    #[test]
    fn test_dark_os_first_visit_resolves_dark() {
        let mut resolver = ThemeResolver::new(MemoryStore::default());
        let mode = resolver.initialize(|| prefers_dark(|_| Some(true)));
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(resolver.active(), ThemeMode::Dark);
    }

    #[test]
    fn test_media_query_skipped_with_stored_preference() {
        let queried = Cell::new(0);
        let mut resolver = ThemeResolver::new(MemoryStore::with("light"));
        let mode = resolver.initialize(|| {
            prefers_dark(|_| {
                queried.set(queried.get() + 1);
                Some(true)
            })
        });
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(queried.get(), 0);
    }

    #[test]
    fn test_unavailable_store_degrades() {
        let mut resolver = ThemeResolver::new(BrokenStore);
        assert_eq!(resolver.initialize(|| true), ThemeMode::Dark);

        let mut resolver = ThemeResolver::new(BrokenStore);
        assert_eq!(resolver.initialize(|| false), ThemeMode::Light);

        // write fails but the active mode still moves
        resolver.apply(ThemeMode::Dark);
        assert_eq!(resolver.active(), ThemeMode::Dark);
        assert_eq!(resolver.toggle_active(), ThemeMode::Light);
        assert_eq!(resolver.active(), ThemeMode::Light);
    }
}
