use gloo_timers::callback::Timeout;
use leptos::*;

use super::notice::{Notice, NoticeContext};
use super::storage::{KeyValueStore, LocalStore};

pub const STORAGE_KEY: &str = "theme";
pub const NOTICE_KEY: &str = "theme";
const SWITCHED_NOTICE_MS: u32 = 2_000;

/// Theme variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Convert to string for storage and data attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Toggle between light and dark
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme preference mirrored into a key-value store.
///
/// Every write goes through `set`, which updates memory and storage together.
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Adopt the stored theme, or seed storage with the default
    pub fn load(store: S) -> Self {
        let stored = store.read(STORAGE_KEY);
        match stored.as_deref().and_then(Theme::parse) {
            Some(theme) => Self {
                store,
                current: theme,
            },
            None => {
                if let Some(raw) = stored {
                    log::warn!("Ignoring unknown stored theme {:?}", raw);
                }
                let this = Self {
                    store,
                    current: Theme::default(),
                };
                this.persist();
                this
            }
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persist();
    }

    /// Flip the theme and return the new value
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggle();
        self.set(next);
        next
    }

    fn persist(&self) {
        if let Err(e) = self.store.write(STORAGE_KEY, self.current.as_str()) {
            log::warn!("Failed to persist theme: {}", e);
        }
    }
}

/// Immediate notice shown when a toggle starts
pub fn switching_notice(theme: Theme) -> Notice {
    Notice::loading(NOTICE_KEY, format!("Switching to {} mode...", theme.as_str()))
}

/// Delayed confirmation that replaces the switching notice
pub fn switched_notice(theme: Theme) -> Notice {
    Notice::success(
        NOTICE_KEY,
        format!("Switched to {} mode", theme.as_str()),
        SWITCHED_NOTICE_MS,
    )
}

/// Theme context containing the current theme and toggle function
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    store: StoredValue<ThemeStore<LocalStore>>,
    notices: NoticeContext,
    notice_delay_ms: u32,
}

impl ThemeContext {
    /// Toggle between light and dark theme
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggle();
        self.store.update_value(|store| store.set(next));
        self.set_theme.set(next);
        apply_theme(next);
        log::info!("Theme switched to {}", next.as_str());

        self.notices.show(switching_notice(next));
        self.confirm_later(next);
    }

    fn confirm_later(&self, theme: Theme) {
        let notices = self.notices;
        Timeout::new(self.notice_delay_ms, move || {
            notices.show(switched_notice(theme));
        })
        .forget();
    }
}

/// Apply theme to document root element
fn apply_theme(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Provide theme context to the application
/// Call this at the root of your app (e.g., in App component)
pub fn provide_theme_context(notices: NoticeContext, notice_delay_ms: u32) -> ThemeContext {
    let store = ThemeStore::load(LocalStore);
    let initial_theme = store.get();

    // Apply initial theme immediately
    apply_theme(initial_theme);

    let (theme, set_theme) = create_signal(initial_theme);

    let ctx = ThemeContext {
        theme,
        set_theme,
        store: store_value(store),
        notices,
        notice_delay_ms,
    };
    provide_context(ctx);
    ctx
}

/// Hook to access theme context
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::{MemoryStore, StorageError};

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            Some("dark".to_string())
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_first_run_seeds_default() {
        let storage = MemoryStore::new();
        let store = ThemeStore::load(storage.clone());
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(storage.read(STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_adopts_stored_theme() {
        let storage = MemoryStore::with_entry(STORAGE_KEY, "dark");
        let store = ThemeStore::load(storage);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn test_unknown_stored_value_resets_to_default() {
        let storage = MemoryStore::with_entry(STORAGE_KEY, "solarized");
        let store = ThemeStore::load(storage.clone());
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(storage.read(STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for start in [Theme::Light, Theme::Dark] {
            let storage = MemoryStore::with_entry(STORAGE_KEY, start.as_str());
            let mut store = ThemeStore::load(storage.clone());

            let flipped = store.toggle();
            assert_eq!(flipped, start.toggle());
            assert_eq!(storage.read(STORAGE_KEY).as_deref(), Some(flipped.as_str()));

            store.toggle();
            assert_eq!(store.get(), start);
            assert_eq!(storage.read(STORAGE_KEY).as_deref(), Some(start.as_str()));
        }
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let mut store = ThemeStore::load(ReadOnlyStore);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn test_toggle_notices() {
        let switching = switching_notice(Theme::Dark);
        let switched = switched_notice(Theme::Dark);

        assert_eq!(switching.content, "Switching to dark mode...");
        assert_eq!(switching.duration_ms, None);
        assert_eq!(switched.content, "Switched to dark mode");
        assert_eq!(switched.duration_ms, Some(2_000));
        assert_eq!(switching.key, switched.key);
    }
}
