use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;
use web_sys::{window, Storage};
use yew::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale code {0:?}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code.trim())
            .ok_or_else(|| UnknownLocale(code.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: &'static str, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: &'static str, reason: String },
}

/// Durable home of the persisted locale code.
pub trait LocaleStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, code: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` under [`config::LOCALE_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserLocaleStore;

impl BrowserLocaleStore {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl LocaleStore for BrowserLocaleStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(config::LOCALE_STORAGE_KEY)
            .map_err(|e| StorageError::Read {
                key: config::LOCALE_STORAGE_KEY,
                reason: format!("{:?}", e),
            })
    }

    fn write(&self, code: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(config::LOCALE_STORAGE_KEY, code)
            .map_err(|e| StorageError::Write {
                key: config::LOCALE_STORAGE_KEY,
                reason: format!("{:?}", e),
            })
    }
}

/// The active locale plus the store it is persisted to.
#[derive(Clone, Debug)]
pub struct LocalePreference<S> {
    current: Locale,
    store: S,
}

impl<S: LocaleStore> LocalePreference<S> {
    /// Reads the stored code once. Anything missing, unknown or unreadable
    /// falls back to the default locale.
    pub fn load(store: S) -> Self {
        let current = match store.read() {
            Ok(Some(code)) => code.parse::<Locale>().unwrap_or_else(|e: UnknownLocale| {
                warn!("{}, using {}", e, config::DEFAULT_LOCALE);
                config::DEFAULT_LOCALE
            }),
            Ok(None) => config::DEFAULT_LOCALE,
            Err(e) => {
                warn!("{}, using {}", e, config::DEFAULT_LOCALE);
                config::DEFAULT_LOCALE
            }
        };
        debug!("locale at startup: {}", current);
        Self { current, store }
    }

    pub fn current_locale(&self) -> Locale {
        self.current
    }

    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.current.other());
        self.current
    }

    /// Updates memory first, then persists. A failed write is logged and
    /// the in-memory choice stays for the session.
    pub fn set_locale(&mut self, locale: Locale) {
        self.current = locale;
        if let Err(e) = self.store.write(locale.code()) {
            warn!("locale {} not persisted: {}", locale, e);
        }
    }
}

impl<S> PartialEq for LocalePreference<S> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

pub enum LocaleAction {
    Toggle,
    Set(Locale),
}

impl<S: LocaleStore + Clone> Reducible for LocalePreference<S> {
    type Action = LocaleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LocaleAction::Toggle => {
                next.toggle();
            }
            LocaleAction::Set(locale) => next.set_locale(locale),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    /// Shared slot so a second `load` sees what the first one wrote,
    /// like a page reload against the same browser storage.
    #[derive(Clone, Default)]
    struct MemoryStore {
        slot: Rc<RefCell<Option<String>>>,
        broken: bool,
    }

    impl MemoryStore {
        fn holding(code: &str) -> Self {
            let store = Self::default();
            *store.slot.borrow_mut() = Some(code.to_string());
            store
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Default::default()
            }
        }

        fn stored(&self) -> Option<String> {
            self.slot.borrow().clone()
        }
    }

    impl LocaleStore for MemoryStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.stored())
        }

        fn write(&self, code: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Write {
                    key: config::LOCALE_STORAGE_KEY,
                    reason: "quota exceeded".to_string(),
                });
            }
            *self.slot.borrow_mut() = Some(code.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" es ".parse::<Locale>(), Ok(Locale::Es));
        assert_eq!("fr".parse::<Locale>(), Err(UnknownLocale("fr".to_string())));
    }

    #[test]
    fn test_fresh_load_toggle_and_reload() {
        let store = MemoryStore::default();
        let mut preference = LocalePreference::load(store.clone());
        assert_eq!(preference.current_locale(), Locale::En);

        assert_eq!(preference.toggle(), Locale::Es);
        assert_eq!(preference.current_locale(), Locale::Es);
        assert_eq!(store.stored().as_deref(), Some("es"));

        let reloaded = LocalePreference::load(store);
        assert_eq!(reloaded.current_locale(), Locale::Es);
    }

    #[test]
    fn test_invalid_stored_code_falls_back_to_default() {
        let preference = LocalePreference::load(MemoryStore::holding("klingon"));
        assert_eq!(preference.current_locale(), Locale::En);
    }

    #[test]
    fn test_unavailable_storage_keeps_working_in_memory() {
        let mut preference = LocalePreference::load(MemoryStore::broken());
        assert_eq!(preference.current_locale(), Locale::En);
        assert_eq!(preference.toggle(), Locale::Es);
        assert_eq!(preference.current_locale(), Locale::Es);
    }

    #[test]
    fn test_set_locale_persists() {
        let store = MemoryStore::default();
        let mut preference = LocalePreference::load(store.clone());
        preference.set_locale(Locale::Es);
        assert_eq!(store.stored().as_deref(), Some("es"));
    }

    #[test]
    fn test_reducer_toggle_persists() {
        let store = MemoryStore::holding("es");
        let state = Rc::new(LocalePreference::load(store.clone()));
        let next = state.reduce(LocaleAction::Toggle);
        assert_eq!(next.current_locale(), Locale::En);
        assert_eq!(store.stored().as_deref(), Some("en"));
    }

    proptest! {
        #[test]
        fn test_storage_tracks_memory_after_every_toggle(toggles in 1usize..20) {
            let store = MemoryStore::default();
            let mut preference = LocalePreference::load(store.clone());
            for _ in 0..toggles {
                preference.toggle();
                prop_assert_eq!(store.stored(), Some(preference.current_locale().code().to_string()));
            }
        }

        #[test]
        fn test_double_toggle_restores_locale(start in prop::sample::select(vec!["en", "es"])) {
            let mut preference = LocalePreference::load(MemoryStore::holding(start));
            let before = preference.current_locale();
            preference.toggle();
            preference.toggle();
            prop_assert_eq!(preference.current_locale(), before);
        }
    }
}
