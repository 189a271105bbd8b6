use flickmark_models::{Direction, Language};
use tracing::warn;

use crate::messages::{self, MessageKey};
use crate::storage::{Storage, WriteStatus};

pub const LANGUAGE_KEY: &str = "language";

/// Result of [`LocaleStore::set_language`].
#[derive(Debug)]
pub enum SetLanguageOutcome {
    Changed(WriteStatus),
    /// The code is not in the supported set. No state change.
    Unsupported,
}

/// Owns the active display language and the string lookup table.
pub struct LocaleStore<S: Storage> {
    storage: S,
    language: Language,
}

impl<S: Storage> LocaleStore<S> {
    /// Load the persisted language selection, falling back to the default
    /// when the persisted code is absent, unreadable, or unsupported.
    pub fn open(storage: S) -> Self {
        let language = match storage.get(LANGUAGE_KEY) {
            Ok(Some(code)) => match Language::from_code(code.trim()) {
                Some(language) => language,
                None => {
                    warn!(
                        "Persisted language code `{}` is not supported, using default",
                        code.trim()
                    );
                    Language::default()
                }
            },
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("Failed to read persisted language, using default: {}", e);
                Language::default()
            }
        };
        Self { storage, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Switch the active language and persist the new code. Unsupported
    /// codes leave everything unchanged.
    pub fn set_language(&mut self, code: &str) -> SetLanguageOutcome {
        let Some(language) = Language::from_code(code) else {
            warn!("Ignoring unsupported language code `{}`", code);
            return SetLanguageOutcome::Unsupported;
        };

        self.language = language;
        let status = match self.storage.set(LANGUAGE_KEY, language.code()) {
            Ok(()) => WriteStatus::Persisted,
            Err(e) => {
                warn!("Failed to persist language selection: {}", e);
                WriteStatus::MemoryOnly(e)
            }
        };
        SetLanguageOutcome::Changed(status)
    }

    /// Look up `key` for the active language. An unknown key echoes back
    /// unchanged; a lookup miss is a defined fallback, not an error.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match key.parse::<MessageKey>() {
            Ok(key) => messages::message(self.language, key),
            Err(_) => key,
        }
    }

    /// Typed lookup for callers that hold a [`MessageKey`] already.
    pub fn message(&self, key: MessageKey) -> &'static str {
        messages::message(self.language, key)
    }

    /// Supported languages in stable menu order.
    pub fn supported_languages() -> &'static [Language] {
        &Language::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults_to_english_when_nothing_persisted() {
        let store = LocaleStore::open(MemoryStorage::new());
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.direction(), Direction::Ltr);
    }

    #[test]
    fn test_corrupted_persisted_code_falls_back_to_default() {
        let storage = MemoryStorage::with_entry(LANGUAGE_KEY, "xx");
        let store = LocaleStore::open(storage);
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_unsupported_code_is_a_no_op() {
        let mut store = LocaleStore::open(MemoryStorage::new());
        store.set_language("fr");
        assert!(matches!(
            store.set_language("xx"),
            SetLanguageOutcome::Unsupported
        ));
        assert_eq!(store.language(), Language::Fr);
    }

    #[test]
    fn test_set_language_persists_and_switches_direction() {
        let mut store = LocaleStore::open(MemoryStorage::new());
        match store.set_language("ar") {
            SetLanguageOutcome::Changed(status) => assert!(status.is_persisted()),
            other => panic!("expected Changed, got {:?}", other),
        }
        assert_eq!(store.language(), Language::Ar);
        assert_eq!(store.direction(), Direction::Rtl);
    }

    #[test]
    fn test_language_survives_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        {
            let mut store = LocaleStore::open(crate::storage::FileStorage::new(dir.path()));
            store.set_language("zh");
        }
        let store = LocaleStore::open(crate::storage::FileStorage::new(dir.path()));
        assert_eq!(store.language(), Language::Zh);
    }

    #[test]
    fn test_translate_known_key_in_active_language() {
        let mut store = LocaleStore::open(MemoryStorage::new());
        assert_eq!(store.translate("wishlist"), "Wishlist");
        store.set_language("fr");
        assert_eq!(store.translate("wishlist"), "Liste de souhaits");
    }

    #[test]
    fn test_translate_unknown_key_returns_the_key() {
        let store = LocaleStore::open(MemoryStorage::new());
        assert_eq!(store.translate("nonexistentKey"), "nonexistentKey");
    }

    #[test]
    fn test_supported_languages_are_in_stable_order() {
        let codes: Vec<&str> = LocaleStore::<MemoryStorage>::supported_languages()
            .iter()
            .map(|l| l.code())
            .collect();
        assert_eq!(codes, vec!["en", "ar", "fr", "zh"]);
    }
}
