//! Message-key translation seam.
//!
//! Protocol enums carry untranslated English template strings as their
//! message keys. Rendering operations resolve a key through a [`Translator`]
//! at call time, never caching the result, so the same value renders
//! differently for callers in different locales.
//!
//! Where translations actually come from (resource files, a database, a
//! remote service) is outside this crate. Locale selection is entirely owned
//! by the implementation the caller passes in.

use std::collections::HashMap;

/// Maps a message key to human-readable text for the caller's locale.
///
/// Implementations must be total: a key with no translation is returned
/// unchanged, never treated as an error.
pub trait Translator {
    /// Resolves `key` to localized text.
    fn translate(&self, key: &str) -> String;
}

/// Returns every key unchanged.
///
/// Message keys are English templates, so this is the English locale. It is
/// also the natural default for tools with no translation tables loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// In-memory key to text table, falling back to the key itself for entries
/// it does not know.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator {
    entries: HashMap<String, String>,
}

impl DictionaryTranslator {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the translation for `key`.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translator_returns_key_unchanged() {
        let translator = IdentityTranslator;
        assert_eq!(translator.translate("Server is full."), "Server is full.");
    }

    #[test]
    fn test_dictionary_translator_resolves_known_key() {
        let mut translator = DictionaryTranslator::new();
        translator.insert("Server is full.", "Der Server ist voll.");
        assert_eq!(translator.translate("Server is full."), "Der Server ist voll.");
    }

    #[test]
    fn test_dictionary_translator_falls_back_to_key() {
        let translator = DictionaryTranslator::new();
        assert_eq!(translator.translate("Account is banned."), "Account is banned.");
    }

    #[test]
    fn test_dictionary_translator_insert_replaces_existing_entry() {
        let mut translator = DictionaryTranslator::new();
        translator.insert("key", "first");
        translator.insert("key", "second");
        assert_eq!(translator.translate("key"), "second");
    }
}
