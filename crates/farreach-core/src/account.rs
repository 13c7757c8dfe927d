//! Outcomes of the account creation flow.
//!
//! The server reports one of these values for every create-account request.
//! Callers should verify that the process ended in [`AccountResult::OkCreated`];
//! every other variant describes why creation was refused.

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;

/// Result of an account-creation style operation.
///
/// Each variant binds a success flag and an untranslated text template at
/// definition time. Exactly one variant reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountResult {
    /// Account was created correctly.
    OkCreated,
    /// A required parameter was missing.
    FailedEmptyString,
    /// An invalid character (letter, sign, number) was used.
    FailedInvalidCharacterUsed,
    /// A parameter was either too long or too short.
    FailedStringSize,
    /// An account with this name already exists.
    FailedPlayerExists,
    /// An unspecified error happened during creation.
    FailedException,
    /// A character with this name already exists.
    FailedCharacterExists,
    /// The template passed to the create-character call fails the game rules.
    FailedInvalidTemplate,
    /// A parameter was too short.
    FailedStringTooShort,
    /// A parameter was too long.
    FailedStringTooLong,
    /// The name is reserved, or contains a reserved name.
    FailedReservedName,
    /// The password is too close to the username.
    FailedPasswordTooCloseToUsername,
    /// The password is too weak.
    FailedPasswordTooWeak,
    /// Too many accounts were created from this network recently.
    FailedTooMany,
    /// The server is unreachable. Generated client side, never sent by the
    /// server.
    FailedOffline,
    /// This server does not accept account creation; the main server does.
    FailedCreateOnMainInstead,
}

impl AccountResult {
    /// Every variant, for table-driven tests and tooling.
    pub const ALL: [AccountResult; 16] = [
        AccountResult::OkCreated,
        AccountResult::FailedEmptyString,
        AccountResult::FailedInvalidCharacterUsed,
        AccountResult::FailedStringSize,
        AccountResult::FailedPlayerExists,
        AccountResult::FailedException,
        AccountResult::FailedCharacterExists,
        AccountResult::FailedInvalidTemplate,
        AccountResult::FailedStringTooShort,
        AccountResult::FailedStringTooLong,
        AccountResult::FailedReservedName,
        AccountResult::FailedPasswordTooCloseToUsername,
        AccountResult::FailedPasswordTooWeak,
        AccountResult::FailedTooMany,
        AccountResult::FailedOffline,
        AccountResult::FailedCreateOnMainInstead,
    ];

    /// Returns `true` if the account was created.
    pub fn succeeded(self) -> bool {
        matches!(self, AccountResult::OkCreated)
    }

    /// Returns `true` if account creation failed.
    pub fn is_failure(self) -> bool {
        !self.succeeded()
    }

    /// The untranslated text template bound to this result.
    ///
    /// Templates double as message keys for the [`Translator`] seam.
    pub fn text_key(self) -> &'static str {
        match self {
            AccountResult::OkCreated => "Account was created.",
            AccountResult::FailedEmptyString => {
                "Account was not created because a required parameter was missing."
            }
            AccountResult::FailedInvalidCharacterUsed => {
                "Account was not created because an invalid character (letter, sign, number) was used."
            }
            AccountResult::FailedStringSize => {
                "Account was not created because a parameter was too short or too long."
            }
            AccountResult::FailedPlayerExists => {
                "Account was not created because it already exists."
            }
            AccountResult::FailedException => {
                "Account was not created because of an unspecified error."
            }
            AccountResult::FailedCharacterExists => {
                "Character was not created because it already exists."
            }
            AccountResult::FailedInvalidTemplate => {
                "Character was not created because the template is not valid."
            }
            AccountResult::FailedStringTooShort => {
                "Account was not created because a parameter was too short."
            }
            AccountResult::FailedStringTooLong => {
                "Account was not created because a parameter was too long."
            }
            AccountResult::FailedReservedName => {
                "Account was not created because the name is reserved (or contains a reserved name)."
            }
            AccountResult::FailedPasswordTooCloseToUsername => {
                "Account was not created because the password is too close to the username."
            }
            AccountResult::FailedPasswordTooWeak => {
                "Account was not created because the password is too weak."
            }
            AccountResult::FailedTooMany => {
                "Account was not created because the account creation limit for your network was reached. Please try again later."
            }
            AccountResult::FailedOffline => {
                "Account creation failed because the server is temporarily unavailable. Please try again later."
            }
            AccountResult::FailedCreateOnMainInstead => {
                "Accounts cannot be created on this server. Please create your account on the main server and wait a moment."
            }
        }
    }

    /// Resolves the text template through `translator` for the caller's
    /// locale. Resolved at call time, never cached.
    pub fn localized_text(self, translator: &dyn Translator) -> String {
        translator.translate(self.text_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DictionaryTranslator, IdentityTranslator};
    use std::collections::HashSet;

    #[test]
    fn test_exactly_one_variant_succeeds() {
        let successes: Vec<AccountResult> = AccountResult::ALL
            .iter()
            .copied()
            .filter(|result| result.succeeded())
            .collect();
        assert_eq!(successes, vec![AccountResult::OkCreated]);
    }

    #[test]
    fn test_is_failure_is_the_negation_of_succeeded() {
        for result in AccountResult::ALL {
            assert_eq!(result.is_failure(), !result.succeeded());
        }
    }

    #[test]
    fn test_text_keys_are_distinct() {
        let keys: HashSet<&'static str> =
            AccountResult::ALL.iter().map(|result| result.text_key()).collect();
        assert_eq!(keys.len(), AccountResult::ALL.len());
    }

    #[test]
    fn test_localized_text_resolves_through_translator() {
        let mut translator = DictionaryTranslator::new();
        translator.insert(
            AccountResult::FailedPlayerExists.text_key(),
            "Konto existiert bereits.",
        );
        assert_eq!(
            AccountResult::FailedPlayerExists.localized_text(&translator),
            "Konto existiert bereits."
        );
    }

    #[test]
    fn test_localized_text_with_identity_translator_is_the_template() {
        assert_eq!(
            AccountResult::OkCreated.localized_text(&IdentityTranslator),
            "Account was created."
        );
    }

    #[test]
    fn test_serializes_with_screaming_snake_names() {
        let json = serde_json::to_string(&AccountResult::FailedPlayerExists).unwrap();
        assert_eq!(json, "\"FAILED_PLAYER_EXISTS\"");
    }
}
