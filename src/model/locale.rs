use serde::{Deserialize, Serialize};

use super::de_null_string;

/// A locale as exposed by the i18n server.
///
/// Two locales are the same locale when their codes match; the display
/// fields are informational only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub code: String,

    #[serde(default, deserialize_with = "de_null_string")]
    pub language: String,

    #[serde(default, deserialize_with = "de_null_string")]
    pub english_language: String,
}

impl Locale {
    pub fn new(code: impl Into<String>, english_language: impl Into<String>) -> Self {
        let english_language = english_language.into();
        Self {
            code: code.into(),
            language: english_language.clone(),
            english_language,
        }
    }

    pub fn same_locale(&self, other: &Locale) -> bool {
        self.code == other.code
    }

    /// Label used in listings: `fr (French)`.
    pub fn label(&self) -> String {
        if self.english_language.is_empty() {
            self.code.clone()
        } else {
            format!("{} ({})", self.code, self.english_language)
        }
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.same_locale(other)
    }
}

impl Eq for Locale {}

/// Locales of `one` that are not in `two`, order preserved.
pub fn difference(one: &[Locale], two: &[Locale]) -> Vec<Locale> {
    one.iter()
        .filter(|l| !two.iter().any(|o| o.same_locale(l)))
        .cloned()
        .collect()
}
