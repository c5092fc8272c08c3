use serde::{Deserialize, Serialize};

use super::{Listed, de_null_string};

/// A translation key with its default-locale translation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    pub name: String,

    #[serde(default, deserialize_with = "de_null_string")]
    pub comment: String,

    #[serde(default, deserialize_with = "de_null_string")]
    pub translation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,

    #[serde(default)]
    pub missing: bool,

    #[serde(default)]
    pub approx: bool,

    #[serde(default)]
    pub outdated: bool,
}

impl Listed for Key {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Payload for `POST /keys`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewKey {
    pub name: String,

    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub translation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

impl NewKey {
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_key_name(name),
            ..Self::default()
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.comment.clear();
        self.translation.clear();
    }
}

/// Key names are lowercase and never contain whitespace.
pub fn normalize_key_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
