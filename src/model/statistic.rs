use serde::{Deserialize, Serialize};

use super::de_null_string;

/// Aggregate translation counts for one application locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub locale: String,

    #[serde(default)]
    pub translated: u64,

    #[serde(default)]
    pub totranslate: u64,

    #[serde(default)]
    pub keytotal: u64,

    #[serde(default, rename = "englishLanguage", deserialize_with = "de_null_string")]
    pub english_language: String,
}
