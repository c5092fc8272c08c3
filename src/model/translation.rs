use serde::{Deserialize, Serialize};

use super::{Listed, de_null_string};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationValue {
    #[serde(default, deserialize_with = "de_null_string")]
    pub locale: String,

    #[serde(default, deserialize_with = "de_null_string")]
    pub translation: String,

    #[serde(default)]
    pub outdated: bool,

    #[serde(default)]
    pub approx: bool,
}

/// A key seen from a non-default locale: the default-locale text as `source`
/// and the text being edited as `target`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub name: String,

    #[serde(default, deserialize_with = "de_null_string")]
    pub comment: String,

    #[serde(default, deserialize_with = "de_null_or_default")]
    pub source: TranslationValue,

    #[serde(default, deserialize_with = "de_null_or_default")]
    pub target: TranslationValue,

    #[serde(default)]
    pub missing: bool,
}

impl Listed for Translation {
    fn name(&self) -> &str {
        &self.name
    }
}

fn de_null_or_default<'de, D>(deserializer: D) -> Result<TranslationValue, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<TranslationValue> = Option::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}
