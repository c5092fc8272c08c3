//! Data exchanged with the i18n server and the listing query shapes.

use serde::Deserialize;

mod config;
mod key;
mod locale;
mod page;
mod query;
mod statistic;
mod translation;

pub use self::config::{AdminConfig, DEFAULT_PAGE_SIZE, RemoteConfig};
pub use self::key::{Key, NewKey, normalize_key_name};
pub use self::locale::{Locale, difference};
pub use self::page::Page;
pub use self::query::{ListFilter, ListQuery};
pub use self::statistic::Statistic;
pub use self::translation::{Translation, TranslationValue};

/// Records that appear in a paginated listing and are addressed by name.
pub trait Listed: Clone {
    fn name(&self) -> &str;
}

/// The server sends `null` for unset text fields; treat it as empty.
pub(crate) fn de_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
