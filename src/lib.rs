//! Administration of an i18n server: application locales, translation keys
//! in the default locale, and their translations into the other locales.

pub mod editor;
pub mod import;
pub mod interact;
pub mod list;
pub mod locale_set;
pub mod model;
pub mod remote;
pub mod session;
pub mod shell;
pub mod statistics;
pub mod store;
pub mod views;
