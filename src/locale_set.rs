//! The application locale set and everything else the server knows, kept as a
//! disjoint partition.

use crate::model::{Locale, difference};

/// What a removal did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Removal {
    /// Locales that actually left the active set, in selection order.
    pub removed: Vec<Locale>,
    /// The default locale was among them and is now unset.
    pub default_cleared: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LocaleSets {
    active: Vec<Locale>,
    available: Vec<Locale>,
    default: Option<Locale>,
}

impl LocaleSets {
    /// `all` is every locale the server knows; the application locales are
    /// taken out of it. A default that is not an application locale is
    /// ignored.
    pub fn from_server(active: Vec<Locale>, all: &[Locale], default: Option<&Locale>) -> Self {
        let available = difference(all, &active);
        let default = default.and_then(|d| active.iter().find(|l| l.same_locale(d)).cloned());
        Self {
            active,
            available,
            default,
        }
    }

    pub fn active(&self) -> &[Locale] {
        &self.active
    }

    pub fn available(&self) -> &[Locale] {
        &self.available
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.default.as_ref()
    }

    pub fn is_active(&self, code: &str) -> bool {
        self.active.iter().any(|l| l.code == code)
    }

    pub fn find(&self, code: &str) -> Option<&Locale> {
        self.active
            .iter()
            .chain(self.available.iter())
            .find(|l| l.code == code)
    }

    /// Moves the selected locales into the active set. Returns the ones that
    /// were added; already active or unknown locales are skipped.
    pub fn add(&mut self, selected: &[Locale]) -> Vec<Locale> {
        let mut added = Vec::new();
        for wanted in selected {
            if let Some(pos) = self.available.iter().position(|l| l.same_locale(wanted)) {
                let locale = self.available.remove(pos);
                self.active.push(locale.clone());
                added.push(locale);
            }
        }
        added
    }

    /// Moves the selected locales back to the available set, unsetting the
    /// default when it goes with them.
    pub fn remove(&mut self, selected: &[Locale]) -> Removal {
        let mut removal = Removal::default();
        for wanted in selected {
            if let Some(pos) = self.active.iter().position(|l| l.same_locale(wanted)) {
                let locale = self.active.remove(pos);
                self.available.push(locale.clone());
                removal.removed.push(locale);
            }
        }

        if self
            .default
            .as_ref()
            .is_some_and(|d| !self.active.iter().any(|l| l.same_locale(d)))
        {
            self.default = None;
            removal.default_cleared = true;
        }
        removal
    }

    /// Only an application locale can become the default.
    pub fn set_default(&mut self, code: &str) -> Option<&Locale> {
        let locale = self.active.iter().find(|l| l.code == code)?.clone();
        Some(&*self.default.insert(locale))
    }

    /// Translating needs a default locale and something else to translate
    /// into.
    pub fn allow_translate(&self) -> bool {
        self.active.len() > 1 && self.default.is_some()
    }

    /// Application locales other than the default.
    pub fn targets(&self) -> Vec<Locale> {
        match &self.default {
            Some(d) => self
                .active
                .iter()
                .filter(|l| !l.same_locale(d))
                .cloned()
                .collect(),
            None => self.active.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/locale_set_tests.rs"]
mod tests;
