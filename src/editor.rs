//! The record being edited, with its `missing`/`outdated` flags recomputed on
//! every change.

use std::fmt;

use crate::interact::Confirm;
use crate::model::{Key, Listed, Translation};

pub const CLEAR_PROMPT: &str = "Clear form ?";

/// A listed record with an editable translation text.
///
/// `reconcile` holds the per-context flag rule; keys and translations do not
/// share one.
pub trait Editable: Listed {
    fn translation(&self) -> &str;
    fn translation_mut(&mut self) -> &mut String;
    fn comment_mut(&mut self) -> &mut String;
    fn is_outdated(&self) -> bool;
    fn is_missing(&self) -> bool;

    /// Copies the fields a listing may leave out from the authoritative copy.
    fn absorb(&mut self, fetched: &Self);

    /// Recomputes the flags after a change. `previous` is the translation
    /// text as it was before the change.
    fn reconcile(&mut self, previous: &str, fetched: &Self);

    /// What "clear form" wipes.
    fn clear_form(&mut self);
}

impl Editable for Key {
    fn translation(&self) -> &str {
        &self.translation
    }

    fn translation_mut(&mut self) -> &mut String {
        &mut self.translation
    }

    fn comment_mut(&mut self) -> &mut String {
        &mut self.comment
    }

    fn is_outdated(&self) -> bool {
        self.outdated
    }

    fn is_missing(&self) -> bool {
        self.missing
    }

    fn absorb(&mut self, fetched: &Self) {
        self.comment.clone_from(&fetched.comment);
        self.translation.clone_from(&fetched.translation);
    }

    fn reconcile(&mut self, previous: &str, fetched: &Self) {
        if self.translation != previous {
            self.outdated = true;
        }
        if self.translation == fetched.translation && !fetched.outdated {
            self.outdated = false;
        }
        self.missing = self.translation.is_empty();
    }

    fn clear_form(&mut self) {
        self.comment.clear();
        self.translation.clear();
    }
}

impl Editable for Translation {
    fn translation(&self) -> &str {
        &self.target.translation
    }

    fn translation_mut(&mut self) -> &mut String {
        &mut self.target.translation
    }

    fn comment_mut(&mut self) -> &mut String {
        &mut self.comment
    }

    fn is_outdated(&self) -> bool {
        self.target.outdated
    }

    fn is_missing(&self) -> bool {
        self.missing
    }

    fn absorb(&mut self, fetched: &Self) {
        self.comment.clone_from(&fetched.comment);
        self.source.translation.clone_from(&fetched.source.translation);
        self.target.translation.clone_from(&fetched.target.translation);
    }

    // Editing a stale translation counts as reviewing it; going back to the
    // stored text while the server still flags it restores the flag.
    fn reconcile(&mut self, previous: &str, fetched: &Self) {
        if self.target.translation != previous {
            self.target.outdated = false;
        }
        if self.target.translation == fetched.target.translation
            && fetched.target.outdated
            && !self.missing
        {
            self.target.outdated = true;
        }
        self.missing = self.target.translation.is_empty();
    }

    fn clear_form(&mut self) {
        self.target.translation.clear();
    }
}

/// Three-way indicator shown next to the edited record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemState {
    Fresh,
    Outdated,
    Missing,
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemState::Fresh => "fresh",
            ItemState::Outdated => "outdated",
            ItemState::Missing => "missing",
        })
    }
}

#[derive(Clone, Debug)]
struct Tracked<T> {
    item: T,
    fetched: T,
}

#[derive(Clone, Debug)]
pub struct CurrentItem<T> {
    tracked: Option<Tracked<T>>,
}

impl<T> Default for CurrentItem<T> {
    fn default() -> Self {
        Self { tracked: None }
    }
}

impl<T: Editable> CurrentItem<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts editing `listed`, refreshed from the server copy `fetched`.
    /// The flags are reconciled once right away.
    pub fn set_current(&mut self, mut listed: T, fetched: T) -> &T {
        listed.absorb(&fetched);
        let previous = listed.translation().to_string();
        listed.reconcile(&previous, &fetched);
        let tracked = self.tracked.insert(Tracked {
            item: listed,
            fetched,
        });
        &tracked.item
    }

    pub fn item(&self) -> Option<&T> {
        self.tracked.as_ref().map(|t| &t.item)
    }

    /// The server copy the edit started from.
    pub fn fetched(&self) -> Option<&T> {
        self.tracked.as_ref().map(|t| &t.fetched)
    }

    pub fn name(&self) -> Option<&str> {
        self.item().map(|i| i.name())
    }

    pub fn is_set(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn set_translation(&mut self, text: &str) -> Option<ItemState> {
        let tracked = self.tracked.as_mut()?;
        let previous = std::mem::replace(tracked.item.translation_mut(), text.to_string());
        tracked.item.reconcile(&previous, &tracked.fetched);
        self.state()
    }

    pub fn set_comment(&mut self, text: &str) -> Option<ItemState> {
        let tracked = self.tracked.as_mut()?;
        *tracked.item.comment_mut() = text.to_string();
        let previous = tracked.item.translation().to_string();
        tracked.item.reconcile(&previous, &tracked.fetched);
        self.state()
    }

    /// Wipes the form after confirmation. Returns whether anything was
    /// cleared.
    pub fn clear(&mut self, confirm: &dyn Confirm) -> bool {
        let Some(tracked) = self.tracked.as_mut() else {
            return false;
        };
        if !confirm.confirm(CLEAR_PROMPT) {
            return false;
        }
        let previous = tracked.item.translation().to_string();
        tracked.item.clear_form();
        tracked.item.reconcile(&previous, &tracked.fetched);
        true
    }

    pub fn state(&self) -> Option<ItemState> {
        let item = self.item()?;
        Some(if item.is_missing() {
            ItemState::Missing
        } else if item.is_outdated() {
            ItemState::Outdated
        } else {
            ItemState::Fresh
        })
    }

    pub fn is_modified(&self) -> bool {
        self.tracked
            .as_ref()
            .is_some_and(|t| t.item.translation() != t.fetched.translation())
    }

    pub fn unset(&mut self) -> Option<T> {
        self.tracked.take().map(|t| t.item)
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
