use anyhow::Result;

use super::{Listing, TranslationSource, ViewContext};
use crate::interact::{Confirm, Permission};
use crate::list::Direction;
use crate::model::{Locale, Translation};
use crate::session::SessionState;

/// Translating keys from the default locale into the target locale.
pub struct TranslateView {
    ctx: ViewContext,
    session: SessionState,
    page_size: u64,
    default_locale: Option<Locale>,
    targets: Vec<Locale>,
    listing: Option<Listing<TranslationSource>>,
}

impl TranslateView {
    /// Loads the default locale, then the application locales, then picks
    /// the target (the remembered one, else the first non-default locale).
    /// Without a default locale or a second application locale there is
    /// nothing to translate into and no listing is loaded.
    pub async fn open(ctx: ViewContext, session: SessionState, page_size: u64) -> Result<Self> {
        let mut view = Self {
            ctx,
            session,
            page_size,
            default_locale: None,
            targets: Vec::new(),
            listing: None,
        };

        let Some(default_locale) = view.ctx.remote.get_default_locale().await? else {
            return Ok(view);
        };
        let application_locales = view.ctx.remote.list_available_locales().await?;
        view.default_locale = Some(default_locale.clone());
        if application_locales.len() < 2 {
            return Ok(view);
        }
        view.targets = application_locales
            .into_iter()
            .filter(|l| !l.same_locale(&default_locale))
            .collect();

        let remembered = view.session.load()?.cloned();
        let target = remembered
            .filter(|t| view.targets.iter().any(|l| l.same_locale(t)))
            .or_else(|| view.targets.first().cloned());
        if let Some(target) = target {
            view.switch_to(target).await?;
        }
        Ok(view)
    }

    pub fn no_target(&self) -> bool {
        self.listing.is_none()
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.default_locale.as_ref()
    }

    /// Locales that can be translated into.
    pub fn targets(&self) -> &[Locale] {
        &self.targets
    }

    pub fn target(&self) -> Option<&Locale> {
        self.session.target()
    }

    pub fn listing(&self) -> Option<&Listing<TranslationSource>> {
        self.listing.as_ref()
    }

    pub fn listing_mut(&mut self) -> Option<&mut Listing<TranslationSource>> {
        self.listing.as_mut()
    }

    pub fn current(&self) -> Option<&Translation> {
        self.listing.as_ref().and_then(|l| l.current().item())
    }

    /// Saves the edited translation; with `go_next` the selection moves
    /// forward once the save succeeded.
    pub async fn save(&mut self, go_next: bool) -> bool {
        if !self.ctx.permitted(Permission::TranslationWrite) {
            return false;
        }
        let Some(listing) = self.listing.as_mut() else {
            return false;
        };
        match listing.save().await {
            Ok(false) => false,
            Ok(true) => {
                self.ctx.notify("Save success");
                if go_next {
                    if let Err(err) = listing.navigate(Direction::Forward).await {
                        tracing::warn!(error = %err, "cannot move to next translation");
                        self.ctx.notify("Failed to load translations");
                    }
                }
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "translation update failed");
                self.ctx.notify("Failed to save");
                false
            }
        }
    }

    /// Empties the target text after confirmation.
    pub fn reset(&mut self, confirm: &dyn Confirm) -> bool {
        self.listing
            .as_mut()
            .is_some_and(|listing| listing.clear(confirm))
    }

    /// Loads the listing for the new target, then remembers it. A failed load
    /// keeps the previous target and listing.
    pub async fn set_target(&mut self, code: &str) -> Result<bool> {
        let Some(target) = self.targets.iter().find(|l| l.code == code).cloned() else {
            self.ctx
                .notify(&format!("{} is not a locale to translate into", code));
            return Ok(false);
        };
        self.switch_to(target).await?;
        Ok(true)
    }

    async fn switch_to(&mut self, target: Locale) -> Result<()> {
        let source = TranslationSource::new(self.ctx.remote.clone(), target.code.clone());
        let mut listing = Listing::new(source, self.page_size, true);
        listing.refresh().await?;
        self.session.set_target(Some(target.clone()))?;
        tracing::debug!(locale = %target.code, "translating");
        self.listing = Some(listing);
        Ok(())
    }
}
