use anyhow::Result;

use super::{KeySource, Listing, ViewContext};
use crate::import::ImportQueue;
use crate::interact::{Confirm, Permission};
use crate::model::{Key, Locale, NewKey, normalize_key_name};
use crate::remote::{ApiError, ApiResult};
use crate::session::SessionState;

pub const DELETE_KEY_PROMPT: &str = "Delete Key ?";
pub const DELETE_FILTERED_PROMPT: &str = "Are you sure you want to delete all the currently \
     filtered keys ? Only the filtered keys will be deleted. This action is irreversible.";

/// Key management in the default locale.
pub struct KeysView {
    ctx: ViewContext,
    session: SessionState,
    default_locale: Option<Locale>,
    application_locales: Vec<Locale>,
    listing: Listing<KeySource>,
    imports: ImportQueue,
}

impl KeysView {
    /// Loads the default locale, then the application locales, then the
    /// first page of keys.
    pub async fn open(ctx: ViewContext, session: SessionState, page_size: u64) -> Result<Self> {
        let default_locale = ctx.remote.get_default_locale().await?;
        let application_locales = ctx.remote.list_available_locales().await?;
        let listing = Listing::new(KeySource::new(ctx.remote.clone()), page_size, false);

        let mut view = Self {
            ctx,
            session,
            default_locale,
            application_locales,
            listing,
            imports: ImportQueue::new(),
        };
        view.listing.refresh().await?;
        Ok(view)
    }

    pub fn listing(&self) -> &Listing<KeySource> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<KeySource> {
        &mut self.listing
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.default_locale.as_ref()
    }

    pub fn application_locales(&self) -> &[Locale] {
        &self.application_locales
    }

    /// New keys are authored in the default locale; without one they cannot
    /// be created.
    pub fn can_add_keys(&self) -> bool {
        self.default_locale.is_some()
    }

    pub fn allow_translate(&self) -> bool {
        self.default_locale.is_some() && self.application_locales.len() > 1
    }

    pub fn current(&self) -> Option<&Key> {
        self.listing.current().item()
    }

    pub async fn save(&mut self) -> bool {
        if !self.ctx.permitted(Permission::KeyWrite) {
            return false;
        }
        match self.listing.save().await {
            Ok(saved) => {
                if saved {
                    self.ctx.notify("key saved");
                }
                saved
            }
            Err(err) => {
                tracing::warn!(error = %err, "key update failed");
                self.ctx.notify("key failed to save");
                false
            }
        }
    }

    /// Creates a key in the default locale and appends it to the loaded page.
    pub async fn submit_key(&mut self, key: NewKey) -> Option<Key> {
        let created = submit_key(&self.ctx, self.default_locale.as_ref(), key).await?;
        self.listing.list_mut().push_item(created.clone());
        Some(created)
    }

    /// Deletes the selected key after confirmation.
    pub async fn delete_current(&mut self, confirm: &dyn Confirm) -> bool {
        let Some(name) = self.listing.current().name().map(str::to_string) else {
            return false;
        };
        if !self.ctx.permitted(Permission::KeyDelete) || !confirm.confirm(DELETE_KEY_PROMPT) {
            return false;
        }
        match self.ctx.remote.delete_key(&name).await {
            Ok(()) => {
                self.listing.list_mut().remove_item(&name);
                self.listing.current_mut().unset();
                self.ctx.notify(&format!("Key deleted : {}", name));
                true
            }
            Err(err) => {
                tracing::warn!(key = %name, error = %err, "key deletion failed");
                self.ctx.notify("Failed to delete key");
                false
            }
        }
    }

    /// Deletes every key matching the current filters, then goes back to
    /// the first page.
    pub async fn delete_filtered(&mut self, confirm: &dyn Confirm) -> bool {
        if self.listing.list().items().is_empty() {
            self.ctx.notify("There is no filtered keys.");
            return false;
        }
        if !self.ctx.permitted(Permission::KeyDelete) || !confirm.confirm(DELETE_FILTERED_PROMPT) {
            return false;
        }
        let filter = self.listing.list().filter().clone();
        match self.ctx.remote.delete_keys(&filter).await {
            Ok(summary) => {
                self.ctx.notify(&summary);
                let query = self.listing.list_mut().query_after_bulk_delete();
                let reloaded = self.listing.load(query).await;
                self.report(reloaded, "Failed to load keys");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "bulk key deletion failed");
                let message = match err.status() {
                    Some(status) => status.to_string(),
                    None => err.to_string(),
                };
                self.ctx.notify(&message);
                false
            }
        }
    }

    pub fn clear(&mut self, confirm: &dyn Confirm) -> bool {
        self.listing.clear(confirm)
    }

    /// Remembers `target` as the locale to translate into. `false` when it
    /// is the default locale.
    pub fn choose_target(&mut self, target: &Locale) -> Result<bool> {
        self.session.set_target(Some(target.clone()))?;
        if let Some(default) = self
            .default_locale
            .as_ref()
            .filter(|d| d.same_locale(target))
        {
            self.ctx
                .notify(&format!("default locale is already {}", default.english_language));
            return Ok(false);
        }
        Ok(true)
    }

    pub fn imports(&self) -> &ImportQueue {
        &self.imports
    }

    pub fn imports_mut(&mut self) -> &mut ImportQueue {
        &mut self.imports
    }

    /// Uploads the queued files and reloads the keys on success.
    pub async fn import(&mut self) -> bool {
        if !self.ctx.permitted(Permission::KeyWrite) {
            return false;
        }
        match self.imports.process(&self.ctx.remote).await {
            Ok(Some(report)) => {
                self.ctx.notify(&report.summary);
                let reloaded = self.listing.refresh().await;
                self.report(reloaded, "Failed to load keys");
                true
            }
            Ok(None) => {
                self.ctx.notify("No file to import");
                false
            }
            Err(err) => {
                tracing::warn!("import failed: {:#}", err);
                self.ctx.notify("Failed to import files");
                false
            }
        }
    }

    pub async fn export(&self) -> ApiResult<Vec<u8>> {
        self.ctx.remote.export_keys().await
    }

    fn report(&self, result: ApiResult<()>, failure: &str) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "{}", failure);
            self.ctx.notify(failure);
        }
    }
}

/// Creates a key authored in `default_locale`, reporting the outcome.
pub async fn submit_key(
    ctx: &ViewContext,
    default_locale: Option<&Locale>,
    mut key: NewKey,
) -> Option<Key> {
    if !ctx.permitted(Permission::KeyWrite) {
        return None;
    }
    key.name = normalize_key_name(&key.name);
    if key.name.is_empty() {
        ctx.notify("Key name is required");
        return None;
    }
    key.default_locale = default_locale.map(|l| l.code.clone());

    match ctx.remote.create_key(&key).await {
        Ok(created) => {
            ctx.notify("new key saved");
            Some(created)
        }
        Err(err) => {
            tracing::warn!(key = %key.name, error = %err, "key creation failed");
            match err {
                ApiError::Validation(message) => ctx.notify(&message),
                ApiError::Conflict(_) => ctx.notify("Failed to save : key name already exist."),
                _ => ctx.notify("Failed to save key"),
            }
            None
        }
    }
}
