use anyhow::Result;

use super::ViewContext;
use crate::interact::Permission;
use crate::locale_set::{LocaleSets, Removal};
use crate::model::Locale;
use crate::session::SessionState;

/// Managing which locales the application uses.
pub struct DashboardView {
    ctx: ViewContext,
    session: SessionState,
    sets: LocaleSets,
    hidden: bool,
}

impl DashboardView {
    /// Application locales, then every known locale, then the default
    /// locale. The view is hidden when the default locale cannot be read.
    pub async fn open(ctx: ViewContext, session: SessionState) -> Result<Self> {
        let active = ctx.remote.list_available_locales().await?;
        let all = ctx.remote.list_locales().await?;
        let (default, hidden) = match ctx.remote.get_default_locale().await {
            Ok(default) => (default, false),
            Err(err) => {
                tracing::warn!(error = %err, "default locale unavailable");
                (None, true)
            }
        };
        Ok(Self {
            ctx,
            session,
            sets: LocaleSets::from_server(active, &all, default.as_ref()),
            hidden,
        })
    }

    pub fn sets(&self) -> &LocaleSets {
        &self.sets
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn allow_translate(&self) -> bool {
        self.sets.allow_translate()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Adds locales to the application and stores the whole set in one
    /// request. Nothing changes locally when the request fails.
    pub async fn add(&mut self, codes: &[String]) -> bool {
        if !self.ctx.permitted(Permission::LocaleWrite) {
            return false;
        }
        let selected = lookup(self.sets.available(), codes);
        let mut next = self.sets.clone();
        let added = next.add(&selected);
        if added.is_empty() {
            self.ctx.notify("No locale to add");
            return false;
        }

        match self.ctx.remote.replace_available_locales(next.active()).await {
            Ok(()) => {
                self.sets = next;
                let codes: Vec<_> = added.iter().map(|l| l.code.as_str()).collect();
                self.ctx.notify(&format!("Locale added : {}", codes.join(", ")));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "application locales update failed");
                self.ctx.notify("Failed to update application locales");
                false
            }
        }
    }

    /// Removes locales from the application: one delete request per locale,
    /// each reported on its own. The target selection is cleared.
    pub async fn remove(&mut self, codes: &[String]) -> Removal {
        if !self.ctx.permitted(Permission::LocaleDelete) {
            return Removal::default();
        }
        let selected = lookup(self.sets.active(), codes);
        let removal = self.sets.remove(&selected);
        if removal.removed.is_empty() {
            self.ctx.notify("No locale to remove");
            return removal;
        }
        if removal.default_cleared {
            tracing::info!("default locale removed from the application");
        }
        if let Err(err) = self.session.clear_target() {
            tracing::warn!("cannot clear target locale: {:#}", err);
        }

        for locale in &removal.removed {
            match self.ctx.remote.delete_available_locale(&locale.code).await {
                Ok(()) => self.ctx.notify(&format!("Locale deleted : {}", locale.code)),
                Err(err) => {
                    tracing::warn!(locale = %locale.code, error = %err, "locale deletion failed");
                    self.ctx.notify("Failed delete locale");
                }
            }
        }
        removal
    }

    /// Makes an application locale the default.
    pub async fn update_default(&mut self, code: &str) -> bool {
        if !self.ctx.permitted(Permission::LocaleWrite) {
            return false;
        }
        let Some(locale) = self.sets.active().iter().find(|l| l.code == code).cloned() else {
            self.ctx
                .notify(&format!("{} is not an application locale", code));
            return false;
        };
        match self.ctx.remote.set_default_locale(&locale).await {
            Ok(()) => {
                self.sets.set_default(code);
                self.ctx
                    .notify(&format!("Default locale is now {}", locale.label()));
                true
            }
            Err(err) => {
                tracing::warn!(locale = %code, error = %err, "default locale update failed");
                self.ctx.notify("Failed to update default locale");
                false
            }
        }
    }
}

fn lookup(pool: &[Locale], codes: &[String]) -> Vec<Locale> {
    codes
        .iter()
        .filter_map(|code| pool.iter().find(|l| l.code == code.trim()).cloned())
        .collect()
}
