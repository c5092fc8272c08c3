//! The screens of the admin tool: each one drives the gateway and the pure
//! controllers, and reports outcomes through the notifier.

use std::sync::Arc;

use crate::interact::{Authorization, Notifier, Permission};
use crate::remote::RemoteClient;

mod dashboard;
mod keys;
mod listing;
mod statistics;
mod translate;

pub use self::dashboard::DashboardView;
pub use self::keys::{DELETE_FILTERED_PROMPT, DELETE_KEY_PROMPT, KeysView, submit_key};
pub use self::listing::{KeySource, ListSource, Listing, TranslationSource};
pub use self::statistics::StatisticsView;
pub use self::translate::TranslateView;

/// Collaborators shared by every view.
#[derive(Clone)]
pub struct ViewContext {
    pub remote: RemoteClient,
    pub notifier: Arc<dyn Notifier>,
    pub auth: Arc<dyn Authorization>,
}

impl ViewContext {
    pub fn new(
        remote: RemoteClient,
        notifier: Arc<dyn Notifier>,
        auth: Arc<dyn Authorization>,
    ) -> Self {
        Self {
            remote,
            notifier,
            auth,
        }
    }

    pub fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    /// Checks a permission before a mutating call; a denial is reported and
    /// the call must not be issued.
    pub fn permitted(&self, permission: Permission) -> bool {
        if self.auth.has_permission(permission) {
            return true;
        }
        tracing::warn!(%permission, user = ?self.auth.principal(), "permission denied");
        self.notify(&format!("permission denied: {}", permission));
        false
    }
}

impl std::fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewContext")
            .field("remote", &self.remote)
            .field("user", &self.auth.principal())
            .finish_non_exhaustive()
    }
}
