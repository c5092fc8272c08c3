//! Capabilities the views borrow from their host: user-visible
//! notifications, confirmation prompts and the operator's permissions.

mod authz;
mod confirm;
mod notify;

pub use self::authz::{Authorization, Grants, Permission};
pub use self::confirm::{Confirm, StaticConfirm, StdinConfirm};
pub use self::notify::{ConsoleNotifier, Notification, Notifier, RecordingNotifier};
