//! Seams for the side effects a finished submission triggers.
//!
//! The frontend plugs a toaster and the router in here; tests plug recorders.

use serde::{Deserialize, Serialize};

/// Target the form navigates to after a successful save
pub const CATALOG_ROOT: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }
}

/// User-visible notification channel
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Route change trigger
pub trait Navigator {
    fn navigate(&self, target: &str);
}
