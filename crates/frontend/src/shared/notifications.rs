//! Browser-side implementations of the notification and navigation seams

use contracts::shared::notification::{Navigator, Notification, NotificationKind, Notifier};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use thaw::*;

/// Shows notifications through the thaw toaster
#[derive(Clone)]
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    /// Must be called inside `ToasterProvider`
    pub fn from_context() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }
}

fn intent(kind: NotificationKind) -> ToastIntent {
    match kind {
        NotificationKind::Success => ToastIntent::Success,
        NotificationKind::Error => ToastIntent::Error,
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        log::info!(
            "{:?} notification: {} {}",
            notification.kind,
            notification.title,
            notification.message
        );
        let options = ToastOptions::default()
            .with_position(ToastPosition::TopEnd)
            .with_intent(intent(notification.kind));
        let Notification { title, message, .. } = notification;
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        <ToastBody>{message}</ToastBody>
                    </Toast>
                }
            },
            options,
        );
    }
}

/// Adapts `leptos_router::hooks::use_navigate` to [`Navigator`]
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    fn navigate(&self, target: &str) {
        (self.navigate)(target, NavigateOptions::default());
    }
}
