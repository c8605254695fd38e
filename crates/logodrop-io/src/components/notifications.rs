//! Toast notification container.
//!
//! [`NotificationArea`] renders the toast stack and provides a
//! [`ToastNotifier`] to its descendants via context. Components look it
//! up with `try_use_context`, so a page without a notification area
//! silently drops messages.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use logodrop_core::{
    Notification, NotificationKind, NotificationList, NotificationPhase, NotificationTimings,
    Notifier,
};
use web_time::Instant;

/// Signal-backed [`Notifier`] that feeds a [`NotificationArea`].
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    list: Signal<NotificationList>,
    timings: NotificationTimings,
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let mut list = self.list;
        let id = list.write().push(message, kind, Instant::now());
        let timings = self.timings;

        // Not tied to the caller's scope: the toast must still expire if
        // the widget that raised it unmounts.
        spawn_forever(async move {
            TimeoutFuture::new(millis(timings.display)).await;
            list.write().begin_fade(id);
            TimeoutFuture::new(millis(timings.fade)).await;
            list.write().remove(id);
        });
    }
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Props for the [`NotificationArea`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NotificationAreaProps {
    /// Page content that may raise notifications.
    children: Element,
}

/// Fixed-position toast stack wrapping the page content.
///
/// Toasts appear in insertion order, start fading after three seconds,
/// and disappear half a second later.
#[component]
pub fn NotificationArea(props: NotificationAreaProps) -> Element {
    let list = use_signal(NotificationList::new);
    use_context_provider(|| ToastNotifier {
        list,
        timings: NotificationTimings::default(),
    });

    let toasts: Vec<(Notification, &str, &str)> = list
        .read()
        .iter()
        .map(|toast| (toast.clone(), fading_class(toast.phase), toast_icon(toast.kind)))
        .collect();

    rsx! {
        {props.children}

        div { class: "logodrop-notifications", role: "status", aria_live: "polite",
            for (toast, fading, icon) in toasts {
                div {
                    key: "{toast.id}",
                    class: "logodrop-notification {toast.kind} {fading}",
                    span { aria_hidden: "true", "{icon}" }
                    span { "{toast.message}" }
                }
            }
        }
    }
}

const fn fading_class(phase: NotificationPhase) -> &'static str {
    match phase {
        NotificationPhase::Fading => "fading",
        NotificationPhase::Visible => "",
    }
}

const fn toast_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "ℹ",
        NotificationKind::Success => "✓",
        NotificationKind::Error => "!",
    }
}
