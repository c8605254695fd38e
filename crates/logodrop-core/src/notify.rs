//! Short-lived status notifications.
//!
//! [`NotificationList`] is the pure model behind the on-screen toast
//! stack: entries are appended in insertion order, switch to the
//! [`NotificationPhase::Fading`] phase after
//! [`NotificationTimings::display`], and are removed after a further
//! [`NotificationTimings::fade`]. The timers themselves live in the
//! browser layer; this module only tracks the state transitions.

use std::fmt;
use std::time::Duration;

use web_time::Instant;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Neutral progress message.
    #[default]
    Info,
    /// The operation completed.
    Success,
    /// The operation failed or was rejected.
    Error,
}

impl NotificationKind {
    /// Lowercase name, used as a CSS modifier class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can show a transient message to the user.
///
/// Implementations must not fail: a missing container simply drops the
/// message. `Option<N>` implements this trait so callers can pass an
/// absent notifier without branching.
pub trait Notifier {
    /// Display `message` with the given `kind`.
    fn notify(&self, message: &str, kind: NotificationKind);
}

impl<N: Notifier> Notifier for Option<N> {
    fn notify(&self, message: &str, kind: NotificationKind) {
        if let Some(inner) = self {
            inner.notify(message, kind);
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}

/// How long a notification stays fully visible, and how long it fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Time from insertion until the fade starts.
    pub display: Duration,
    /// Time from fade start until removal.
    pub fade: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(3000),
            fade: Duration::from_millis(500),
        }
    }
}

/// Identifier of a notification within its [`NotificationList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of a displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Fully visible.
    Visible,
    /// Fading out; removed when the fade completes.
    Fading,
}

/// One displayed message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Stable identifier for timer callbacks and keyed rendering.
    pub id: NotificationId,
    /// Text shown to the user.
    pub message: String,
    /// Visual category.
    pub kind: NotificationKind,
    /// When the notification was inserted.
    pub created_at: Instant,
    /// Current lifecycle phase.
    pub phase: NotificationPhase,
}

/// Ordered stack of currently displayed notifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationList {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a visible notification and return its id.
    ///
    /// No deduplication: identical messages produce separate entries.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            created_at: now,
            phase: NotificationPhase::Visible,
        });
        id
    }

    /// Move a notification into the fading phase.
    ///
    /// Returns `false` if `id` is no longer present.
    pub fn begin_fade(&mut self, id: NotificationId) -> bool {
        self.entries
            .iter_mut()
            .find(|n| n.id == id)
            .is_some_and(|n| {
                n.phase = NotificationPhase::Fading;
                true
            })
    }

    /// Remove a notification. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Notifications in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of displayed notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
