//! Cross-platform local notification dispatch.
//!
//! This crate turns small display requests into operating-system
//! notifications across Android, iOS, macOS, Windows, and Linux. It owns the
//! delivery channel lifecycle, gates every posting on the post-notifications
//! capability, and keys each posting by caller-supplied id so that reposting
//! replaces instead of duplicating.

#![warn(missing_docs)]

/// The platform backend seam driven by [`Dispatcher`].
pub mod backend;
mod dispatcher;
/// Platform-specific implementations.
pub mod sys;

pub use backend::NotificationBackend;
pub use dispatcher::Dispatcher;
pub use notenote_permission::{Permission, PermissionStatus};

/// Launch-extra key under which a re-entry action carries the note id.
pub const EXTRA_NOTE_ID: &str = "notenote.extra.NOTE_ID";

/// Importance of a delivery channel, fixed at registration time.
///
/// Platforms that register channels forbid changing the importance of an
/// already-registered channel; re-registration with the same id is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    /// Lowest importance; no sound or visual interruption.
    Min,
    /// Low importance; shown without sound.
    Low,
    /// Default importance; shown with sound.
    #[default]
    Default,
    /// High importance; may heads-up over other UI.
    High,
}

/// A delivery channel grouping notifications under one importance level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Stable identifier the platform keys the registration by.
    pub id: String,
    /// Human-readable name shown in system settings.
    pub name: String,
    /// Importance level, immutable after first registration.
    pub importance: Importance,
}

impl Channel {
    /// Create a channel with default importance.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            importance: Importance::Default,
        }
    }

    /// Set the importance level. Only honored at first registration.
    #[must_use]
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }
}

/// An action button that re-launches the host application.
///
/// Tapping the action starts the application with [`EXTRA_NOTE_ID`] set to
/// `note_id`, threading the acted-on note back into the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReentryAction {
    /// Platform action identifier (e.g. `"snooze"`).
    pub action: String,
    /// Text displayed on the button.
    pub label: String,
    /// Note id handed back as a launch extra.
    pub note_id: i32,
}

impl ReentryAction {
    /// Create a re-entry action.
    pub fn new(action: impl Into<String>, label: impl Into<String>, note_id: i32) -> Self {
        Self {
            action: action.into(),
            label: label.into(),
            note_id,
        }
    }
}

/// A display request for one notification.
///
/// Posting two requests with the same `id` replaces the visible notification
/// rather than producing two; the platform provides those semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Key the platform files the posting under.
    pub id: i32,
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Small icon name or path, if any.
    pub icon: Option<String>,
    /// Optional re-entry action button.
    pub action: Option<ReentryAction>,
}

impl Notification {
    /// Create an empty request keyed by `id`.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            title: String::new(),
            body: String::new(),
            icon: None,
            action: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the small icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Attach a re-entry action button.
    #[must_use]
    pub fn action(mut self, action: ReentryAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Receipt for a successfully dispatched notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivered {
    /// The id the platform filed the notification under.
    pub id: i32,
}

/// Errors that can occur when dispatching a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The user has not granted the post-notifications capability.
    #[error("notification permission denied")]
    PermissionDenied,
    /// The underlying platform rejected the operation.
    #[error("platform error: {0}")]
    Backend(String),
}
