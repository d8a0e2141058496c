//! The seam between the dispatcher and the platform notification API.

use crate::{Channel, Notification, PermissionStatus};

/// A platform notification API driven by [`crate::Dispatcher`].
///
/// Production implementations live in [`crate::sys`]; tests substitute
/// in-memory recorders.
pub trait NotificationBackend: Send + Sync {
    /// Whether this platform requires explicit channel registration before
    /// any notification may be shown.
    fn requires_channel(&self) -> bool;

    /// Register the delivery channel with the system.
    ///
    /// Re-registering an already-registered id has no effect; in particular
    /// the importance of the existing registration is kept.
    ///
    /// # Errors
    /// Returns a platform error message if registration fails.
    fn create_channel(&self, channel: &Channel) -> Result<(), String>;

    /// Current status of the post-notifications capability.
    fn permission_status(&self) -> PermissionStatus;

    /// Emit the notification on `channel`, keyed by `notification.id`.
    ///
    /// Emitting twice under the same key replaces the visible notification.
    /// Platforms without channel registries ignore `channel`.
    ///
    /// # Errors
    /// Returns a platform error message if the emission fails.
    fn notify(&self, channel: &Channel, notification: &Notification) -> Result<(), String>;
}
