//! Desktop notification backend built on notify-rust.

use notify_rust::Notification as NrNotification;

use crate::backend::NotificationBackend;
use crate::{Channel, Notification, PermissionStatus};

/// Backend for Linux, Windows, and macOS desktops.
///
/// Desktop shells have no channel registry and no per-app posting grant;
/// the channel hooks are no-ops and the capability always reads granted.
#[derive(Debug, Default)]
pub struct DesktopBackend;

impl DesktopBackend {
    /// Create a desktop backend.
    pub fn new() -> Self {
        Self
    }
}

impl NotificationBackend for DesktopBackend {
    fn requires_channel(&self) -> bool {
        false
    }

    fn create_channel(&self, _channel: &Channel) -> Result<(), String> {
        Ok(())
    }

    fn permission_status(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn notify(&self, _channel: &Channel, notification: &Notification) -> Result<(), String> {
        let mut builder = NrNotification::new();
        builder
            .appname("NoteNote")
            .summary(&notification.title)
            .body(&notification.body)
            .id(notification.id as u32);

        if let Some(icon) = &notification.icon {
            builder.icon(icon);
        }

        // The shell delivers the chosen identifier back over D-Bus; the
        // re-launch itself is up to the embedding application.
        if let Some(action) = &notification.action {
            builder.action(&action.action, &action.label);
        }

        builder.show().map(|_| ()).map_err(|e| e.to_string())
    }
}
