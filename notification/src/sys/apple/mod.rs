//! iOS notification backend using swift-bridge.
//!
//! Backed by `UNUserNotificationCenter` on the Swift side; requests are
//! delivered immediately with the note id as the request identifier, which
//! gives the keyed replace semantics for free.

use crate::backend::NotificationBackend;
use crate::{Channel, Notification, PermissionStatus};

#[swift_bridge::bridge]
mod ffi {
    extern "Swift" {
        fn post_notification(id: i32, title: &str, body: &str, action_label: &str, note_id: i32);
        fn notification_permission_granted() -> bool;
    }
}

/// Backend for iOS.
#[derive(Debug, Default)]
pub struct AppleBackend;

impl AppleBackend {
    /// Create an iOS backend.
    pub fn new() -> Self {
        Self
    }
}

impl NotificationBackend for AppleBackend {
    fn requires_channel(&self) -> bool {
        // Categories on iOS are optional; nothing must be registered before
        // the first posting.
        false
    }

    fn create_channel(&self, _channel: &Channel) -> Result<(), String> {
        Ok(())
    }

    fn permission_status(&self) -> PermissionStatus {
        if ffi::notification_permission_granted() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn notify(&self, _channel: &Channel, notification: &Notification) -> Result<(), String> {
        let (label, note_id) = notification
            .action
            .as_ref()
            .map_or(("", notification.id), |a| (a.label.as_str(), a.note_id));

        ffi::post_notification(
            notification.id,
            &notification.title,
            &notification.body,
            label,
            note_id,
        );
        Ok(())
    }
}
