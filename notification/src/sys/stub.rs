//! Compile-time stub for targets without a notification surface.

use crate::backend::NotificationBackend;
use crate::{Channel, Notification, PermissionStatus};

/// Backend that rejects every posting.
#[derive(Debug, Default)]
pub struct StubBackend;

impl NotificationBackend for StubBackend {
    fn requires_channel(&self) -> bool {
        false
    }

    fn create_channel(&self, _channel: &Channel) -> Result<(), String> {
        Ok(())
    }

    fn permission_status(&self) -> PermissionStatus {
        PermissionStatus::NotDetermined
    }

    fn notify(&self, _channel: &Channel, _notification: &Notification) -> Result<(), String> {
        Err("notifications not supported on this platform".into())
    }
}
