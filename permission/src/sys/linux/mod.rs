//! Linux permission implementation.
//!
//! Desktop notification daemons (via the org.freedesktop.Notifications
//! D-Bus interface) accept postings from any session application; there is
//! no per-app grant to check or request outside of sandbox portals.

use crate::{Permission, PermissionError, PermissionStatus};

pub(crate) async fn check(_permission: Permission) -> PermissionStatus {
    PermissionStatus::Granted
}

pub(crate) async fn request(_permission: Permission) -> Result<PermissionStatus, PermissionError> {
    // No runtime permission prompts on traditional Linux
    Ok(PermissionStatus::Granted)
}
