//! Windows permission implementation.
//!
//! Toast posting is implicit for registered apps; per-app blocking happens
//! in system settings after the fact, invisible to this API.

use crate::{Permission, PermissionError, PermissionStatus};

pub(crate) async fn check(_permission: Permission) -> PermissionStatus {
    PermissionStatus::Granted
}

pub(crate) async fn request(_permission: Permission) -> Result<PermissionStatus, PermissionError> {
    Ok(PermissionStatus::Granted)
}
