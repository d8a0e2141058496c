//! Apple platform (iOS/macOS) permission implementation using swift-bridge.
//!
//! Backed by `UNUserNotificationCenter` on the Swift side.

use crate::{Permission, PermissionError, PermissionStatus};

#[swift_bridge::bridge]
mod ffi {
    // Shared enum bridged between Rust and Swift
    enum PermissionResult {
        NotDetermined,
        Restricted,
        Denied,
        Granted,
    }

    extern "Swift" {
        fn check_notification_permission() -> PermissionResult;
        fn request_notification_permission() -> PermissionResult;
    }
}

const fn status_from_ffi(result: ffi::PermissionResult) -> PermissionStatus {
    match result {
        ffi::PermissionResult::Granted => PermissionStatus::Granted,
        ffi::PermissionResult::Denied => PermissionStatus::Denied,
        ffi::PermissionResult::Restricted => PermissionStatus::Restricted,
        ffi::PermissionResult::NotDetermined => PermissionStatus::NotDetermined,
    }
}

pub(crate) async fn check(permission: Permission) -> PermissionStatus {
    let Permission::Notifications = permission;
    status_from_ffi(ffi::check_notification_permission())
}

pub(crate) async fn request(permission: Permission) -> Result<PermissionStatus, PermissionError> {
    let Permission::Notifications = permission;
    Ok(status_from_ffi(ffi::request_notification_permission()))
}
