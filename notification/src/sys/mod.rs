//! Platform-specific notification backends.

#[cfg(not(target_os = "android"))]
use std::sync::Arc;

#[cfg(not(target_os = "android"))]
use crate::backend::NotificationBackend;

#[cfg(target_os = "android")]
pub mod android;
#[cfg(target_os = "android")]
pub use android::AndroidBackend;

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub mod desktop;
#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub use desktop::DesktopBackend;

#[cfg(target_os = "ios")]
pub mod apple;
#[cfg(target_os = "ios")]
pub use apple::AppleBackend;

#[cfg(not(any(
    target_os = "linux",
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "android"
)))]
mod stub;

/// The notification backend for the current target.
///
/// Android has no ambient backend: notifications there need a live JVM
/// context, so construct [`android::AndroidBackend`] explicitly instead.
#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub fn platform_backend() -> Arc<dyn NotificationBackend> {
    Arc::new(DesktopBackend::new())
}

/// The notification backend for the current target.
#[cfg(target_os = "ios")]
pub fn platform_backend() -> Arc<dyn NotificationBackend> {
    Arc::new(AppleBackend::new())
}

/// Compile-time stub for targets without a notification surface.
#[cfg(not(any(
    target_os = "linux",
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "android"
)))]
pub fn platform_backend() -> Arc<dyn NotificationBackend> {
    Arc::new(stub::StubBackend)
}
