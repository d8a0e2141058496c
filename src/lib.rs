//! # NoteNote
//!
//! Turn user-authored notes into local operating-system notifications.
//!
//! NoteNote is a small workspace of capability crates: a permission crate for
//! the "may post notifications" capability, a notification crate that owns
//! channel registration and dispatch, and an app crate holding the note list,
//! screen state, and re-entry handling.
//!
//! ## Features
//!
//! The façade is modular; enable only what you need.
//!
//! - `permission`: Check and request the post-notifications capability.
//! - `notification`: Channel registration, payload building, and dispatch.
//! - `app`: Note store, screen event handlers, and launch/re-entry state.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! notenote = { version = "0.1", features = ["notification"] }
//! ```
//!
//! ```ignore
//! use notenote::notification::{Channel, Dispatcher, Notification};
//!
//! fn post_reminder(dispatcher: &Dispatcher) {
//!     let reminder = Notification::new(42)
//!         .title("Water the plants")
//!         .body("They are looking thirsty");
//!     if dispatcher.post(&reminder).is_err() {
//!         println!("no permission to post notifications");
//!     }
//! }
//! ```

#[cfg(feature = "app")]
pub use notenote_app as app;

#[cfg(feature = "notification")]
pub use notenote_notification as notification;

#[cfg(feature = "permission")]
pub use notenote_permission as permission;
