//! Note screen state and event handlers.
//!
//! This crate holds the application side of NoteNote: the note list owned by
//! the UI layer, the editor screen state with its submit/load handlers, and
//! the launch parameters that thread a notification action back into the UI.
//! Rendering itself stays outside; the store exposes a delegate so any
//! toolkit can re-render as a pure function of the current state.

#![warn(missing_docs)]

mod launch;
mod note;
mod screen;
mod store;

pub use launch::LaunchParams;
pub use note::Note;
pub use notenote_notification::EXTRA_NOTE_ID;
pub use screen::{NoteScreen, post_note};
pub use store::{NoteStore, RenderDelegate};
