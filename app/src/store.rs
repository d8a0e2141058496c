use std::fmt;
use std::sync::Arc;

use crate::Note;

/// Receives the full note list after every store mutation.
///
/// Render is a pure function of the current state; implementations redraw
/// from the slice they are handed and keep nothing else.
pub trait RenderDelegate {
    /// Called after the store contents changed.
    fn on_change(&self, notes: &[Note]);
}

/// Insertion-order-preserving list of notes, exclusively owned by the UI
/// layer and mutated only by the screen's event handlers.
pub struct NoteStore {
    notes: Vec<Note>,
    delegate: Option<Arc<dyn RenderDelegate>>,
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes)
            .field("delegate", &self.delegate.is_some())
            .finish()
    }
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            delegate: None,
        }
    }

    /// Create a store holding the application-start seed notes.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.notes.push(Note::new(10, "My Title 0", "My content 0", 10));
        store.notes.push(Note::new(11, "My Title 1", "My content 1", 11));
        store
    }

    /// Append a note and notify the render delegate.
    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
        if let Some(delegate) = &self.delegate {
            delegate.on_change(&self.notes);
        }
    }

    /// The notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Sets a delegate to be re-rendered on every mutation.
    pub fn set_delegate(&mut self, delegate: Arc<dyn RenderDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Clears the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
