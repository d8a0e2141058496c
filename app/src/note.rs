/// A user-authored note.
///
/// Immutable once created; lives in a [`crate::NoteStore`] for the screen's
/// lifetime and is gone when the process ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique per notification; caller-supplied or randomly generated.
    pub id: i32,
    /// Title line.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Creation ordinal.
    pub time: i64,
}

impl Note {
    /// Create a note.
    pub fn new(id: i32, title: impl Into<String>, content: impl Into<String>, time: i64) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            time,
        }
    }
}
