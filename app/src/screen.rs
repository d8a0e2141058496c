use log::{debug, warn};

use notenote_notification::{Delivered, Dispatcher, Notification, NotifyError, ReentryAction};

use crate::{LaunchParams, Note, NoteStore};

/// Action identifier on the re-entry button.
const ACTION_SNOOZE: &str = "snooze";

/// Small icon for note notifications.
const NOTE_ICON: &str = "note";

/// Build the display payload for a note and post it.
///
/// The payload carries the note's title and content, the note icon, and a
/// snooze action that re-launches the application with the note's id.
///
/// # Errors
/// Propagates the dispatcher's [`NotifyError`]; in particular
/// [`NotifyError::PermissionDenied`] when posting is not allowed.
pub fn post_note(dispatcher: &Dispatcher, note: &Note) -> Result<Delivered, NotifyError> {
    let request = Notification::new(note.id)
        .title(note.title.as_str())
        .body(note.content.as_str())
        .icon(NOTE_ICON)
        .action(ReentryAction::new(
            ACTION_SNOOZE,
            format!("my action {}", note.id),
            note.id,
        ));
    dispatcher.post(&request)
}

/// State of the note editor screen.
///
/// Owned by the UI layer; the two event handlers ([`NoteScreen::on_load`]
/// and [`NoteScreen::submit`]) run serially on the UI context.
#[derive(Debug)]
pub struct NoteScreen {
    /// Title input field.
    pub title_input: String,
    /// Content input field.
    pub content_input: String,
    reentry_id: i32,
    transients: Vec<String>,
}

impl NoteScreen {
    /// A fresh screen with the default input text.
    pub fn new() -> Self {
        Self {
            title_input: "My Title".into(),
            content_input: "My Content".into(),
            reentry_id: -1,
            transients: Vec::new(),
        }
    }

    /// Screen-load handler.
    ///
    /// Records the re-entry id from the launch extras and posts every note
    /// already in the store (the application-start seeds).
    pub fn on_load(&mut self, store: &NoteStore, dispatcher: &Dispatcher, launch: &LaunchParams) {
        for (key, value) in launch.extras() {
            debug!("launch extra {key} = {value}");
        }
        self.reentry_id = launch.note_id().unwrap_or(-1);

        for note in store.notes() {
            self.handle_post(dispatcher, note);
        }
    }

    /// Submit handler for the editor form.
    ///
    /// Creates a note from the input fields with a random id, appends it to
    /// the store (triggering a re-render), and posts it.
    pub fn submit(&mut self, store: &mut NoteStore, dispatcher: &Dispatcher) {
        self.transients.push("Post notification".into());

        let note = Note::new(
            rand::random(),
            self.title_input.clone(),
            self.content_input.clone(),
            0,
        );
        store.push(note.clone());

        self.handle_post(dispatcher, &note);
    }

    fn handle_post(&mut self, dispatcher: &Dispatcher, note: &Note) {
        match post_note(dispatcher, note) {
            Ok(_) => {}
            Err(NotifyError::PermissionDenied) => {
                self.transients.push("No permission".into());
            }
            Err(NotifyError::Backend(msg)) => {
                warn!("notification backend error: {msg}");
            }
        }
    }

    /// Greeting line reflecting the re-entry id (`-1` on a plain launch).
    pub fn greeting(&self) -> String {
        format!("Hello {}!", self.reentry_id)
    }

    /// Take the pending transient messages for display.
    pub fn drain_transients(&mut self) -> Vec<String> {
        std::mem::take(&mut self.transients)
    }
}

impl Default for NoteScreen {
    fn default() -> Self {
        Self::new()
    }
}
