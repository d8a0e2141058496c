//! Re-entry handling: a launch extra threads the acted-on note id back in.

use std::sync::Arc;

use notenote_app::{EXTRA_NOTE_ID, LaunchParams, NoteScreen, NoteStore};
use notenote_notification::backend::NotificationBackend;
use notenote_notification::{Channel, Dispatcher, Notification, PermissionStatus};

struct QuietBackend;

impl NotificationBackend for QuietBackend {
    fn requires_channel(&self) -> bool {
        false
    }
    fn create_channel(&self, _channel: &Channel) -> Result<(), String> {
        Ok(())
    }
    fn permission_status(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }
    fn notify(&self, _channel: &Channel, _notification: &Notification) -> Result<(), String> {
        Ok(())
    }
}

fn load(launch: &LaunchParams) -> NoteScreen {
    let dispatcher = Dispatcher::new(Arc::new(QuietBackend), Channel::new("notenote.notes", "Notes"));
    let store = NoteStore::new();
    let mut screen = NoteScreen::new();
    screen.on_load(&store, &dispatcher, launch);
    screen
}

#[test]
fn reentry_extra_shows_up_in_the_greeting() {
    let screen = load(&LaunchParams::new().with_extra(EXTRA_NOTE_ID, 10));
    assert_eq!(screen.greeting(), "Hello 10!");
}

#[test]
fn plain_launch_greets_with_the_sentinel() {
    let screen = load(&LaunchParams::new());
    assert_eq!(screen.greeting(), "Hello -1!");
}
