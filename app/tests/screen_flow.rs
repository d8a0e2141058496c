//! End-to-end screen scenarios against an in-memory notification backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use notenote_app::{LaunchParams, Note, NoteScreen, NoteStore, post_note};
use notenote_notification::backend::NotificationBackend;
use notenote_notification::{Channel, Dispatcher, Notification, PermissionStatus};

/// Models the platform shade: notifications keyed by id, last write wins.
struct ShadeBackend {
    permission: PermissionStatus,
    visible: Mutex<HashMap<i32, Notification>>,
}

impl ShadeBackend {
    fn granted() -> Arc<Self> {
        Arc::new(Self {
            permission: PermissionStatus::Granted,
            visible: Mutex::new(HashMap::new()),
        })
    }

    fn denied() -> Arc<Self> {
        Arc::new(Self {
            permission: PermissionStatus::Denied,
            visible: Mutex::new(HashMap::new()),
        })
    }
}

impl NotificationBackend for ShadeBackend {
    fn requires_channel(&self) -> bool {
        true
    }

    fn create_channel(&self, _channel: &Channel) -> Result<(), String> {
        Ok(())
    }

    fn permission_status(&self) -> PermissionStatus {
        self.permission
    }

    fn notify(&self, _channel: &Channel, notification: &Notification) -> Result<(), String> {
        self.visible
            .lock()
            .unwrap()
            .insert(notification.id, notification.clone());
        Ok(())
    }
}

fn dispatcher(backend: Arc<ShadeBackend>) -> Dispatcher {
    Dispatcher::new(backend, Channel::new("notenote.notes", "Notes"))
}

#[test]
fn submit_appends_note_and_posts_it() {
    let backend = ShadeBackend::granted();
    let dispatcher = dispatcher(backend.clone());
    let mut store = NoteStore::new();
    let mut screen = NoteScreen::new();

    screen.submit(&mut store, &dispatcher);

    assert_eq!(store.notes().len(), 1);
    let note = &store.notes()[0];
    assert_eq!(note.title, "My Title");
    assert_eq!(note.content, "My Content");

    let visible = backend.visible.lock().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[&note.id].title, "My Title");
    assert_eq!(screen.drain_transients(), vec!["Post notification"]);
}

#[test]
fn load_posts_every_seeded_note() {
    let backend = ShadeBackend::granted();
    let dispatcher = dispatcher(backend.clone());
    let store = NoteStore::seeded();
    let mut screen = NoteScreen::new();

    screen.on_load(&store, &dispatcher, &LaunchParams::new());

    let visible = backend.visible.lock().unwrap();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[&10].title, "My Title 0");
    assert_eq!(visible[&10].body, "My content 0");
    assert_eq!(visible[&11].title, "My Title 1");
}

#[test]
fn denied_submit_shows_no_permission_and_posts_nothing() {
    let backend = ShadeBackend::denied();
    let dispatcher = dispatcher(backend.clone());
    let mut store = NoteStore::new();
    let mut screen = NoteScreen::new();

    screen.submit(&mut store, &dispatcher);

    assert!(backend.visible.lock().unwrap().is_empty());
    // The note still lands in the list; only the posting is gated.
    assert_eq!(store.notes().len(), 1);
    assert_eq!(
        screen.drain_transients(),
        vec!["Post notification", "No permission"]
    );
}

#[test]
fn posted_note_carries_a_snooze_action_referencing_its_id() {
    let backend = ShadeBackend::granted();
    let dispatcher = dispatcher(backend.clone());
    let note = Note::new(10, "My Title 0", "My content 0", 10);

    let delivered = post_note(&dispatcher, &note).unwrap();
    assert_eq!(delivered.id, 10);

    let visible = backend.visible.lock().unwrap();
    let action = visible[&10].action.as_ref().unwrap();
    assert_eq!(action.action, "snooze");
    assert_eq!(action.label, "my action 10");
    assert_eq!(action.note_id, 10);
}

#[test]
fn reposting_a_note_replaces_the_visible_entry() {
    let backend = ShadeBackend::granted();
    let dispatcher = dispatcher(backend.clone());

    post_note(&dispatcher, &Note::new(10, "first", "", 0)).unwrap();
    post_note(&dispatcher, &Note::new(10, "second", "", 0)).unwrap();

    let visible = backend.visible.lock().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[&10].title, "second");
}
