//! Console rendition of the note screen.
//!
//! Requests the post-notifications capability, seeds the store, posts the
//! seed notes, submits one note from the default input text, and renders the
//! list after every mutation. Pass an integer argument to simulate a
//! re-entry launch with that note id.

use std::sync::Arc;

use notenote_app::{EXTRA_NOTE_ID, LaunchParams, Note, NoteScreen, NoteStore, RenderDelegate};
use notenote_notification::{Channel, Dispatcher};
use notenote_permission::Permission;

struct ConsoleList;

impl RenderDelegate for ConsoleList {
    fn on_change(&self, notes: &[Note]) {
        println!("--- notes ---");
        for note in notes {
            println!("{:>11}  {}", note.id, note.title);
            println!("             {}", note.content);
        }
    }
}

fn main() {
    env_logger::init();

    match pollster::block_on(notenote_permission::request(Permission::Notifications)) {
        Ok(status) => println!("notification permission: {status:?}"),
        Err(err) => println!("notification permission request failed: {err}"),
    }

    let dispatcher = Dispatcher::platform(Channel::new("notenote.notes", "Notes"));
    if let Err(err) = dispatcher.ensure_channel() {
        println!("channel registration failed: {err}");
    }

    let launch = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .map_or_else(LaunchParams::new, |id| {
            LaunchParams::new().with_extra(EXTRA_NOTE_ID, id)
        });

    let mut store = NoteStore::seeded();
    store.set_delegate(Arc::new(ConsoleList));

    let mut screen = NoteScreen::new();
    screen.on_load(&store, &dispatcher, &launch);
    println!("{}", screen.greeting());
    for message in screen.drain_transients() {
        println!("[toast] {message}");
    }

    screen.submit(&mut store, &dispatcher);
    for message in screen.drain_transients() {
        println!("[toast] {message}");
    }
}
