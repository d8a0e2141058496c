//! Minimal dispatch demo.
use notenote_notification::{Channel, Dispatcher, Notification, ReentryAction};

fn main() {
    println!("Posting notification...");

    let dispatcher = Dispatcher::platform(Channel::new("notenote.notes", "Notes"));
    let request = Notification::new(10)
        .title("My Title 0")
        .body("My content 0")
        .action(ReentryAction::new("snooze", "my action 10", 10));

    match dispatcher.post(&request) {
        Ok(delivered) => println!("Notification {} posted.", delivered.id),
        Err(err) => println!("Not posted: {err}"),
    }
}
