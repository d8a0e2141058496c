use notenote_notification::EXTRA_NOTE_ID;

/// Integer extras the process was (re)launched with.
///
/// When the user taps a notification action the application is started again
/// with [`EXTRA_NOTE_ID`] set to the acted-on note's id; this is a
/// single-shot read at startup, not a state machine.
#[derive(Debug, Clone, Default)]
pub struct LaunchParams {
    extras: Vec<(String, i32)>,
}

impl LaunchParams {
    /// A plain launch with no extras.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an integer extra.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: i32) -> Self {
        self.extras.push((key.into(), value));
        self
    }

    /// All extras, in the order the platform handed them over.
    pub fn extras(&self) -> &[(String, i32)] {
        &self.extras
    }

    /// The note id carried by a re-entry launch, if any.
    pub fn note_id(&self) -> Option<i32> {
        self.extras
            .iter()
            .find(|(key, _)| key == EXTRA_NOTE_ID)
            .map(|(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_reads_the_reentry_extra() {
        let launch = LaunchParams::new()
            .with_extra("unrelated", 3)
            .with_extra(EXTRA_NOTE_ID, 10);
        assert_eq!(launch.note_id(), Some(10));
    }

    #[test]
    fn plain_launch_carries_no_note_id() {
        assert_eq!(LaunchParams::new().note_id(), None);
    }
}
