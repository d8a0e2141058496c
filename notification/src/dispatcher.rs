use std::fmt;
use std::sync::{Arc, OnceLock};

use log::debug;

use crate::backend::NotificationBackend;
use crate::{Channel, Delivered, Notification, NotifyError, PermissionStatus};

/// Dispatches display requests to the platform notification API.
///
/// The dispatcher owns the delivery channel lifecycle: the channel is
/// registered at most once per dispatcher lifetime, lazily before the first
/// posting, and only on platforms that require explicit registration.
pub struct Dispatcher {
    backend: Arc<dyn NotificationBackend>,
    channel: Channel,
    channel_ready: OnceLock<()>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("channel", &self.channel)
            .field("channel_ready", &self.channel_ready.get().is_some())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher delivering through `backend` on `channel`.
    pub fn new(backend: Arc<dyn NotificationBackend>, channel: Channel) -> Self {
        Self {
            backend,
            channel,
            channel_ready: OnceLock::new(),
        }
    }

    /// Create a dispatcher on the current platform's backend.
    #[cfg(any(
        target_os = "linux",
        target_os = "windows",
        target_os = "macos",
        target_os = "ios"
    ))]
    pub fn platform(channel: Channel) -> Self {
        Self::new(crate::sys::platform_backend(), channel)
    }

    /// The delivery channel this dispatcher registers and posts on.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Register the delivery channel if this platform requires it.
    ///
    /// Idempotent: the backend's `create_channel` runs at most once per
    /// dispatcher lifetime, and not at all on platforms without channel
    /// registries. Callers must not assume the channel's importance can be
    /// changed afterwards.
    ///
    /// # Errors
    /// Returns [`NotifyError::Backend`] if the platform rejects the
    /// registration.
    pub fn ensure_channel(&self) -> Result<(), NotifyError> {
        if !self.backend.requires_channel() {
            return Ok(());
        }
        if self.channel_ready.get().is_some() {
            return Ok(());
        }

        debug!("registering notification channel {:?}", self.channel.id);
        self.backend
            .create_channel(&self.channel)
            .map_err(NotifyError::Backend)?;

        let _ = self.channel_ready.set(());
        Ok(())
    }

    /// Post a notification, keyed by `notification.id`.
    ///
    /// Ensures the channel exists, then checks the post-notifications
    /// capability: anything other than granted returns
    /// [`NotifyError::PermissionDenied`] without touching the platform's
    /// emit primitive. No queueing, no retry. Posting again under the same
    /// id replaces the visible notification.
    ///
    /// # Errors
    /// [`NotifyError::PermissionDenied`] when the capability is missing,
    /// [`NotifyError::Backend`] when the platform rejects the operation.
    pub fn post(&self, notification: &Notification) -> Result<Delivered, NotifyError> {
        self.ensure_channel()?;

        if self.backend.permission_status() != PermissionStatus::Granted {
            return Err(NotifyError::PermissionDenied);
        }

        self.backend
            .notify(&self.channel, notification)
            .map_err(NotifyError::Backend)?;

        debug!("posted notification {}", notification.id);
        Ok(Delivered {
            id: notification.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReentryAction;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every backend call; `visible` models the platform's keyed
    /// notification shade (last write per id wins).
    struct RecordingBackend {
        requires_channel: bool,
        permission: PermissionStatus,
        channels: Mutex<Vec<Channel>>,
        calls: Mutex<Vec<i32>>,
        visible: Mutex<HashMap<i32, Notification>>,
    }

    impl RecordingBackend {
        fn new(permission: PermissionStatus) -> Self {
            Self {
                requires_channel: true,
                permission,
                channels: Mutex::new(Vec::new()),
                calls: Mutex::new(Vec::new()),
                visible: Mutex::new(HashMap::new()),
            }
        }

        fn without_channel_registry(permission: PermissionStatus) -> Self {
            Self {
                requires_channel: false,
                ..Self::new(permission)
            }
        }
    }

    impl NotificationBackend for RecordingBackend {
        fn requires_channel(&self) -> bool {
            self.requires_channel
        }

        fn create_channel(&self, channel: &Channel) -> Result<(), String> {
            self.channels.lock().unwrap().push(channel.clone());
            Ok(())
        }

        fn permission_status(&self) -> PermissionStatus {
            self.permission
        }

        fn notify(&self, _channel: &Channel, notification: &Notification) -> Result<(), String> {
            self.calls.lock().unwrap().push(notification.id);
            self.visible
                .lock()
                .unwrap()
                .insert(notification.id, notification.clone());
            Ok(())
        }
    }

    fn dispatcher(backend: RecordingBackend) -> (Arc<RecordingBackend>, Dispatcher) {
        let backend = Arc::new(backend);
        let dispatcher = Dispatcher::new(backend.clone(), Channel::new("notes", "Notes"));
        (backend, dispatcher)
    }

    #[test]
    fn post_emits_exactly_one_notification_keyed_by_id() {
        let (backend, dispatcher) = dispatcher(RecordingBackend::new(PermissionStatus::Granted));
        let request = Notification::new(10).title("My Title 0").body("My content 0");

        let delivered = dispatcher.post(&request).unwrap();

        assert_eq!(delivered.id, 10);
        assert_eq!(*backend.calls.lock().unwrap(), vec![10]);
        let visible = backend.visible.lock().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[&10].title, "My Title 0");
        assert_eq!(visible[&10].body, "My content 0");
    }

    #[test]
    fn posting_same_id_twice_replaces_visible_notification() {
        let (backend, dispatcher) = dispatcher(RecordingBackend::new(PermissionStatus::Granted));

        dispatcher
            .post(&Notification::new(10).title("first"))
            .unwrap();
        dispatcher
            .post(&Notification::new(10).title("second"))
            .unwrap();

        assert_eq!(backend.calls.lock().unwrap().len(), 2);
        let visible = backend.visible.lock().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[&10].title, "second");
    }

    #[test]
    fn permission_denied_never_reaches_emit_primitive() {
        let (backend, dispatcher) = dispatcher(RecordingBackend::new(PermissionStatus::Denied));

        let result = dispatcher.post(&Notification::new(10).title("My Title 0"));

        assert!(matches!(result, Err(NotifyError::PermissionDenied)));
        assert!(backend.calls.lock().unwrap().is_empty());
        assert!(backend.visible.lock().unwrap().is_empty());
    }

    #[test]
    fn undetermined_permission_is_treated_as_denied() {
        let (backend, dispatcher) =
            dispatcher(RecordingBackend::new(PermissionStatus::NotDetermined));

        let result = dispatcher.post(&Notification::new(1));

        assert!(matches!(result, Err(NotifyError::PermissionDenied)));
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn ensure_channel_twice_registers_once() {
        let (backend, dispatcher) = dispatcher(RecordingBackend::new(PermissionStatus::Granted));

        dispatcher.ensure_channel().unwrap();
        dispatcher.ensure_channel().unwrap();

        let channels = backend.channels.lock().unwrap();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].id, "notes");
    }

    #[test]
    fn post_registers_channel_before_first_emit() {
        let (backend, dispatcher) = dispatcher(RecordingBackend::new(PermissionStatus::Granted));

        dispatcher.post(&Notification::new(1)).unwrap();
        dispatcher.post(&Notification::new(2)).unwrap();

        assert_eq!(backend.channels.lock().unwrap().len(), 1);
    }

    #[test]
    fn channel_skipped_when_platform_has_no_registry() {
        let (backend, dispatcher) = dispatcher(RecordingBackend::without_channel_registry(
            PermissionStatus::Granted,
        ));

        dispatcher.ensure_channel().unwrap();
        dispatcher.post(&Notification::new(1)).unwrap();

        assert!(backend.channels.lock().unwrap().is_empty());
        assert_eq!(backend.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn reentry_action_reaches_backend_intact() {
        let (backend, dispatcher) = dispatcher(RecordingBackend::new(PermissionStatus::Granted));
        let request = Notification::new(10)
            .title("My Title 0")
            .action(ReentryAction::new("snooze", "my action 10", 10));

        dispatcher.post(&request).unwrap();

        let visible = backend.visible.lock().unwrap();
        let action = visible[&10].action.as_ref().unwrap();
        assert_eq!(action.action, "snooze");
        assert!(action.label.contains("10"));
        assert_eq!(action.note_id, 10);
    }

    #[test]
    fn backend_failure_surfaces_as_backend_error() {
        struct FailingBackend;
        impl NotificationBackend for FailingBackend {
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
                Err("shade unavailable".into())
            }
        }

        let dispatcher = Dispatcher::new(Arc::new(FailingBackend), Channel::new("notes", "Notes"));
        let result = dispatcher.post(&Notification::new(1));

        assert!(matches!(result, Err(NotifyError::Backend(msg)) if msg == "shade unavailable"));
    }
}
