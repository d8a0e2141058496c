//! Android notification backend using JNI.

use std::fmt;

use jni::objects::{GlobalRef, JObject, JValue};
use jni::sys::jint;
use jni::{JNIEnv, JavaVM};

use notenote_permission::sys::check_with_context;

use crate::backend::NotificationBackend;
use crate::{Channel, Importance, Notification, Permission, PermissionStatus};

/// First SDK level with a channel registry (`NotificationChannel`).
const SDK_CHANNELS: jint = 26;

/// `PendingIntent.FLAG_IMMUTABLE`.
const FLAG_IMMUTABLE: jint = 0x0400_0000;

/// `NotificationManager.IMPORTANCE_*` values.
const fn importance_to_jint(importance: Importance) -> jint {
    match importance {
        Importance::Min => 1,
        Importance::Low => 2,
        Importance::Default => 3,
        Importance::High => 4,
    }
}

/// Backend delivering through `android.app.NotificationManager`.
///
/// Needs a live JVM and an application `Context`; every call attaches the
/// current thread and goes through the framework directly.
pub struct AndroidBackend {
    vm: JavaVM,
    context: GlobalRef,
}

impl fmt::Debug for AndroidBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndroidBackend").finish_non_exhaustive()
    }
}

impl AndroidBackend {
    /// Create a backend bound to the given JVM and application context.
    pub fn new(vm: JavaVM, context: GlobalRef) -> Self {
        Self { vm, context }
    }

    fn sdk_int(env: &mut JNIEnv) -> Result<jint, String> {
        env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .map_err(|e| format!("SDK_INT lookup failed: {e}"))?
            .i()
            .map_err(|e| format!("SDK_INT result: {e}"))
    }

    fn notification_manager<'local>(
        env: &mut JNIEnv<'local>,
        context: &JObject,
    ) -> Result<JObject<'local>, String> {
        let service = env
            .new_string("notification")
            .map_err(|e| format!("new_string failed: {e}"))?;

        env.call_method(
            context,
            "getSystemService",
            "(Ljava/lang/String;)Ljava/lang/Object;",
            &[JValue::Object(&service)],
        )
        .map_err(|e| format!("getSystemService failed: {e}"))?
        .l()
        .map_err(|e| format!("getSystemService result: {e}"))
    }

    /// Build a `PendingIntent` re-launching the app with the note id extra.
    fn reentry_intent<'local>(
        env: &mut JNIEnv<'local>,
        context: &JObject,
        action: &crate::ReentryAction,
    ) -> Result<JObject<'local>, String> {
        let package_manager = env
            .call_method(
                context,
                "getPackageManager",
                "()Landroid/content/pm/PackageManager;",
                &[],
            )
            .map_err(|e| format!("getPackageManager failed: {e}"))?
            .l()
            .map_err(|e| format!("getPackageManager result: {e}"))?;

        let package_name = env
            .call_method(context, "getPackageName", "()Ljava/lang/String;", &[])
            .map_err(|e| format!("getPackageName failed: {e}"))?
            .l()
            .map_err(|e| format!("getPackageName result: {e}"))?;

        let intent = env
            .call_method(
                &package_manager,
                "getLaunchIntentForPackage",
                "(Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(&package_name)],
            )
            .map_err(|e| format!("getLaunchIntentForPackage failed: {e}"))?
            .l()
            .map_err(|e| format!("getLaunchIntentForPackage result: {e}"))?;

        if intent.is_null() {
            return Err("no launch intent for package".into());
        }

        let jaction = env
            .new_string(&action.action)
            .map_err(|e| format!("new_string failed: {e}"))?;
        env.call_method(
            &intent,
            "setAction",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&jaction)],
        )
        .map_err(|e| format!("setAction failed: {e}"))?;

        let jkey = env
            .new_string(crate::EXTRA_NOTE_ID)
            .map_err(|e| format!("new_string failed: {e}"))?;
        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;I)Landroid/content/Intent;",
            &[JValue::Object(&jkey), JValue::Int(action.note_id)],
        )
        .map_err(|e| format!("putExtra failed: {e}"))?;

        env.call_static_method(
            "android/app/PendingIntent",
            "getActivity",
            "(Landroid/content/Context;ILandroid/content/Intent;I)Landroid/app/PendingIntent;",
            &[
                JValue::Object(context),
                JValue::Int(action.note_id),
                JValue::Object(&intent),
                JValue::Int(FLAG_IMMUTABLE),
            ],
        )
        .map_err(|e| format!("PendingIntent.getActivity failed: {e}"))?
        .l()
        .map_err(|e| format!("PendingIntent.getActivity result: {e}"))
    }
}

impl NotificationBackend for AndroidBackend {
    fn requires_channel(&self) -> bool {
        // Channels exist since SDK 26; if the level can't be read, assume a
        // modern device and register.
        self.vm.attach_current_thread().map_or(true, |mut env| {
            Self::sdk_int(&mut env).map_or(true, |sdk| sdk >= SDK_CHANNELS)
        })
    }

    fn create_channel(&self, channel: &Channel) -> Result<(), String> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| format!("attach failed: {e}"))?;

        let jid = env
            .new_string(&channel.id)
            .map_err(|e| format!("new_string failed: {e}"))?;
        let jname = env
            .new_string(&channel.name)
            .map_err(|e| format!("new_string failed: {e}"))?;

        let jchannel = env
            .new_object(
                "android/app/NotificationChannel",
                "(Ljava/lang/String;Ljava/lang/CharSequence;I)V",
                &[
                    JValue::Object(&jid),
                    JValue::Object(&jname),
                    JValue::Int(importance_to_jint(channel.importance)),
                ],
            )
            .map_err(|e| format!("new NotificationChannel: {e}"))?;

        let manager = Self::notification_manager(&mut env, self.context.as_obj())?;
        env.call_method(
            &manager,
            "createNotificationChannel",
            "(Landroid/app/NotificationChannel;)V",
            &[JValue::Object(&jchannel)],
        )
        .map_err(|e| format!("createNotificationChannel failed: {e}"))?;

        Ok(())
    }

    fn permission_status(&self) -> PermissionStatus {
        self.vm.attach_current_thread().map_or(
            PermissionStatus::NotDetermined,
            |mut env| {
                check_with_context(&mut env, self.context.as_obj(), Permission::Notifications)
                    .unwrap_or(PermissionStatus::NotDetermined)
            },
        )
    }

    fn notify(&self, channel: &Channel, notification: &Notification) -> Result<(), String> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| format!("attach failed: {e}"))?;
        let context = self.context.as_obj();

        let jchannel_id = env
            .new_string(&channel.id)
            .map_err(|e| format!("new_string failed: {e}"))?;

        let builder = env
            .new_object(
                "android/app/Notification$Builder",
                "(Landroid/content/Context;Ljava/lang/String;)V",
                &[JValue::Object(context), JValue::Object(&jchannel_id)],
            )
            .map_err(|e| format!("new Notification.Builder: {e}"))?;

        let jtitle = env
            .new_string(&notification.title)
            .map_err(|e| format!("new_string failed: {e}"))?;
        env.call_method(
            &builder,
            "setContentTitle",
            "(Ljava/lang/CharSequence;)Landroid/app/Notification$Builder;",
            &[JValue::Object(&jtitle)],
        )
        .map_err(|e| format!("setContentTitle failed: {e}"))?;

        let jbody = env
            .new_string(&notification.body)
            .map_err(|e| format!("new_string failed: {e}"))?;
        env.call_method(
            &builder,
            "setContentText",
            "(Ljava/lang/CharSequence;)Landroid/app/Notification$Builder;",
            &[JValue::Object(&jbody)],
        )
        .map_err(|e| format!("setContentText failed: {e}"))?;

        // Small icon is mandatory; fall back to a stock framework icon when
        // the request names none.
        let icon = env
            .get_static_field("android/R$drawable", "ic_dialog_info", "I")
            .map_err(|e| format!("ic_dialog_info lookup failed: {e}"))?
            .i()
            .map_err(|e| format!("ic_dialog_info result: {e}"))?;
        env.call_method(
            &builder,
            "setSmallIcon",
            "(I)Landroid/app/Notification$Builder;",
            &[JValue::Int(icon)],
        )
        .map_err(|e| format!("setSmallIcon failed: {e}"))?;

        if let Some(action) = &notification.action {
            let pending = Self::reentry_intent(&mut env, context, action)?;
            let jlabel = env
                .new_string(&action.label)
                .map_err(|e| format!("new_string failed: {e}"))?;
            env.call_method(
                &builder,
                "addAction",
                "(ILjava/lang/CharSequence;Landroid/app/PendingIntent;)Landroid/app/Notification$Builder;",
                &[
                    JValue::Int(icon),
                    JValue::Object(&jlabel),
                    JValue::Object(&pending),
                ],
            )
            .map_err(|e| format!("addAction failed: {e}"))?;
        }

        let built = env
            .call_method(&builder, "build", "()Landroid/app/Notification;", &[])
            .map_err(|e| format!("build failed: {e}"))?
            .l()
            .map_err(|e| format!("build result: {e}"))?;

        let manager = Self::notification_manager(&mut env, context)?;
        env.call_method(
            &manager,
            "notify",
            "(ILandroid/app/Notification;)V",
            &[JValue::Int(notification.id), JValue::Object(&built)],
        )
        .map_err(|e| format!("notify failed: {e}"))?;

        Ok(())
    }
}
