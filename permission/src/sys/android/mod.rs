//! Android permission implementation using JNI.

use crate::{Permission, PermissionError, PermissionStatus};
use jni::JNIEnv;
use jni::objects::{JObject, JValue};
use jni::sys::jint;

/// Manifest permission string gating notification posting since API 33.
const POST_NOTIFICATIONS: &str = "android.permission.POST_NOTIFICATIONS";

/// `PackageManager.PERMISSION_GRANTED`.
const PERMISSION_GRANTED: jint = 0;

/// First SDK level that gates posting behind a runtime permission.
const SDK_RUNTIME_NOTIFICATIONS: jint = 33;

fn sdk_int(env: &mut JNIEnv) -> Result<jint, PermissionError> {
    env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
        .map_err(|e| PermissionError::Unknown(format!("SDK_INT lookup failed: {e}")))?
        .i()
        .map_err(|e| PermissionError::Unknown(format!("SDK_INT result: {e}")))
}

/// Check the post-notifications capability against a live `Context`.
///
/// On SDK levels below 33 the capability is granted at install time and
/// this returns `Granted` without touching the package manager.
pub fn check_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    permission: Permission,
) -> Result<PermissionStatus, PermissionError> {
    let Permission::Notifications = permission;

    if sdk_int(env)? < SDK_RUNTIME_NOTIFICATIONS {
        return Ok(PermissionStatus::Granted);
    }

    let jpermission = env
        .new_string(POST_NOTIFICATIONS)
        .map_err(|e| PermissionError::Unknown(format!("new_string failed: {e}")))?;

    let result = env
        .call_method(
            context,
            "checkSelfPermission",
            "(Ljava/lang/String;)I",
            &[JValue::Object(&jpermission)],
        )
        .map_err(|e| PermissionError::Unknown(format!("checkSelfPermission: {e}")))?
        .i()
        .map_err(|e| PermissionError::Unknown(format!("checkSelfPermission result: {e}")))?;

    if result == PERMISSION_GRANTED {
        Ok(PermissionStatus::Granted)
    } else {
        Ok(PermissionStatus::Denied)
    }
}

/// Fire the system permission prompt from a live `Activity`.
///
/// The user's answer arrives out of band via the activity's
/// `onRequestPermissionsResult`; this returns the status as of the call.
pub fn request_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    permission: Permission,
    request_code: i32,
) -> Result<PermissionStatus, PermissionError> {
    let current = check_with_context(env, activity, permission)?;
    if current == PermissionStatus::Granted {
        return Ok(current);
    }

    let jpermission = env
        .new_string(POST_NOTIFICATIONS)
        .map_err(|e| PermissionError::Unknown(format!("new_string failed: {e}")))?;

    let permissions = env
        .new_object_array(1, "java/lang/String", &jpermission)
        .map_err(|e| PermissionError::Unknown(format!("new_object_array failed: {e}")))?;

    env.call_method(
        activity,
        "requestPermissions",
        "([Ljava/lang/String;I)V",
        &[JValue::Object(&permissions), JValue::Int(request_code)],
    )
    .map_err(|e| PermissionError::Unknown(format!("requestPermissions: {e}")))?;

    Ok(current)
}

// Async wrappers for the public API (require runtime context)
pub(crate) async fn check(permission: Permission) -> PermissionStatus {
    // Without JNI context, we can't check permissions
    // The application must call check_with_context directly
    let _ = permission;
    PermissionStatus::NotDetermined
}

pub(crate) async fn request(permission: Permission) -> Result<PermissionStatus, PermissionError> {
    // Without JNI context, we can't request permissions
    // The application must use request_with_activity with an Activity
    let _ = permission;
    Err(PermissionError::Unknown(
        "Android: use request_with_activity() with Activity context".into(),
    ))
}
