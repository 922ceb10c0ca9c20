//! Session Store
//!
//! Persists the auth token and current-user record in `localStorage` so the
//! session survives page reloads. The two entries form one logical session:
//! callers always set and clear them together.

use crate::models::UserRef;
use web_sys::Storage;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "currentUser";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored bearer token, if any.
pub fn token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn set_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Stored current-user record. A corrupt entry reads as absent.
pub fn current_user() -> Option<UserRef> {
    let raw = storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn set_current_user(user: &UserRef) {
    if let Some(storage) = storage() {
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
}

/// Drops both session entries. Used by logout and by the gateway's
/// 401 teardown.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
