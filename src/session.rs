//! Session Persistence
//!
//! Durable login state in browser localStorage. Four string keys, read at
//! startup and removed together on logout. Storage can be absent (tests,
//! SSR prerender), so every access degrades silently.

use crate::models::Role;

const KEY_TOKEN: &str = "taskask_token";
const KEY_USER_ID: &str = "taskask_userId";
const KEY_EMAIL: &str = "taskask_email";
const KEY_ROLE: &str = "taskask_role";

/// Session fields restored from storage
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user_id: i64,
    pub email: String,
    pub role: Option<Role>,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn persist(token: &str, user_id: i64, email: &str, role: Role) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(KEY_TOKEN, token);
        let _ = storage.set_item(KEY_USER_ID, &user_id.to_string());
        let _ = storage.set_item(KEY_EMAIL, email);
        let _ = storage.set_item(KEY_ROLE, role.as_str());
    }
}

/// Read the persisted session. Token and user id are required; email and
/// role are best-effort.
pub fn restore() -> Option<StoredSession> {
    let storage = storage()?;
    let token = storage.get_item(KEY_TOKEN).ok().flatten()?;
    if token.is_empty() {
        return None;
    }
    let user_id = storage.get_item(KEY_USER_ID).ok().flatten()?.parse().ok()?;
    let email = storage.get_item(KEY_EMAIL).ok().flatten().unwrap_or_default();
    let role = storage
        .get_item(KEY_ROLE)
        .ok()
        .flatten()
        .and_then(|r| Role::parse(&r));
    Some(StoredSession {
        token,
        user_id,
        email,
        role,
    })
}

/// Remove all four keys, regardless of which are present
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(KEY_TOKEN);
        let _ = storage.remove_item(KEY_USER_ID);
        let _ = storage.remove_item(KEY_EMAIL);
        let _ = storage.remove_item(KEY_ROLE);
    }
}
