//! Notification Endpoints

use crate::error::AppResult;
use crate::models::{Notification, UnreadCount};

use super::{get_json, post_empty};

/// All notifications for the logged-in user, newest first
pub async fn list_notifications(token: &str) -> AppResult<Vec<Notification>> {
    get_json("/notifications", token).await
}

/// Unread count for the bell badge
pub async fn get_unread_count(token: &str) -> AppResult<i64> {
    let body: UnreadCount = get_json("/notifications/unread-count", token).await?;
    Ok(body.count)
}

/// Mark every notification read. Safe to repeat.
pub async fn mark_all_read(token: &str) -> AppResult<()> {
    post_empty("/notifications/mark-read", token).await
}
