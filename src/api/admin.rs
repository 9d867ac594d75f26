//! Admin Endpoints
//!
//! Org-wide views; the backend rejects non-admin tokens.

use crate::error::AppResult;
use crate::models::{PerformanceSummary, Task, TeamSummary, UserSummary};

use super::get_json;

pub async fn list_all_tasks(token: &str) -> AppResult<Vec<Task>> {
    get_json("/admin/tasks", token).await
}

pub async fn list_all_users(token: &str) -> AppResult<Vec<UserSummary>> {
    get_json("/admin/users", token).await
}

pub async fn get_performance(token: &str) -> AppResult<PerformanceSummary> {
    get_json("/admin/performance", token).await
}

pub async fn list_all_teams(token: &str) -> AppResult<Vec<TeamSummary>> {
    get_json("/admin/teams", token).await
}
