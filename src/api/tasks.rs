//! Task Endpoints

use crate::error::AppResult;
use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};

use super::{delete_unit, get_json, patch_json, post_json};

pub async fn create_task(req: &CreateTaskRequest, token: &str) -> AppResult<Task> {
    post_json("/tasks", req, token).await
}

/// Tasks assigned to the given user
pub async fn list_assigned_tasks(user_id: i64, token: &str) -> AppResult<Vec<Task>> {
    get_json(&format!("/tasks/assigned/{}", user_id), token).await
}

/// Tasks the given user created
pub async fn list_created_tasks(user_id: i64, token: &str) -> AppResult<Vec<Task>> {
    get_json(&format!("/tasks/created/{}", user_id), token).await
}

pub async fn update_task(task_id: i64, req: &UpdateTaskRequest, token: &str) -> AppResult<Task> {
    patch_json(&format!("/tasks/{}/status", task_id), req, token).await
}

pub async fn delete_task(task_id: i64, token: &str) -> AppResult<()> {
    delete_unit(&format!("/tasks/{}", task_id), token).await
}
