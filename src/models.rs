//! Frontend Models
//!
//! Data structures matching backend DTOs. Field names follow the
//! backend's camelCase JSON.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User role, controls which collections the client loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Manager,
    TeamLead,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Employee, Role::Manager, Role::TeamLead, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::TeamLead => "TEAM_LEAD",
            Role::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "EMPLOYEE" => Some(Role::Employee),
            "MANAGER" => Some(Role::Manager),
            "TEAM_LEAD" => Some(Role::TeamLead),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    /// Sort rank: PENDING < IN_PROGRESS < COMPLETED
    pub fn rank(&self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        }
    }

    pub fn parse(value: &str) -> Option<TaskStatus> {
        match value {
            "PENDING" => Some(TaskStatus::Pending),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "COMPLETED" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    /// Sort rank: HIGH < MEDIUM < LOW
    pub fn rank(&self) -> u8 {
        match self {
            TaskPriority::High => 0,
            TaskPriority::Medium => 1,
            TaskPriority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
        }
    }

    pub fn parse(value: &str) -> Option<TaskPriority> {
        match value {
            "LOW" => Some(TaskPriority::Low),
            "MEDIUM" => Some(TaskPriority::Medium),
            "HIGH" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

/// Task as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    pub status: TaskStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_by_user_id: Option<i64>,
    #[serde(default)]
    pub assigned_to_user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

/// Assignable employee in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOption {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// User row in the admin directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

/// Team owned by a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub lead_id: Option<i64>,
}

/// Team row in the admin listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub lead_id: Option<i64>,
}

/// Member of a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
}

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    TaskAssigned,
    TaskCompleted,
}

impl NotificationType {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::TaskAssigned => "Task assigned",
            NotificationType::TaskCompleted => "Task completed",
        }
    }
}

/// Notification for the bell dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub task_title: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of GET /notifications/unread-count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}

/// Per-user completion stats inside the performance summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformance {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub completion_rate_percent: f64,
}

/// Org-wide performance summary for the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub pending_tasks: i64,
    pub completion_rate_percent: f64,
    #[serde(default)]
    pub user_stats: Vec<UserPerformance>,
}

/// Payload for POST /tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub created_by_user_id: i64,
    pub assigned_to_user_id: i64,
}

/// Payload for POST /users (signup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Payload for PATCH /tasks/{id}/status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_screaming_snake() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("SUPERUSER"), None);
    }

    #[test]
    fn task_parses_backend_payload() {
        let json = r#"{
            "id": 7,
            "title": "Quarterly report",
            "description": null,
            "priority": "HIGH",
            "status": "IN_PROGRESS",
            "startDate": "2025-03-01",
            "dueDate": "2025-03-15",
            "createdByUserId": 2,
            "assignedToUserId": 5,
            "createdAt": "2025-03-01T09:30:00Z",
            "updatedAt": "2025-03-02T11:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.priority, Some(TaskPriority::High));
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.due_date.unwrap().to_string(), "2025-03-15");
        assert_eq!(task.assigned_to_user_id, Some(5));
    }

    #[test]
    fn task_tolerates_missing_optionals() {
        let json = r#"{"id": 1, "title": "Bare", "status": "PENDING"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.description, None);
    }

    #[test]
    fn notification_parses_type_and_is_read() {
        let json = r#"{
            "id": 3,
            "message": "You have been assigned: Quarterly report",
            "type": "TASK_ASSIGNED",
            "isRead": false,
            "taskId": 7,
            "createdAt": "2025-03-01T09:30:00Z"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationType::TaskAssigned);
        assert!(!n.is_read);
        assert_eq!(n.task_id, Some(7));
        // taskTitle only exists in newer backend revisions
        assert_eq!(n.task_title, None);
    }

    #[test]
    fn unread_count_body_shape() {
        let body: UnreadCount = serde_json::from_str(r#"{"count": 4}"#).unwrap();
        assert_eq!(body.count, 4);
    }

    #[test]
    fn create_task_request_uses_camel_case() {
        let req = CreateTaskRequest {
            title: "t".to_string(),
            description: None,
            priority: Some(TaskPriority::Medium),
            status: Some(TaskStatus::Pending),
            start_date: None,
            due_date: None,
            created_by_user_id: 1,
            assigned_to_user_id: 2,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["createdByUserId"], 1);
        assert_eq!(json["assignedToUserId"], 2);
        assert_eq!(json["priority"], "MEDIUM");
    }

    #[test]
    fn status_and_priority_ranks_order_as_documented() {
        assert!(TaskStatus::Pending.rank() < TaskStatus::InProgress.rank());
        assert!(TaskStatus::InProgress.rank() < TaskStatus::Completed.rank());
        assert!(TaskPriority::High.rank() < TaskPriority::Medium.rank());
        assert!(TaskPriority::Medium.rank() < TaskPriority::Low.rank());
    }
}
