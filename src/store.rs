//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every cache
//! field is a passive mirror of backend state: mutations refetch the
//! affected collections instead of patching them locally.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{
    EmployeeOption, LoginResponse, Notification, PerformanceSummary, Role, Task, Team, TeamMember,
    TeamSummary, UserSummary,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    // Session
    pub token: String,
    pub user_id: Option<i64>,
    pub user_email: String,
    pub user_role: Option<Role>,

    // Data caches
    pub employees: Vec<EmployeeOption>,
    /// Tasks assigned to the logged-in user
    pub tasks: Vec<Task>,
    /// Tasks the logged-in user created (manager-like roles)
    pub manager_tasks: Vec<Task>,
    pub admin_tasks: Vec<Task>,
    pub admin_users: Vec<UserSummary>,
    pub admin_teams: Vec<TeamSummary>,
    pub performance: Option<PerformanceSummary>,
    pub team: Option<Team>,
    pub team_members: Vec<TeamMember>,

    // Notifications (bell badge + dropdown)
    pub notifications: Vec<Notification>,
    pub unread_count: i64,
    pub show_notification_panel: bool,

    // Messages (lightweight)
    pub last_error: String,
    pub last_message: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Logged-in status is derived from token presence
pub fn is_logged_in(store: &AppStore) -> bool {
    !store.token().get().is_empty()
}

/// Install session fields from a successful login
pub fn store_set_session(store: &AppStore, res: &LoginResponse) {
    store.token().set(res.token.clone());
    store.user_id().set(Some(res.user_id));
    store.user_email().set(res.email.clone());
    store.user_role().set(Some(res.role));
}

/// Reset every field to its empty state. Total, never partial.
pub fn store_clear(store: &AppStore) {
    store.token().set(String::new());
    store.user_id().set(None);
    store.user_email().set(String::new());
    store.user_role().set(None);
    store.employees().set(Vec::new());
    store.tasks().set(Vec::new());
    store.manager_tasks().set(Vec::new());
    store.admin_tasks().set(Vec::new());
    store.admin_users().set(Vec::new());
    store.admin_teams().set(Vec::new());
    store.performance().set(None);
    store.team().set(None);
    store.team_members().set(Vec::new());
    store.notifications().set(Vec::new());
    store.unread_count().set(0);
    store.show_notification_panel().set(false);
    store.last_error().set(String::new());
    store.last_message().set(String::new());
}

pub fn store_set_error(store: &AppStore, msg: impl Into<String>) {
    store.last_error().set(msg.into());
}

pub fn store_set_message(store: &AppStore, msg: impl Into<String>) {
    store.last_message().set(msg.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationType, TaskStatus};

    fn populated_store() -> AppStore {
        let store = Store::new(AppState::new());
        store.token().set("jwt-token".to_string());
        store.user_id().set(Some(9));
        store.user_email().set("lead@example.com".to_string());
        store.user_role().set(Some(Role::TeamLead));
        store.employees().set(vec![EmployeeOption {
            id: 1,
            full_name: "Sam Field".to_string(),
            email: "sam@example.com".to_string(),
        }]);
        store.tasks().set(vec![Task {
            id: 1,
            title: "Task".to_string(),
            description: None,
            priority: None,
            status: TaskStatus::Pending,
            start_date: None,
            due_date: None,
            created_by_user_id: None,
            assigned_to_user_id: None,
            created_at: None,
            updated_at: None,
        }]);
        store.manager_tasks().set(store.tasks().get());
        store.admin_tasks().set(store.tasks().get());
        store.admin_users().set(vec![UserSummary {
            id: 1,
            full_name: "Sam Field".to_string(),
            email: "sam@example.com".to_string(),
            role: Role::Employee,
            active: true,
        }]);
        store.admin_teams().set(vec![TeamSummary {
            id: 1,
            name: "Core".to_string(),
            lead_id: Some(9),
        }]);
        store.performance().set(Some(PerformanceSummary {
            total_tasks: 1,
            completed_tasks: 0,
            in_progress_tasks: 0,
            pending_tasks: 1,
            completion_rate_percent: 0.0,
            user_stats: Vec::new(),
        }));
        store.team().set(Some(Team {
            id: 1,
            name: "Core".to_string(),
            lead_id: Some(9),
        }));
        store.team_members().set(vec![TeamMember {
            user_id: 1,
            full_name: "Sam Field".to_string(),
            email: "sam@example.com".to_string(),
        }]);
        store.notifications().set(vec![Notification {
            id: 1,
            message: "You have been assigned: Task".to_string(),
            kind: NotificationType::TaskAssigned,
            is_read: false,
            task_id: Some(1),
            task_title: None,
            created_at: None,
        }]);
        store.unread_count().set(3);
        store.show_notification_panel().set(true);
        store.last_error().set("boom".to_string());
        store.last_message().set("ok".to_string());
        store
    }

    #[test]
    fn logged_in_is_derived_from_token() {
        let store = Store::new(AppState::new());
        assert!(!is_logged_in(&store));
        store.token().set("jwt-token".to_string());
        assert!(is_logged_in(&store));
    }

    #[test]
    fn clear_resets_every_field() {
        let store = populated_store();
        store_clear(&store);

        assert!(store.token().get().is_empty());
        assert_eq!(store.user_id().get(), None);
        assert!(store.user_email().get().is_empty());
        assert_eq!(store.user_role().get(), None);
        assert!(store.employees().get().is_empty());
        assert!(store.tasks().get().is_empty());
        assert!(store.manager_tasks().get().is_empty());
        assert!(store.admin_tasks().get().is_empty());
        assert!(store.admin_users().get().is_empty());
        assert!(store.admin_teams().get().is_empty());
        assert_eq!(store.performance().get(), None);
        assert_eq!(store.team().get(), None);
        assert!(store.team_members().get().is_empty());
        assert!(store.notifications().get().is_empty());
        assert_eq!(store.unread_count().get(), 0);
        assert!(!store.show_notification_panel().get());
        assert!(store.last_error().get().is_empty());
        assert!(store.last_message().get().is_empty());
        assert!(!is_logged_in(&store));
    }
}
