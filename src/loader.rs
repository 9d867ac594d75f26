//! Role-Driven Data Loading
//!
//! One declarative table maps each role to the collections it mirrors.
//! Every collection is fetched independently: a failing load records its
//! own error and never blocks the others. Completion order between two
//! in-flight loads is not guaranteed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Role;
use crate::store::{store_set_error, AppStateStoreFields, AppStore};

/// Backend collections the client mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    MyTasks,
    Notifications,
    UnreadCount,
    Employees,
    CreatedTasks,
    MyTeam,
    TeamMembers,
    AllTasks,
    AllUsers,
    Performance,
    AllTeams,
}

/// Which collections each role loads after login or session restore
pub fn collections_for_role(role: Role) -> &'static [Collection] {
    use Collection::*;
    match role {
        Role::Employee => &[MyTasks, Notifications, UnreadCount],
        Role::Manager => &[MyTasks, Notifications, UnreadCount, Employees, CreatedTasks],
        Role::TeamLead => &[
            MyTasks,
            Notifications,
            UnreadCount,
            Employees,
            CreatedTasks,
            MyTeam,
            TeamMembers,
        ],
        Role::Admin => &[
            MyTasks,
            Notifications,
            UnreadCount,
            AllTasks,
            AllUsers,
            Performance,
            AllTeams,
        ],
    }
}

/// Fetch everything the role needs, one independent request per collection
pub fn load_role_data(store: AppStore, role: Role) {
    web_sys::console::log_1(
        &format!("[Loader] Loading collections for role {}", role.as_str()).into(),
    );
    for collection in collections_for_role(role) {
        load_collection(store, *collection);
    }
}

pub fn load_collection(store: AppStore, collection: Collection) {
    match collection {
        Collection::MyTasks => load_my_tasks(store),
        Collection::Notifications => load_notifications(store),
        Collection::UnreadCount => load_unread_count(store),
        Collection::Employees => load_employees(store),
        Collection::CreatedTasks => load_created_tasks(store),
        Collection::MyTeam => load_my_team(store),
        Collection::TeamMembers => load_team_members(store),
        Collection::AllTasks => load_all_tasks(store),
        Collection::AllUsers => load_all_users(store),
        Collection::Performance => load_performance(store),
        Collection::AllTeams => load_all_teams(store),
    }
}

/// Refresh the notification list and badge together
pub fn refresh_notifications(store: AppStore) {
    load_notifications(store);
    load_unread_count(store);
}

// ========================
// Per-Collection Loads
// ========================

pub fn load_my_tasks(store: AppStore) {
    let token = store.token().get();
    let Some(user_id) = store.user_id().get() else {
        return;
    };
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_assigned_tasks(user_id, &token).await {
            Ok(list) => {
                web_sys::console::log_1(&format!("[Loader] Loaded {} tasks", list.len()).into());
                store.tasks().set(list);
            }
            Err(_) => store_set_error(&store, "Failed to load tasks"),
        }
    });
}

pub fn load_created_tasks(store: AppStore) {
    let token = store.token().get();
    let Some(user_id) = store.user_id().get() else {
        return;
    };
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_created_tasks(user_id, &token).await {
            Ok(list) => store.manager_tasks().set(list),
            Err(_) => store_set_error(&store, "Failed to load created tasks"),
        }
    });
}

pub fn load_employees(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_employees(&token).await {
            Ok(list) => store.employees().set(list),
            Err(_) => store_set_error(&store, "Failed to load employees"),
        }
    });
}

pub fn load_my_team(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        // A lead may not have created a team yet; that is not an error
        if let Ok(team) = api::get_my_team(&token).await {
            store.team().set(Some(team));
        }
    });
}

pub fn load_team_members(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_my_team_members(&token).await {
            Ok(list) => store.team_members().set(list),
            Err(_) => store_set_error(&store, "Failed to load team members"),
        }
    });
}

pub fn load_all_tasks(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_all_tasks(&token).await {
            Ok(list) => store.admin_tasks().set(list),
            Err(_) => store_set_error(&store, "Failed to load all tasks"),
        }
    });
}

pub fn load_all_users(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_all_users(&token).await {
            Ok(list) => store.admin_users().set(list),
            Err(_) => store_set_error(&store, "Failed to load users"),
        }
    });
}

pub fn load_performance(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::get_performance(&token).await {
            Ok(summary) => store.performance().set(Some(summary)),
            Err(_) => store_set_error(&store, "Failed to load performance"),
        }
    });
}

pub fn load_all_teams(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_all_teams(&token).await {
            Ok(list) => store.admin_teams().set(list),
            Err(_) => store_set_error(&store, "Failed to load teams"),
        }
    });
}

pub fn load_notifications(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        match api::list_notifications(&token).await {
            Ok(list) => store.notifications().set(list),
            Err(_) => store_set_error(&store, "Failed to load notifications"),
        }
    });
}

pub fn load_unread_count(store: AppStore) {
    let token = store.token().get();
    if token.is_empty() {
        return;
    }
    spawn_local(async move {
        // Badge staleness is acceptable; errors are swallowed
        if let Ok(count) = api::get_unread_count(&token).await {
            store.unread_count().set(count);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_loads_exactly_the_shared_collections() {
        assert_eq!(
            collections_for_role(Role::Employee),
            [
                Collection::MyTasks,
                Collection::Notifications,
                Collection::UnreadCount
            ]
        );
    }

    #[test]
    fn manager_adds_directory_and_created_tasks() {
        assert_eq!(
            collections_for_role(Role::Manager),
            [
                Collection::MyTasks,
                Collection::Notifications,
                Collection::UnreadCount,
                Collection::Employees,
                Collection::CreatedTasks,
            ]
        );
    }

    #[test]
    fn team_lead_loads_seven_collections() {
        let collections = collections_for_role(Role::TeamLead);
        assert_eq!(collections.len(), 7);
        assert_eq!(
            collections,
            [
                Collection::MyTasks,
                Collection::Notifications,
                Collection::UnreadCount,
                Collection::Employees,
                Collection::CreatedTasks,
                Collection::MyTeam,
                Collection::TeamMembers,
            ]
        );
    }

    #[test]
    fn admin_loads_org_wide_views() {
        let collections = collections_for_role(Role::Admin);
        assert_eq!(collections.len(), 7);
        assert!(collections.contains(&Collection::AllTasks));
        assert!(collections.contains(&Collection::AllUsers));
        assert!(collections.contains(&Collection::Performance));
        assert!(collections.contains(&Collection::AllTeams));
        // Admin does not fetch the lead-scoped or manager-scoped views
        assert!(!collections.contains(&Collection::Employees));
        assert!(!collections.contains(&Collection::MyTeam));
    }
}
