//! Admin Dashboard
//!
//! Org-wide read-only views: performance, every task, user directory,
//! all teams.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::sort_tasks;

use super::{PerformancePanel, TaskTable};

#[component]
pub fn AdminPage() -> impl IntoView {
    let store = use_app_store();

    let tasks = Signal::derive(move || sort_tasks(&store.admin_tasks().get()));

    view! {
        <section class="admin-page">
            <h2>"Admin dashboard"</h2>

            <PerformancePanel />

            <h3>"All tasks"</h3>
            <TaskTable tasks=tasks />

            <h3>"Users"</h3>
            <table class="user-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Active"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.admin_users().get()
                        key=|u| u.id
                        children=move |u| {
                            view! {
                                <tr>
                                    <td>{u.full_name.clone()}</td>
                                    <td>{u.email.clone()}</td>
                                    <td>{u.role.as_str()}</td>
                                    <td>{if u.active { "yes" } else { "no" }}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <h3>"Teams"</h3>
            <table class="team-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Lead"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.admin_teams().get()
                        key=|t| t.id
                        children=move |t| {
                            view! {
                                <tr>
                                    <td>{t.name.clone()}</td>
                                    <td>{t.lead_id.map(|id| format!("User #{}", id)).unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
