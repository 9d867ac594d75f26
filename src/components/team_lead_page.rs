//! Team Lead Dashboard
//!
//! Team management plus task creation restricted to team members.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{combined_tasks, filter_tasks, StatusFilter};

use super::{NewTaskForm, TaskTable, TeamPanel};

#[component]
pub fn TeamLeadPage() -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(StatusFilter::All);

    let tasks = Signal::derive(move || {
        let combined = combined_tasks(&store.tasks().get(), &store.manager_tasks().get());
        filter_tasks(&combined, filter.get())
    });

    view! {
        <section class="team-lead-page">
            <h2>"Team lead dashboard"</h2>

            <TeamPanel />

            <NewTaskForm require_team_member=true />

            <div class="filter-row">
                {StatusFilter::ALL_FILTERS.iter().map(|f| {
                    let f = *f;
                    view! {
                        <button
                            class=move || if filter.get() == f { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| set_filter.set(f)
                        >
                            {f.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <TaskTable tasks=tasks can_delete=true />
        </section>
    }
}
