//! Manager Dashboard
//!
//! Create-task form plus the combined created/assigned task view.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{combined_tasks, filter_tasks, StatusFilter};

use super::{NewTaskForm, TaskTable};

#[component]
pub fn ManagerPage() -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(StatusFilter::All);

    // Combined view dedups overlapping ids; filtering keeps the sort
    let tasks = Signal::derive(move || {
        let combined = combined_tasks(&store.tasks().get(), &store.manager_tasks().get());
        filter_tasks(&combined, filter.get())
    });

    view! {
        <section class="manager-page">
            <h2>"Manager dashboard"</h2>

            <NewTaskForm />

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
