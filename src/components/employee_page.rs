//! Employee Dashboard
//!
//! Assigned tasks with a status filter and a sort selector.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{filter_tasks, sort_tasks_by, SortOption, StatusFilter};

use super::TaskTable;

#[component]
pub fn EmployeePage() -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(StatusFilter::All);
    let (sort, set_sort) = signal(SortOption::DueAsc);

    let tasks = Signal::derive(move || {
        let filtered = filter_tasks(&store.tasks().get(), filter.get());
        sort_tasks_by(&filtered, sort.get())
    });

    view! {
        <section class="employee-page">
            <h2>"My tasks"</h2>

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

                <select
                    prop:value=move || sort.get().as_str().to_string()
                    on:change=move |ev| set_sort.set(SortOption::parse(&event_target_value(&ev)))
                >
                    {SortOption::ALL.iter().map(|o| {
                        let o = *o;
                        view! {
                            <option value=o.as_str() selected=move || sort.get() == o>
                                {o.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <TaskTable tasks=tasks />

            <p class="task-count">{move || format!("{} tasks", tasks.get().len())}</p>
        </section>
    }
}
