//! Task Table Component
//!
//! Task rows with editable status/priority and per-row save. Delete is
//! shown only for roles that may remove tasks.

use leptos::prelude::*;

use crate::actions;
use crate::models::{Task, TaskPriority, TaskStatus};
use crate::store::use_app_store;

#[component]
pub fn TaskTable(
    tasks: Signal<Vec<Task>>,
    #[prop(optional)] can_delete: bool,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Priority"</th>
                    <th>"Status"</th>
                    <th>"Due"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || tasks.get()
                    key=|t| t.id
                    children=move |task| {
                        let task_id = task.id;
                        let (status_choice, set_status_choice) = signal(task.status);
                        let (priority_choice, set_priority_choice) =
                            signal(task.priority.unwrap_or(TaskPriority::Medium));

                        view! {
                            <tr>
                                <td class="task-title">
                                    {task.title.clone()}
                                    {task.description.clone().map(|d| view! {
                                        <p class="task-description">{d}</p>
                                    })}
                                </td>
                                <td>
                                    <select
                                        prop:value=move || priority_choice.get().as_str().to_string()
                                        on:change=move |ev| {
                                            if let Some(p) = TaskPriority::parse(&event_target_value(&ev)) {
                                                set_priority_choice.set(p);
                                            }
                                        }
                                    >
                                        {TaskPriority::ALL.iter().map(|p| {
                                            let p = *p;
                                            view! {
                                                <option value=p.as_str() selected=move || priority_choice.get() == p>
                                                    {p.as_str()}
                                                </option>
                                            }
                                        }).collect_view()}
                                    </select>
                                </td>
                                <td>
                                    <select
                                        prop:value=move || status_choice.get().as_str().to_string()
                                        on:change=move |ev| {
                                            if let Some(s) = TaskStatus::parse(&event_target_value(&ev)) {
                                                set_status_choice.set(s);
                                            }
                                        }
                                    >
                                        {TaskStatus::ALL.iter().map(|s| {
                                            let s = *s;
                                            view! {
                                                <option value=s.as_str() selected=move || status_choice.get() == s>
                                                    {s.as_str()}
                                                </option>
                                            }
                                        }).collect_view()}
                                    </select>
                                </td>
                                <td>
                                    {task.due_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}
                                </td>
                                <td>
                                    <button on:click=move |_| {
                                        actions::update_task(
                                            store,
                                            task_id,
                                            Some(status_choice.get()),
                                            Some(priority_choice.get()),
                                        )
                                    }>
                                        "Save"
                                    </button>
                                    {can_delete.then(|| view! {
                                        <button
                                            class="danger"
                                            on:click=move |_| actions::delete_task(store, task_id)
                                        >
                                            "Delete"
                                        </button>
                                    })}
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
