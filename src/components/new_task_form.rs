//! New Task Form Component
//!
//! Create-task form for manager-like dashboards. The team-lead instance
//! additionally checks that the assignee belongs to the lead's team
//! before any request goes out.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::models::{CreateTaskRequest, TaskPriority, TaskStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTaskForm(#[prop(optional)] require_team_member: bool) -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::Medium);
    let (due_date, set_due_date) = signal(String::new());
    let (assignee_id, set_assignee_id) = signal(String::new());
    let (local_error, set_local_error) = signal(String::new());
    let (local_message, set_local_message) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(String::new());
        set_local_message.set(String::new());

        let title_value = title.get().trim().to_string();
        let assignee: i64 = assignee_id.get().parse().unwrap_or(0);
        let Some(creator) = store.user_id().get() else {
            return;
        };
        if title_value.is_empty() || assignee == 0 {
            set_local_error.set("Title and assignee are required".to_string());
            return;
        }

        let description_value = description.get().trim().to_string();
        let req = CreateTaskRequest {
            title: title_value,
            description: (!description_value.is_empty()).then_some(description_value),
            priority: Some(priority.get()),
            status: Some(TaskStatus::Pending),
            start_date: None,
            due_date: due_date.get().parse().ok(),
            created_by_user_id: creator,
            assigned_to_user_id: assignee,
        };

        let result = if require_team_member {
            actions::create_task_for_team(store, req)
        } else {
            actions::create_task(store, req);
            Ok(())
        };
        match result {
            Ok(()) => {
                set_local_message.set("Task submitted".to_string());
                set_title.set(String::new());
                set_description.set(String::new());
                set_priority.set(TaskPriority::Medium);
                set_due_date.set(String::new());
                set_assignee_id.set(String::new());
            }
            Err(err) => set_local_error.set(err.to_string()),
        }
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <div class="new-task-row">
                <select
                    prop:value=move || priority.get().as_str().to_string()
                    on:change=move |ev| {
                        if let Some(p) = TaskPriority::parse(&event_target_value(&ev)) {
                            set_priority.set(p);
                        }
                    }
                >
                    {TaskPriority::ALL.iter().map(|p| {
                        let p = *p;
                        view! {
                            <option value=p.as_str() selected=move || priority.get() == p>
                                {p.as_str()}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />

                <select
                    prop:value=move || assignee_id.get()
                    on:change=move |ev| set_assignee_id.set(event_target_value(&ev))
                >
                    <option value="">"Select assignee"</option>
                    <For
                        each=move || store.employees().get()
                        key=|e| e.id
                        children=move |e| {
                            view! {
                                <option value=e.id.to_string()>
                                    {format!("{} ({})", e.full_name, e.email)}
                                </option>
                            }
                        }
                    />
                </select>

                <button type="submit">"Create task"</button>
            </div>

            {move || { let e = local_error.get(); (!e.is_empty()).then(|| view! { <p class="error">{e}</p> }) }}
            {move || { let m = local_message.get(); (!m.is_empty()).then(|| view! { <p class="message">{m}</p> }) }}
        </form>
    }
}
