//! Notification Panel Component
//!
//! Bell dropdown. Opening it marks everything read (handled by the
//! toggle action); closing is purely local.

use leptos::prelude::*;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.show_notification_panel().get().then(|| view! {
            <div class="notification-panel">
                <div class="notification-panel-header">
                    <span>"Notifications"</span>
                    <button on:click=move |_| actions::close_notification_panel(store)>
                        "Close"
                    </button>
                </div>
                {move || {
                    let list = store.notifications().get();
                    if list.is_empty() {
                        view! { <p class="empty">"No notifications yet"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="notification-list">
                                <For
                                    each=move || store.notifications().get()
                                    key=|n| n.id
                                    children=move |n| {
                                        let row_class = if n.is_read {
                                            "notification read"
                                        } else {
                                            "notification unread"
                                        };
                                        view! {
                                            <li class=row_class>
                                                <span class="notification-type">{n.kind.label()}</span>
                                                <span class="notification-message">{n.message.clone()}</span>
                                                {n.task_title.clone().map(|t| view! {
                                                    <span class="notification-task">{t}</span>
                                                })}
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }.into_any()
                    }
                }}
            </div>
        })}
    }
}
