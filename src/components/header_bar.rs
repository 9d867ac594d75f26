//! Header Bar Component
//!
//! Product title, logged-in identity, notification bell and logout.

use leptos::prelude::*;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

use super::NotificationPanel;

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="header-bar">
            <div class="brand">
                <h1>"TaskAsk"</h1>
                <p class="tagline">"Employee Task & Performance Management System"</p>
            </div>
            <div class="session-info">
                <span class="user-email">{move || store.user_email().get()}</span>
                <span class="user-role">
                    {move || store.user_role().get().map(|r| r.as_str()).unwrap_or("")}
                </span>
                <button
                    class="bell-btn"
                    on:click=move |_| actions::toggle_notification_panel(store)
                >
                    "Notifications"
                    {move || {
                        let count = store.unread_count().get();
                        (count > 0).then(|| view! { <span class="badge">{count}</span> })
                    }}
                </button>
                <button class="logout-btn" on:click=move |_| actions::logout(store)>
                    "Logout"
                </button>
            </div>
            <NotificationPanel />
        </header>
    }
}
