//! TaskAsk Frontend App
//!
//! Provides the global store, restores any persisted session, and
//! switches between the auth page and the role dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{AdminPage, AuthPage, EmployeePage, HeaderBar, ManagerPage, TeamLeadPage};
use crate::models::Role;
use crate::store::{is_logged_in, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    // Pick up a persisted session before the first render; this also
    // re-triggers role-based loading
    actions::restore_session(store);

    view! {
        <div class="app-layout">
            {move || if !is_logged_in(&store) {
                view! { <AuthPage /> }.into_any()
            } else {
                view! {
                    <div class="app-shell">
                        <HeaderBar />

                        <div class="messages">
                            {move || {
                                let e = store.last_error().get();
                                (!e.is_empty()).then(|| view! { <p class="error">{e}</p> })
                            }}
                            {move || {
                                let m = store.last_message().get();
                                (!m.is_empty()).then(|| view! { <p class="message">{m}</p> })
                            }}
                        </div>

                        <main class="main-content">
                            {move || match store.user_role().get() {
                                Some(Role::Manager) => view! { <ManagerPage /> }.into_any(),
                                Some(Role::TeamLead) => view! { <TeamLeadPage /> }.into_any(),
                                Some(Role::Admin) => view! { <AdminPage /> }.into_any(),
                                _ => view! { <EmployeePage /> }.into_any(),
                            }}
                        </main>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
