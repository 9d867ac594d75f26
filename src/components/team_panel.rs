//! Team Panel Component
//!
//! Team lead's team management: create the team, add members from the
//! employee directory, list current members.

use leptos::prelude::*;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TeamPanel() -> impl IntoView {
    let store = use_app_store();

    let (team_name, set_team_name) = signal(String::new());
    let (add_user_id, set_add_user_id) = signal(String::new());
    let (local_error, set_local_error) = signal(String::new());

    let save_team = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = team_name.get().trim().to_string();
        if name.is_empty() {
            set_local_error.set("Team name is required".to_string());
            return;
        }
        set_local_error.set(String::new());
        actions::create_team(store, name);
        set_team_name.set(String::new());
    };

    let add_member = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user_id: i64 = add_user_id.get().parse().unwrap_or(0);
        if user_id == 0 {
            set_local_error.set("Pick a user to add".to_string());
            return;
        }
        set_local_error.set(String::new());
        actions::add_team_member(store, user_id);
        set_add_user_id.set(String::new());
    };

    view! {
        <section class="team-panel">
            <h3>"My team"</h3>

            {move || match store.team().get() {
                Some(team) => view! { <p class="team-name">{team.name}</p> }.into_any(),
                None => view! {
                    <form class="team-create-form" on:submit=save_team>
                        <input
                            type="text"
                            placeholder="Team name"
                            prop:value=move || team_name.get()
                            on:input=move |ev| set_team_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"Create team"</button>
                    </form>
                }.into_any(),
            }}

            <form class="member-add-form" on:submit=add_member>
                <select
                    prop:value=move || add_user_id.get()
                    on:change=move |ev| set_add_user_id.set(event_target_value(&ev))
                >
                    <option value="">"Pick a user"</option>
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
                <button type="submit">"Add member"</button>
            </form>

            <ul class="member-list">
                <For
                    each=move || store.team_members().get()
                    key=|m| m.user_id
                    children=move |m| {
                        view! {
                            <li>{format!("{} ({})", m.full_name, m.email)}</li>
                        }
                    }
                />
            </ul>

            {move || { let e = local_error.get(); (!e.is_empty()).then(|| view! { <p class="error">{e}</p> }) }}
        </section>
    }
}
