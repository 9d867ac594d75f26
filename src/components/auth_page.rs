//! Auth Page Component
//!
//! Login and signup forms. A successful login installs the session and
//! kicks off role-based loading; signup switches back to the login form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api;
use crate::models::{CreateUserRequest, Role};
use crate::store::use_app_store;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Signup,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let store = use_app_store();

    let (mode, set_mode) = signal(AuthMode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (role, set_role) = signal(Role::Employee);
    let (error, set_error) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let switch_mode = move |next: AuthMode| {
        set_mode.set(next);
        set_error.set(String::new());
        set_message.set(String::new());
    };

    let do_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_message.set(String::new());

        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            set_error.set("Email and password are required.".to_string());
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(res) => {
                    set_password.set(String::new());
                    actions::handle_login_response(store, &res);
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    };

    let do_signup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_message.set(String::new());

        if full_name.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            set_error.set("Full name, email, and password are required.".to_string());
            return;
        }

        let req = CreateUserRequest {
            full_name: full_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            role: role.get(),
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::signup(&req).await {
                Ok(()) => {
                    set_message.set("Account created. Please log in.".to_string());
                    set_password.set(String::new());
                    set_mode.set(AuthMode::Login);
                }
                Err(_) => set_error.set("Signup failed. Try a different email.".to_string()),
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <h1>"TaskAsk"</h1>
            <p class="tagline">"Employee Task & Performance Management System"</p>

            <div class="auth-mode-row">
                <button
                    class=move || if mode.get() == AuthMode::Login { "mode-btn active" } else { "mode-btn" }
                    on:click=move |_| switch_mode(AuthMode::Login)
                >
                    "Log in"
                </button>
                <button
                    class=move || if mode.get() == AuthMode::Signup { "mode-btn active" } else { "mode-btn" }
                    on:click=move |_| switch_mode(AuthMode::Signup)
                >
                    "Sign up"
                </button>
            </div>

            {move || (mode.get() == AuthMode::Signup).then(|| view! {
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
            })}

            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />

            {move || if mode.get() == AuthMode::Login {
                view! {
                    <form on:submit=do_login>
                        <button type="submit" disabled=move || loading.get()>"Log in"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <form on:submit=do_signup>
                        <select
                            prop:value=move || role.get().as_str().to_string()
                            on:change=move |ev| {
                                if let Some(r) = Role::parse(&event_target_value(&ev)) {
                                    set_role.set(r);
                                }
                            }
                        >
                            {Role::ALL.iter().map(|r| {
                                let r = *r;
                                view! {
                                    <option value=r.as_str() selected=move || role.get() == r>
                                        {r.as_str()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        <button type="submit" disabled=move || loading.get()>"Create account"</button>
                    </form>
                }.into_any()
            }}

            {move || { let e = error.get(); (!e.is_empty()).then(|| view! { <p class="error">{e}</p> }) }}
            {move || { let m = message.get(); (!m.is_empty()).then(|| view! { <p class="message">{m}</p> }) }}
        </section>
    }
}
