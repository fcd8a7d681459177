//! Login page: credential form with a student/teacher role choice.
//!
//! A successful login only mutates the session store; the route guard
//! observes the new session and bounces `/` to the matching role home.

use leptos::prelude::*;

use crate::state::session::{Role, SessionStore};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role_choice = RwSignal::new("student".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let selected = Role::parse(&role_choice.get_untracked());
            let mut store = session.get_untracked();
            match store
                .login(&crate::net::auth::HttpGateway, &username_value, &password_value, selected)
                .await
            {
                Ok(()) => {
                    info.set(String::new());
                    // The guard redirects to the role home on the next
                    // evaluation of the current (public) path.
                    session.set(store);
                }
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LabTrack"</h1>
                <p class="login-card__subtitle">"Experiment management platform"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-select"
                        on:change=move |ev| role_choice.set(event_target_value(&ev))
                    >
                        <option value="student" selected>"Student"</option>
                        <option value="teacher">"Teacher"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="login-info">{move || info.get()}</p>
                <a href="/register" class="login-register-link">"Create an account"</a>
            </div>
        </div>
    }
}
