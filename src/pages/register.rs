//! Registration page for new student/teacher accounts.

use leptos::prelude::*;

use crate::net::types::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let realname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role_choice = RwSignal::new("student".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = RegisterRequest {
            username: username.get().trim().to_owned(),
            password: password.get(),
            realname: realname.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            user_type: role_choice.get(),
        };
        if request.username.is_empty() || request.password.is_empty() {
            info.set("Username and password are required.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::register(&request).await {
                Ok(resp) if resp.code == 200 => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Ok(resp) => {
                    info.set(resp.message);
                    busy.set(false);
                }
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create account"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Real name"
                        prop:value=move || realname.get()
                        on:input=move |ev| realname.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <select
                        class="register-select"
                        on:change=move |ev| role_choice.set(event_target_value(&ev))
                    >
                        <option value="student" selected>"Student"</option>
                        <option value="teacher">"Teacher"</option>
                    </select>
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="register-info">{move || info.get()}</p>
                <a href="/" class="register-login-link">"Back to sign in"</a>
            </div>
        </div>
    }
}
