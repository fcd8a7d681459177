//! Student profile page: the landing target of the profile-completion gate.
//!
//! The guard forwards first-time students here with the original target in
//! the `redirect` query parameter and `first_login=true`. Saving the form
//! marks the profile complete and returns to that target.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::ProfileUpdate;
use crate::state::session::SessionStore;

#[component]
pub fn StudentProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let query = use_query_map();

    let first_login =
        move || query.with(|q| q.get("first_login").as_deref() == Some("true"));

    let (initial_name, initial_email, initial_student_id, initial_class_id) =
        session.with_untracked(|s| {
            s.profile().map_or_else(
                || (String::new(), String::new(), String::new(), String::new()),
                |p| {
                    (
                        p.display_name.clone(),
                        p.email.clone(),
                        p.student_id.clone().unwrap_or_default(),
                        p.class_id.map_or_else(String::new, |id| id.to_string()),
                    )
                },
            )
        });

    let realname = RwSignal::new(initial_name);
    let email = RwSignal::new(initial_email);
    let student_id = RwSignal::new(initial_student_id);
    let class_id = RwSignal::new(initial_class_id);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let password_info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = ProfileUpdate {
            realname: realname.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            student_id: Some(student_id.get().trim().to_owned()).filter(|s| !s.is_empty()),
            class_id: class_id.get().trim().parse().ok(),
        };
        if update.realname.is_empty() || update.email.is_empty() {
            info.set("Real name and email are required.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let target = query
                .with_untracked(|q| q.get("redirect"))
                .unwrap_or_else(|| "/student/home".to_owned());
            leptos::task::spawn_local(async move {
                match crate::net::auth::update_profile(&update).await {
                    Ok(resp) if resp.code == 200 => {
                        let mut store = session.get_untracked();
                        if let Some(profile) = store.profile() {
                            let mut profile = profile.clone();
                            profile.display_name = update.realname.clone();
                            profile.email = update.email.clone();
                            profile.student_id = update.student_id.clone();
                            profile.class_id = update.class_id;
                            profile.profile_completed = true;
                            store.apply_profile(profile);
                            session.set(store);
                        }
                        navigate(&target, leptos_router::NavigateOptions::default());
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
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = update;
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let old_value = old_password.get();
        let new_value = new_password.get();
        if old_value.is_empty() || new_value.is_empty() {
            password_info.set("Fill in both password fields.".to_owned());
            return;
        }
        password_info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::change_password(&old_value, &new_value).await {
                Ok(resp) if resp.code == 200 => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    password_info.set("Password updated.".to_owned());
                }
                Ok(resp) => password_info.set(resp.message),
                Err(err) => password_info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (old_value, new_value);
    };

    view! {
        <div class="profile-page">
            <Show when=first_login>
                <p class="profile-page__banner">
                    "Complete your profile before using the platform."
                </p>
            </Show>
            <h1>"My profile"</h1>
            <form class="profile-form" on:submit=on_save>
                <input
                    class="profile-input"
                    type="text"
                    placeholder="Real name"
                    prop:value=move || realname.get()
                    on:input=move |ev| realname.set(event_target_value(&ev))
                />
                <input
                    class="profile-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="profile-input"
                    type="text"
                    placeholder="Student ID"
                    prop:value=move || student_id.get()
                    on:input=move |ev| student_id.set(event_target_value(&ev))
                />
                <input
                    class="profile-input"
                    type="text"
                    placeholder="Class ID"
                    prop:value=move || class_id.get()
                    on:input=move |ev| class_id.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save profile"
                </button>
            </form>
            <p class="profile-info">{move || info.get()}</p>

            <h2>"Change password"</h2>
            <form class="password-form" on:submit=on_change_password>
                <input
                    class="profile-input"
                    type="password"
                    placeholder="Current password"
                    prop:value=move || old_password.get()
                    on:input=move |ev| old_password.set(event_target_value(&ev))
                />
                <input
                    class="profile-input"
                    type="password"
                    placeholder="New password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Update password"</button>
            </form>
            <p class="profile-info">{move || password_info.get()}</p>
        </div>
    }
}
