//! Teacher landing page.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn TeacherHomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let display_name =
        move || session.with(|s| s.profile().map_or_else(String::new, |p| p.display_name.clone()));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut store = session.get_untracked();
            store.logout(&crate::net::auth::HttpGateway).await;
            session.set(store);
        });
    };

    view! {
        <div class="home-page home-page--teacher">
            <header class="home-page__header">
                <h1>{move || format!("Welcome, {}", display_name())}</h1>
                <button class="btn" on:click=on_logout>"Sign out"</button>
            </header>
            <nav class="home-page__nav">
                <a href="/teacher/experiment-manage">"Manage experiments"</a>
            </nav>
        </div>
    }
}
