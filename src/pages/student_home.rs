//! Student landing page.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn StudentHomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    // Sessions restored from storage may predate the profile slot; fill it
    // best-effort once.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if session.with_untracked(|s| s.profile().is_some()) {
            return;
        }
        leptos::task::spawn_local(async move {
            let mut store = session.get_untracked();
            if store.fetch_profile(&crate::net::auth::HttpGateway).await.is_some() {
                session.set(store);
            }
        });
    });

    let display_name =
        move || session.with(|s| s.profile().map_or_else(String::new, |p| p.display_name.clone()));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut store = session.get_untracked();
            store.logout(&crate::net::auth::HttpGateway).await;
            // The guard sees the cleared session and redirects to login.
            session.set(store);
        });
    };

    view! {
        <div class="home-page home-page--student">
            <header class="home-page__header">
                <h1>{move || format!("Welcome, {}", display_name())}</h1>
                <button class="btn" on:click=on_logout>"Sign out"</button>
            </header>
            <nav class="home-page__nav">
                <a href="/student/experiment-list">"My experiments"</a>
                <a href="/student/profile">"Profile"</a>
            </nav>
        </div>
    }
}
