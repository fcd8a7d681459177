//! Root application component with routing, guard, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    experiment_list::ExperimentListPage, experiment_manage::ExperimentManagePage,
    login::LoginPage, profile::StudentProfilePage, register::RegisterPage,
    student_home::StudentHomePage, teacher_home::TeacherHomePage,
};
use crate::state::experiments::ExperimentsState;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and experiment-list contexts and sets up
/// client-side routing. The session rehydrates from durable storage here,
/// once, at construction.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::default());
    let experiments = RwSignal::new(ExperimentsState::default());

    provide_context(session);
    provide_context(experiments);

    view! {
        <Stylesheet id="leptos" href="/pkg/labtrack.css"/>
        <Title text="LabTrack"/>

        <Router>
            <GuardedRoutes/>
        </Router>
    }
}

/// Route table plus guard installation. Lives below `<Router>` so the guard
/// can observe the current location and issue redirects.
#[component]
fn GuardedRoutes() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = leptos_router::hooks::use_navigate();
    crate::router::install_route_guard(session, navigate);

    view! {
        <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=LoginPage/>
            <Route path=StaticSegment("register") view=RegisterPage/>
            <Route
                path=(StaticSegment("student"), StaticSegment("home"))
                view=StudentHomePage
            />
            <Route
                path=(StaticSegment("student"), StaticSegment("experiment-list"))
                view=ExperimentListPage
            />
            <Route
                path=(StaticSegment("student"), StaticSegment("profile"))
                view=StudentProfilePage
            />
            <Route
                path=(StaticSegment("teacher"), StaticSegment("home"))
                view=TeacherHomePage
            />
            <Route
                path=(StaticSegment("teacher"), StaticSegment("experiment-manage"))
                view=ExperimentManagePage
            />
        </Routes>
    }
}
