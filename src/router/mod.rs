//! Client-side routing: the guard evaluated on every navigation attempt.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` owns the pure allow/redirect decision; this module wires it into
//! the Leptos router so every path change is intercepted before a page
//! renders.

pub mod guard;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::SessionStore;
use guard::GuardOutcome;

/// Install the route guard inside a `<Router>` context. Re-evaluates on
/// every path or session change and applies the resulting outcome.
pub fn install_route_guard<F>(session: RwSignal<SessionStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let outcome = session.with(|s| guard::evaluate(s, &path));
        match outcome {
            GuardOutcome::Allow => {}
            GuardOutcome::ResetAndAllow => session.update(SessionStore::reset),
            GuardOutcome::Redirect { path, replace } => {
                log::debug!("guard redirect to {path}");
                let options = NavigateOptions { replace, ..NavigateOptions::default() };
                navigate(&path, options);
            }
        }
    });
}
