//! Route guard decision logic.
//!
//! DESIGN
//! ======
//! Evaluated fresh on every navigation attempt from the current session
//! alone: no network, no stored state between attempts, and exactly one
//! outcome per evaluation. Redirect targets mirror the role homes; the
//! profile-completion gate funnels incomplete student profiles to the
//! profile page with the original target carried in the query string.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, SessionStore};

pub const LOGIN_PATH: &str = "/";
pub const STUDENT_HOME: &str = "/student/home";
pub const TEACHER_HOME: &str = "/teacher/home";
pub const STUDENT_PROFILE: &str = "/student/profile";

/// Terminal outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation proceed.
    Allow,
    /// The stored session carries an unusable role: clear it, then let the
    /// navigation proceed to the public target (fail open to login).
    ResetAndAllow,
    /// Navigate elsewhere instead. `replace` rewrites the history entry so
    /// the back button does not bounce off the gate.
    Redirect { path: String, replace: bool },
}

fn redirect(path: impl Into<String>) -> GuardOutcome {
    GuardOutcome::Redirect { path: path.into(), replace: false }
}

fn is_public(path: &str) -> bool {
    path == LOGIN_PATH || path == "/register"
}

/// Decide whether `target` may render for the current session.
pub fn evaluate(session: &SessionStore, target: &str) -> GuardOutcome {
    if is_public(target) {
        if !session.is_authenticated() {
            return GuardOutcome::Allow;
        }
        return match session.role() {
            Role::Teacher => redirect(TEACHER_HOME),
            Role::Student => redirect(STUDENT_HOME),
            Role::Unknown => {
                log::debug!("authenticated session with unusable role, clearing");
                GuardOutcome::ResetAndAllow
            }
        };
    }

    if !session.is_authenticated() {
        log::debug!("unauthenticated access to {target}, redirecting to login");
        return redirect(LOGIN_PATH);
    }

    // Incomplete student profiles are funneled to the profile page before
    // anything else renders. Only profile paths themselves bypass the gate.
    if session.role() == Role::Student
        && !session.profile_completed()
        && !target.contains("/profile")
    {
        return GuardOutcome::Redirect {
            path: format!("{STUDENT_PROFILE}?redirect={target}&first_login=true"),
            replace: true,
        };
    }

    let is_teacher_route = target.starts_with("/teacher");
    let is_student_route = target.starts_with("/student");

    if is_teacher_route && session.role() != Role::Teacher {
        return redirect(STUDENT_HOME);
    }
    if is_student_route && session.role() != Role::Student {
        return redirect(TEACHER_HOME);
    }

    GuardOutcome::Allow
}
