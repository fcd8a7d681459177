//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form submission) and
//! reads shared state from context. Navigation between them is mediated by
//! the route guard, never by the pages themselves.

pub mod experiment_list;
pub mod experiment_manage;
pub mod login;
pub mod profile;
pub mod register;
pub mod student_home;
pub mod teacher_home;
