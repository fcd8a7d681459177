//! Networking modules: REST wrappers over the experiment-platform API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the shared request plumbing (session headers, unauthorized
//! interception); the sibling modules are thin endpoint wrappers; `types`
//! defines the wire schema.

pub mod auth;
pub mod class;
pub mod experiment;
pub mod http;
pub mod types;
pub mod upload;
