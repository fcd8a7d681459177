//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `experiments`) so pages can depend
//! on small focused models. The session store is the only one with durable
//! persistence.

pub mod experiments;
pub mod session;
