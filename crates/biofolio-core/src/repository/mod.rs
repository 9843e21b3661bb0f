//! Store trait definitions (ports).
//!
//! The services only talk to these traits, so a session can be backed by any
//! implementation. `crate::session::SessionState` is the in-memory one.

pub mod biography;
