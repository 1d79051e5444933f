//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is owned explicitly and passed to consumers (the route guard, the
//! UI layer) rather than living in an ambient global; there is one
//! [`auth::SessionStore`] per running client, created at startup and dropped
//! at exit.

pub mod auth;
