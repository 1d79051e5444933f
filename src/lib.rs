//! # sitechat-client
//!
//! Client-side core for the "talk to your website" chat application: session
//! and authentication state, the login call against the remote API, and the
//! route guard that gates navigation on authentication.
//!
//! The UI layer, theming, and the remote authentication service itself are
//! external collaborators; this crate owns only the stateful contract between
//! them.

pub mod config;
pub mod net;
pub mod routing;
pub mod state;
