//! Network layer — the client side of the remote authentication API.

pub mod api;
