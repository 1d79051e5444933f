//! Client-side routing — the navigation guard.

pub mod guard;
