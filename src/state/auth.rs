//! Session store — identity and session-selection state for one client.
//!
//! LIFECYCLE
//! =========
//! Created with all fields empty when the client starts; mutated only by
//! `login`, `logout`, `set_sessions`, `set_selected_session`; reset to the
//! empty state by `logout`. There is no persistence layer, so a restart
//! re-initializes to the unauthenticated state.
//!
//! CONCURRENCY
//! ===========
//! `login` takes `&mut self`, so overlapping login calls cannot be issued
//! against one store; the borrow serializes them. Identity fields are
//! written only after the remote call resolves successfully, so a failed
//! login never leaves a partial mutation behind.

use serde_json::Value;

use crate::net::api::{AuthApi, AuthError};

/// Single source of truth for the current user's identity and session
/// selection.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    username: Option<String>,
    user_id: Option<Value>,
    sessions: Option<Vec<Value>>,
    selected_session: Option<Value>,
}

impl SessionStore {
    /// A fresh, unauthenticated store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user is currently logged in. Derived from `username` on
    /// every call, never cached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Authenticate as `username` via the remote service.
    ///
    /// `username` and `user_id` are written only after the remote call
    /// succeeds; on failure every field retains its pre-call value.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the remote call fails; the store is left
    /// unchanged.
    pub async fn login(&mut self, api: &dyn AuthApi, username: &str) -> Result<(), AuthError> {
        let response = api.login(username).await.inspect_err(|e| {
            tracing::warn!(%username, error = %e, "login failed");
        })?;

        self.username = Some(username.to_owned());
        self.user_id = Some(response.user_id);
        tracing::info!(%username, "login succeeded");
        Ok(())
    }

    /// Clear identity and session-selection state. Always succeeds.
    pub fn logout(&mut self) {
        *self = Self::default();
        tracing::debug!("session cleared");
    }

    /// Replace the loaded session list. No validation is performed.
    pub fn set_sessions(&mut self, list: Option<Vec<Value>>) {
        self.sessions = list;
    }

    /// Replace the selected session. No validation is performed.
    pub fn set_selected_session(&mut self, item: Option<Value>) {
        self.selected_session = item;
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&Value> {
        self.user_id.as_ref()
    }

    #[must_use]
    pub fn sessions(&self) -> Option<&[Value]> {
        self.sessions.as_deref()
    }

    #[must_use]
    pub fn selected_session(&self) -> Option<&Value> {
        self.selected_session.as_ref()
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
