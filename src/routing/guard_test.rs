use super::*;
use crate::net::api::{AuthApi, AuthError, LoginResponse};
use async_trait::async_trait;
use serde_json::json;

struct AcceptingApi;

#[async_trait]
impl AuthApi for AcceptingApi {
    async fn login(&self, _username: &str) -> Result<LoginResponse, AuthError> {
        Ok(LoginResponse { user_id: json!(1) })
    }
}

async fn authenticated_store() -> SessionStore {
    let mut store = SessionStore::new();
    store.login(&AcceptingApi, "alice").await.unwrap();
    store
}

// =============================================================================
// Unauthenticated
// =============================================================================

#[test]
fn unauthenticated_gated_path_redirects() {
    let store = SessionStore::new();
    assert_eq!(
        check_navigation(&store, "/dashboard"),
        RouteDecision::Redirect { to: LOGIN_PATH.to_owned() }
    );
}

#[test]
fn unauthenticated_root_path_redirects() {
    let store = SessionStore::new();
    assert_eq!(
        check_navigation(&store, "/"),
        RouteDecision::Redirect { to: LOGIN_PATH.to_owned() }
    );
}

#[test]
fn unauthenticated_login_path_allowed() {
    let store = SessionStore::new();
    assert_eq!(check_navigation(&store, LOGIN_PATH), RouteDecision::Allow);
}

#[test]
fn login_path_with_suffix_is_still_gated() {
    // Only the exact reserved path is exempt.
    let store = SessionStore::new();
    assert_eq!(
        check_navigation(&store, "/login/extra"),
        RouteDecision::Redirect { to: LOGIN_PATH.to_owned() }
    );
}

// =============================================================================
// Authenticated
// =============================================================================

#[tokio::test]
async fn authenticated_gated_path_allowed() {
    let store = authenticated_store().await;
    assert_eq!(check_navigation(&store, "/dashboard"), RouteDecision::Allow);
}

#[tokio::test]
async fn authenticated_login_path_allowed() {
    let store = authenticated_store().await;
    assert_eq!(check_navigation(&store, LOGIN_PATH), RouteDecision::Allow);
}

#[tokio::test]
async fn guard_reevaluates_after_logout() {
    let mut store = authenticated_store().await;
    assert_eq!(check_navigation(&store, "/settings"), RouteDecision::Allow);

    store.logout();
    assert_eq!(
        check_navigation(&store, "/settings"),
        RouteDecision::Redirect { to: LOGIN_PATH.to_owned() }
    );
}
