use std::net::SocketAddr;

use server::identity::{IdentityProvider, MemoryIdentityProvider};
use shared_types::{ActivitiesConfig, SignUpRequest, UserProfile, UserRole};

/// Fresh provider per test; nothing is shared between tests.
pub fn provider() -> MemoryIdentityProvider {
    MemoryIdentityProvider::new()
}

pub fn sign_up(
    idp: &MemoryIdentityProvider,
    email: &str,
    password: &str,
    role: UserRole,
) -> UserProfile {
    idp.sign_up(SignUpRequest {
        email: email.to_string(),
        password: password.to_string(),
        display_name: "Test User".to_string(),
        role,
    })
    .expect("sign-up should succeed")
}

/// Serve `router` on an ephemeral local port and return its address.
pub async fn serve(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    addr
}

pub fn activities_config(endpoint: Option<String>) -> ActivitiesConfig {
    ActivitiesConfig {
        endpoint,
        timeout_secs: 2,
    }
}
