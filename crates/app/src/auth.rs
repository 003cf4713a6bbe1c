use dioxus::prelude::*;
use shared_types::{UserProfile, UserRole, DEFAULT_DASHBOARD_PATH};

use crate::role_store::RoleStore;
use crate::routes::Route;
use crate::storage::{load_json, save_json, BrowserStorage, KeyValueStore};

/// Storage key for the signed-in profile. Stands in for the session the
/// identity provider would keep between page loads.
pub const SESSION_KEY: &str = "authSession";

/// Session state shared by every route.
///
/// `loading` stays `true` until the stored session has been read on the
/// client, so guards neither render nor redirect before then.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthContext {
    pub user: Signal<Option<UserProfile>>,
    pub role: Signal<Option<UserRole>>,
    pub loading: Signal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            user: Signal::new(None),
            role: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Start a session for `profile` and record its role in the role store.
    pub fn sign_in_with(&mut self, profile: UserProfile) {
        persist_session(&BrowserStorage, &profile);
        tracing::info!(uid = %profile.uid, role = %profile.role, "signed in");
        self.role.set(Some(profile.role));
        self.user.set(Some(profile));
        self.loading.set(false);
    }

    /// Replace the profile after an edit without touching the role store.
    pub fn update_user(&mut self, profile: UserProfile) {
        save_json(&BrowserStorage, SESSION_KEY, &profile);
        self.user.set(Some(profile));
    }

    /// End the session and forget the stored role.
    pub fn sign_out(&mut self) {
        clear_session(&BrowserStorage);
        self.user.set(None);
        self.role.set(None);
        tracing::info!("signed out");
    }

    fn restore(&mut self) {
        let (user, role) = restore_session(&BrowserStorage);
        let uid = user.as_ref().map(|u| u.uid.clone());
        self.user.set(user);
        self.role.set(role);
        self.loading.set(false);

        if let Some(uid) = uid {
            let mut auth = *self;
            spawn(async move { auth.refresh(uid).await });
        }
    }

    /// Pull the provider's copy of the profile. The stored session stays
    /// as it is when the provider no longer knows the account.
    async fn refresh(&mut self, uid: String) {
        match server::api::get_profile(uid).await {
            Ok(profile) => {
                if self.user.peek().as_ref() != Some(&profile) {
                    self.update_user(profile);
                }
            }
            Err(e) => tracing::debug!(error = %e, "stored session not refreshed"),
        }
    }

    /// Dashboard path for the current role.
    pub fn dashboard_url(&self) -> &'static str {
        self.role
            .read()
            .map(|r| r.dashboard_path())
            .unwrap_or(DEFAULT_DASHBOARD_PATH)
    }
}

/// Write the session profile and mirror its role.
pub fn persist_session<S: KeyValueStore + Clone>(store: &S, profile: &UserProfile) {
    save_json(store, SESSION_KEY, profile);
    RoleStore::new(store.clone()).save(profile.role);
}

pub fn clear_session<S: KeyValueStore + Clone>(store: &S) {
    store.remove(SESSION_KEY);
    RoleStore::new(store.clone()).clear();
}

/// Read back a stored session.
///
/// The role comes from the role store when it holds a valid value,
/// otherwise from the stored profile. Without a profile there is no
/// session and no role.
pub fn restore_session<S: KeyValueStore + Clone>(
    store: &S,
) -> (Option<UserProfile>, Option<UserRole>) {
    let Some(profile) = load_json::<UserProfile, _>(store, SESSION_KEY) else {
        return (None, None);
    };
    let role = RoleStore::new(store.clone()).load().unwrap_or(profile.role);
    (Some(profile), Some(role))
}

/// Provide the auth context at the app root and restore any stored session
/// once mounted on the client.
pub fn use_auth_provider() -> AuthContext {
    let mut auth = use_context_provider(AuthContext::new);
    use_effect(move || auth.restore());
    auth
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Dashboard path for the signed-in user's role, defaulting to the
/// employee dashboard.
pub fn use_dashboard_url() -> &'static str {
    use_auth().dashboard_url()
}

/// Replace the current history entry with the dashboard for `role`.
pub fn redirect_to_dashboard(role: Option<UserRole>) {
    navigator().replace(Route::dashboard_for(role));
}
