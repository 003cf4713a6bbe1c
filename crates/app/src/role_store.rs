use shared_types::UserRole;

use crate::storage::KeyValueStore;

/// Storage key holding the signed-in user's role.
pub const ROLE_KEY: &str = "userRole";

/// The role mirrored into client storage at sign-in and read by routing.
///
/// Only the four role literals are ever written; anything else found under
/// the key reads back as no role.
#[derive(Debug, Clone)]
pub struct RoleStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RoleStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<UserRole> {
        let raw = self.store.get(ROLE_KEY)?;
        let role = UserRole::parse(&raw);
        if role.is_none() {
            tracing::warn!(value = %raw, "ignoring unrecognized stored role");
        }
        role
    }

    pub fn save(&self, role: UserRole) {
        self.store.set(ROLE_KEY, role.as_str());
    }

    pub fn clear(&self) {
        self.store.remove(ROLE_KEY);
    }
}
