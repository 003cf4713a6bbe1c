//! Identity provider seam.
//!
//! Workdesk delegates authentication to an external provider. The
//! `IdentityProvider` trait is the boundary; `MemoryIdentityProvider` is
//! the development stand-in. It keeps accounts in process memory, hashes
//! passwords with argon2, and "delivers" reset and verification codes to
//! an in-memory outbox (plus the log) instead of sending mail.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared_types::{
    AppError, ConfirmPasswordResetRequest, FederatedSignInRequest, MessageResponse, PlanTier,
    SignInRequest, SignUpRequest, UpdateProfileRequest, UserProfile, UserRole,
};

use crate::password::{hash_password, verify_password};

/// Message returned for every reset request so callers cannot learn which
/// emails have accounts.
pub const RESET_SENT_MESSAGE: &str =
    "If an account with that email exists, a password reset link has been sent.";

/// Delivered messages kept for inspection; older ones are dropped first.
pub const OUTBOX_LIMIT: usize = 100;

/// Operations the app needs from an authentication provider.
pub trait IdentityProvider: Send + Sync {
    fn sign_up(&self, request: SignUpRequest) -> Result<UserProfile, AppError>;
    fn sign_in(&self, request: SignInRequest) -> Result<UserProfile, AppError>;
    fn federated_sign_in(&self, request: FederatedSignInRequest) -> Result<UserProfile, AppError>;
    fn send_password_reset(&self, email: &str) -> Result<MessageResponse, AppError>;
    fn confirm_password_reset(
        &self,
        request: ConfirmPasswordResetRequest,
    ) -> Result<MessageResponse, AppError>;
    fn send_email_verification(&self, uid: &str) -> Result<MessageResponse, AppError>;
    fn confirm_email_verification(&self, code: &str) -> Result<UserProfile, AppError>;
    fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserProfile, AppError>;
    fn profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError>;
}

/// What a delivered code is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundKind {
    PasswordReset,
    EmailVerification,
}

/// A message the provider would have emailed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: String,
    pub kind: OutboundKind,
    pub code: String,
}

#[derive(Debug, Clone)]
struct Account {
    profile: UserProfile,
    password_hash: Option<String>,
    federated_provider: Option<String>,
}

#[derive(Default)]
struct Store {
    /// Keyed by normalized email.
    accounts: HashMap<String, Account>,
    /// Reset code -> normalized email.
    reset_codes: HashMap<String, String>,
    /// Verification code -> uid.
    verification_codes: HashMap<String, String>,
    outbox: Vec<OutboundMessage>,
}

impl Store {
    fn by_uid_mut(&mut self, uid: &str) -> Option<&mut Account> {
        self.accounts.values_mut().find(|a| a.profile.uid == uid)
    }

    /// Issue a fresh code of `kind` for `to`. Earlier codes of the same
    /// kind for that account stop working.
    fn deliver(&mut self, to: &str, kind: OutboundKind) -> String {
        let code = uuid::Uuid::new_v4().simple().to_string();
        let email = normalize_email(to);
        match kind {
            OutboundKind::PasswordReset => {
                self.reset_codes.retain(|_, owner| *owner != email);
                self.reset_codes.insert(code.clone(), email);
            }
            OutboundKind::EmailVerification => {
                if let Some(uid) = self.accounts.get(&email).map(|a| a.profile.uid.clone()) {
                    self.verification_codes.retain(|_, owner| *owner != uid);
                    self.verification_codes.insert(code.clone(), uid);
                }
            }
        }
        tracing::info!(to, ?kind, "identity message queued");
        tracing::debug!(to, ?kind, code = %code, "identity message code");

        if self.outbox.len() >= OUTBOX_LIMIT {
            let overflow = self.outbox.len() + 1 - OUTBOX_LIMIT;
            self.outbox.drain(..overflow);
        }
        self.outbox.push(OutboundMessage {
            to: to.to_string(),
            kind,
            code: code.clone(),
        });
        code
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn default_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// In-process identity provider for development and tests.
#[derive(Default)]
pub struct MemoryIdentityProvider {
    store: RwLock<Store>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::internal("Identity store unavailable"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::internal("Identity store unavailable"))
    }

    /// The most recent messages, oldest first, at most [`OUTBOX_LIMIT`].
    pub fn outbox(&self) -> Vec<OutboundMessage> {
        self.read().map(|s| s.outbox.clone()).unwrap_or_default()
    }

    /// Most recent code of `kind` delivered to `email`.
    pub fn last_code(&self, email: &str, kind: OutboundKind) -> Option<String> {
        let email = normalize_email(email);
        self.outbox()
            .into_iter()
            .rev()
            .find(|m| m.kind == kind && normalize_email(&m.to) == email)
            .map(|m| m.code)
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    fn sign_up(&self, request: SignUpRequest) -> Result<UserProfile, AppError> {
        let key = normalize_email(&request.email);
        let password_hash =
            hash_password(&request.password).map_err(|e| AppError::internal(e.to_string()))?;

        let mut store = self.write()?;
        if store.accounts.contains_key(&key) {
            return Err(AppError::conflict("An account with this email already exists"));
        }

        let profile = UserProfile {
            uid: uuid::Uuid::new_v4().to_string(),
            email: key.clone(),
            display_name: request.display_name.trim().to_string(),
            role: request.role,
            plan: PlanTier::Free,
            email_verified: false,
        };
        store.accounts.insert(
            key.clone(),
            Account {
                profile: profile.clone(),
                password_hash: Some(password_hash),
                federated_provider: None,
            },
        );
        store.deliver(&key, OutboundKind::EmailVerification);
        tracing::info!(uid = %profile.uid, role = %profile.role, "account created");
        Ok(profile)
    }

    fn sign_in(&self, request: SignInRequest) -> Result<UserProfile, AppError> {
        let store = self.read()?;
        let account = store
            .accounts
            .get(&normalize_email(&request.email))
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let Some(hash) = account.password_hash.as_deref() else {
            let provider = account.federated_provider.as_deref().unwrap_or("federated");
            return Err(AppError::unauthorized(format!(
                "This account uses {provider} sign-in. Please continue with {provider}."
            )));
        };

        let valid =
            verify_password(&request.password, hash).map_err(|e| AppError::internal(e.to_string()))?;
        if !valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }
        Ok(account.profile.clone())
    }

    fn federated_sign_in(&self, request: FederatedSignInRequest) -> Result<UserProfile, AppError> {
        let key = normalize_email(&request.email);
        let provider = request.provider.trim().to_lowercase();
        let mut store = self.write()?;

        if let Some(account) = store.accounts.get_mut(&key) {
            if account.federated_provider.is_none() {
                account.federated_provider = Some(provider);
            }
            // The federated provider has vouched for the address.
            account.profile.email_verified = true;
            return Ok(account.profile.clone());
        }

        let display_name = request
            .display_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| default_display_name(&key));
        let profile = UserProfile {
            uid: uuid::Uuid::new_v4().to_string(),
            email: key.clone(),
            display_name,
            role: UserRole::Employee,
            plan: PlanTier::Free,
            email_verified: true,
        };
        store.accounts.insert(
            key,
            Account {
                profile: profile.clone(),
                password_hash: None,
                federated_provider: Some(provider),
            },
        );
        tracing::info!(uid = %profile.uid, "federated account created");
        Ok(profile)
    }

    fn send_password_reset(&self, email: &str) -> Result<MessageResponse, AppError> {
        let mut store = self.write()?;
        if store.accounts.contains_key(&normalize_email(email)) {
            store.deliver(email, OutboundKind::PasswordReset);
        } else {
            tracing::debug!("password reset requested for unknown email");
        }
        Ok(MessageResponse::new(RESET_SENT_MESSAGE))
    }

    fn confirm_password_reset(
        &self,
        request: ConfirmPasswordResetRequest,
    ) -> Result<MessageResponse, AppError> {
        let password_hash =
            hash_password(&request.new_password).map_err(|e| AppError::internal(e.to_string()))?;

        let mut store = self.write()?;
        let email = store
            .reset_codes
            .remove(request.code.trim())
            .ok_or_else(|| AppError::bad_request("This reset link is invalid or has already been used"))?;
        let account = store
            .accounts
            .get_mut(&email)
            .ok_or_else(|| AppError::not_found("Account not found"))?;
        account.password_hash = Some(password_hash);
        Ok(MessageResponse::new("Your password has been reset. You can now sign in."))
    }

    fn send_email_verification(&self, uid: &str) -> Result<MessageResponse, AppError> {
        let mut store = self.write()?;
        let account = store
            .by_uid_mut(uid)
            .ok_or_else(|| AppError::not_found("Account not found"))?;
        if account.profile.email_verified {
            return Ok(MessageResponse::new("Your email is already verified."));
        }
        let email = account.profile.email.clone();
        store.deliver(&email, OutboundKind::EmailVerification);
        Ok(MessageResponse::new(format!("Verification email sent to {email}.")))
    }

    fn confirm_email_verification(&self, code: &str) -> Result<UserProfile, AppError> {
        let mut store = self.write()?;
        let uid = store
            .verification_codes
            .remove(code.trim())
            .ok_or_else(|| AppError::bad_request("This verification link is invalid or has expired"))?;
        let account = store
            .by_uid_mut(&uid)
            .ok_or_else(|| AppError::not_found("Account not found"))?;
        account.profile.email_verified = true;
        Ok(account.profile.clone())
    }

    fn update_profile(&self, request: UpdateProfileRequest) -> Result<UserProfile, AppError> {
        let mut store = self.write()?;
        let account = store
            .by_uid_mut(&request.uid)
            .ok_or_else(|| AppError::not_found("Account not found"))?;
        account.profile.display_name = request.display_name.trim().to_string();
        Ok(account.profile.clone())
    }

    fn profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError> {
        let store = self.read()?;
        Ok(store
            .accounts
            .values()
            .find(|a| a.profile.uid == uid)
            .map(|a| a.profile.clone()))
    }
}

/// Current profile for `uid`, used to refresh a session restored from storage.
pub fn current_profile(idp: &dyn IdentityProvider, uid: &str) -> Result<UserProfile, AppError> {
    idp.profile(uid)?
        .ok_or_else(|| AppError::not_found("Account not found"))
}

static PROVIDER: OnceLock<MemoryIdentityProvider> = OnceLock::new();

/// The process-wide provider.
pub fn provider() -> &'static dyn IdentityProvider {
    PROVIDER.get_or_init(MemoryIdentityProvider::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    fn sign_up(idp: &MemoryIdentityProvider, email: &str, role: UserRole) -> UserProfile {
        idp.sign_up(SignUpRequest {
            email: email.into(),
            password: "hunter22".into(),
            display_name: "Dana Scully".into(),
            role,
        })
        .unwrap()
    }

    #[test]
    fn sign_up_then_sign_in_keeps_role() {
        let idp = MemoryIdentityProvider::new();
        let created = sign_up(&idp, "Dana@Example.com", UserRole::ProjectManager);
        assert_eq!(created.email, "dana@example.com");
        assert!(!created.email_verified);

        let signed_in = idp
            .sign_in(SignInRequest {
                email: "dana@example.com".into(),
                password: "hunter22".into(),
            })
            .unwrap();
        assert_eq!(signed_in.uid, created.uid);
        assert_eq!(signed_in.role, UserRole::ProjectManager);
    }

    #[test]
    fn duplicate_email_conflicts() {
        let idp = MemoryIdentityProvider::new();
        sign_up(&idp, "a@b.co", UserRole::Employee);
        let err = idp
            .sign_up(SignUpRequest {
                email: " A@B.CO ".into(),
                password: "another1".into(),
                display_name: "A".into(),
                role: UserRole::Ceo,
            })
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Conflict);
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let idp = MemoryIdentityProvider::new();
        sign_up(&idp, "a@b.co", UserRole::Employee);
        let wrong = idp
            .sign_in(SignInRequest {
                email: "a@b.co".into(),
                password: "nope".into(),
            })
            .unwrap_err();
        let unknown = idp
            .sign_in(SignInRequest {
                email: "x@b.co".into(),
                password: "nope".into(),
            })
            .unwrap_err();
        assert_eq!(wrong, unknown);
        assert_eq!(wrong.kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn federated_creates_verified_employee() {
        let idp = MemoryIdentityProvider::new();
        let profile = idp
            .federated_sign_in(FederatedSignInRequest {
                provider: "Google".into(),
                email: "fox@example.com".into(),
                display_name: None,
            })
            .unwrap();
        assert_eq!(profile.role, UserRole::Employee);
        assert_eq!(profile.display_name, "fox");
        assert!(profile.email_verified);

        let err = idp
            .sign_in(SignInRequest {
                email: "fox@example.com".into(),
                password: "whatever".into(),
            })
            .unwrap_err();
        assert!(err.message.contains("google"));
    }

    #[test]
    fn federated_links_existing_account() {
        let idp = MemoryIdentityProvider::new();
        let created = sign_up(&idp, "walter@example.com", UserRole::Ceo);
        let linked = idp
            .federated_sign_in(FederatedSignInRequest {
                provider: "google".into(),
                email: "walter@example.com".into(),
                display_name: Some("W. Skinner".into()),
            })
            .unwrap();
        assert_eq!(linked.uid, created.uid);
        assert_eq!(linked.role, UserRole::Ceo);
        assert!(linked.email_verified);
    }

    #[test]
    fn password_reset_round_trip() {
        let idp = MemoryIdentityProvider::new();
        sign_up(&idp, "a@b.co", UserRole::Employee);

        let msg = idp.send_password_reset("a@b.co").unwrap();
        assert_eq!(msg.message, RESET_SENT_MESSAGE);
        let code = idp.last_code("a@b.co", OutboundKind::PasswordReset).unwrap();

        idp.confirm_password_reset(ConfirmPasswordResetRequest {
            code: code.clone(),
            new_password: "fresh-pass".into(),
        })
        .unwrap();
        assert!(idp
            .sign_in(SignInRequest {
                email: "a@b.co".into(),
                password: "fresh-pass".into(),
            })
            .is_ok());

        let reused = idp
            .confirm_password_reset(ConfirmPasswordResetRequest {
                code,
                new_password: "again-pass".into(),
            })
            .unwrap_err();
        assert_eq!(reused.kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn reset_for_unknown_email_sends_nothing() {
        let idp = MemoryIdentityProvider::new();
        let msg = idp.send_password_reset("ghost@b.co").unwrap();
        assert_eq!(msg.message, RESET_SENT_MESSAGE);
        assert!(idp.outbox().is_empty());
    }

    #[test]
    fn verification_flow() {
        let idp = MemoryIdentityProvider::new();
        let created = sign_up(&idp, "a@b.co", UserRole::Employee);

        idp.send_email_verification(&created.uid).unwrap();
        let code = idp
            .last_code("a@b.co", OutboundKind::EmailVerification)
            .unwrap();
        let verified = idp.confirm_email_verification(&code).unwrap();
        assert!(verified.email_verified);

        let again = idp.send_email_verification(&created.uid).unwrap();
        assert_eq!(again.message, "Your email is already verified.");
    }

    #[test]
    fn update_profile_changes_display_name_only() {
        let idp = MemoryIdentityProvider::new();
        let created = sign_up(&idp, "a@b.co", UserRole::Admin);
        let updated = idp
            .update_profile(UpdateProfileRequest {
                uid: created.uid.clone(),
                display_name: "  Monica Reyes ".into(),
            })
            .unwrap();
        assert_eq!(updated.display_name, "Monica Reyes");
        assert_eq!(updated.role, UserRole::Admin);
        assert_eq!(idp.profile(&created.uid).unwrap(), Some(updated));
    }

    #[test]
    fn unknown_uid_is_not_found() {
        let idp = MemoryIdentityProvider::new();
        let err = idp.send_email_verification("missing").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(idp.profile("missing").unwrap(), None);
    }

    #[test]
    fn new_reset_code_replaces_the_previous_one() {
        let idp = MemoryIdentityProvider::new();
        sign_up(&idp, "a@b.co", UserRole::Employee);

        idp.send_password_reset("a@b.co").unwrap();
        let first = idp.last_code("a@b.co", OutboundKind::PasswordReset).unwrap();
        idp.send_password_reset("A@B.co").unwrap();
        let second = idp.last_code("a@b.co", OutboundKind::PasswordReset).unwrap();
        assert_ne!(first, second);

        let stale = idp
            .confirm_password_reset(ConfirmPasswordResetRequest {
                code: first,
                new_password: "stale-pass".into(),
            })
            .unwrap_err();
        assert_eq!(stale.kind, AppErrorKind::BadRequest);
        idp.confirm_password_reset(ConfirmPasswordResetRequest {
            code: second,
            new_password: "fresh-pass".into(),
        })
        .unwrap();
    }

    #[test]
    fn resent_verification_invalidates_the_sign_up_code() {
        let idp = MemoryIdentityProvider::new();
        let created = sign_up(&idp, "a@b.co", UserRole::Employee);
        let from_sign_up = idp
            .last_code("a@b.co", OutboundKind::EmailVerification)
            .unwrap();

        idp.send_email_verification(&created.uid).unwrap();
        let resent = idp
            .last_code("a@b.co", OutboundKind::EmailVerification)
            .unwrap();

        let err = idp.confirm_email_verification(&from_sign_up).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(idp.confirm_email_verification(&resent).unwrap().email_verified);
    }

    #[test]
    fn outbox_keeps_only_the_newest_messages() {
        let idp = MemoryIdentityProvider::new();
        sign_up(&idp, "a@b.co", UserRole::Employee);
        for _ in 0..OUTBOX_LIMIT + 5 {
            idp.send_password_reset("a@b.co").unwrap();
        }

        let outbox = idp.outbox();
        assert_eq!(outbox.len(), OUTBOX_LIMIT);
        assert!(outbox.iter().all(|m| m.kind == OutboundKind::PasswordReset));
        assert_eq!(
            outbox.last().map(|m| m.code.clone()),
            idp.last_code("a@b.co", OutboundKind::PasswordReset)
        );
    }

    #[test]
    fn current_profile_reflects_verification() {
        let idp = MemoryIdentityProvider::new();
        let created = sign_up(&idp, "a@b.co", UserRole::Ceo);
        assert!(!current_profile(&idp, &created.uid).unwrap().email_verified);

        let code = idp
            .last_code("a@b.co", OutboundKind::EmailVerification)
            .unwrap();
        idp.confirm_email_verification(&code).unwrap();
        let refreshed = current_profile(&idp, &created.uid).unwrap();
        assert!(refreshed.email_verified);
        assert_eq!(refreshed.role, UserRole::Ceo);

        let err = current_profile(&idp, "missing").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }
}
