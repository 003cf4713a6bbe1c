use serde::{Deserialize, Serialize};

use crate::role::UserRole;

/// Subscription plan attached to an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl PlanTier {
    fn rank(&self) -> u8 {
        match self {
            PlanTier::Free => 0,
            PlanTier::Pro => 1,
            PlanTier::Enterprise => 2,
        }
    }

    /// Whether this plan includes features gated on `required`.
    pub fn has_access(&self, required: &PlanTier) -> bool {
        self.rank() >= required.rank()
    }

    /// Parse a plan name, defaulting to `Free` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pro" => PlanTier::Pro,
            "enterprise" => PlanTier::Enterprise,
            _ => PlanTier::Free,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Pro => "pro",
            PlanTier::Enterprise => "enterprise",
        }
    }
}

/// The signed-in user as seen by the client.
///
/// Lives in the auth context for the length of a session. `role` is also
/// mirrored into the role store that routing decisions read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub plan: PlanTier,
    #[serde(default)]
    pub email_verified: bool,
}

impl UserProfile {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let from_name: String = self
            .display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        if from_name.is_empty() {
            self.email.chars().take(1).collect::<String>().to_uppercase()
        } else {
            from_name.to_uppercase()
        }
    }
}

/// Email/password sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignUpRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub display_name: String,
    pub role: UserRole,
}

/// Email/password sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignInRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Sign-in through an external identity (Google and friends).
///
/// `email` is the identity asserted by the federated provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct FederatedSignInRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Provider is required"))
    )]
    pub provider: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct PasswordResetRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ConfirmPasswordResetRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Reset code is required"))
    )]
    pub code: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct UpdateProfileRequest {
    pub uid: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 80, message = "Display name must be 1-80 characters"))
    )]
    pub display_name: String,
}

/// Generic acknowledgement for fire-and-forget operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(display_name: &str) -> UserProfile {
        UserProfile {
            uid: "u-1".into(),
            email: "ada@example.com".into(),
            display_name: display_name.into(),
            role: UserRole::Employee,
            plan: PlanTier::Free,
            email_verified: false,
        }
    }

    #[test]
    fn plan_rank_ordering() {
        assert!(PlanTier::Enterprise.has_access(&PlanTier::Pro));
        assert!(PlanTier::Pro.has_access(&PlanTier::Pro));
        assert!(!PlanTier::Free.has_access(&PlanTier::Pro));
    }

    #[test]
    fn unknown_plan_is_free() {
        assert_eq!(PlanTier::from_str_or_default("PRO"), PlanTier::Pro);
        assert_eq!(PlanTier::from_str_or_default("platinum"), PlanTier::Free);
    }

    #[test]
    fn initials_from_display_name() {
        assert_eq!(profile("Ada Lovelace").initials(), "AL");
        assert_eq!(profile("grace brewster hopper").initials(), "GB");
    }

    #[test]
    fn initials_fall_back_to_email() {
        assert_eq!(profile("   ").initials(), "A");
    }

    #[test]
    fn profile_tolerates_missing_optional_fields() {
        let json = r#"{"uid":"x","email":"x@y.z","display_name":"X","role":"ceo"}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.role, UserRole::Ceo);
        assert_eq!(p.plan, PlanTier::Free);
        assert!(!p.email_verified);
    }
}
