use dioxus::prelude::*;
use shared_types::{Activity, FeatureFlags, MessageResponse, UserProfile, UserRole};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::identity::provider;

/// Get the current feature flags. Needs no session; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Create an email/password account with the chosen role.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn sign_up(
    email: String,
    password: String,
    display_name: String,
    role: UserRole,
) -> Result<UserProfile, ServerFnError> {
    use shared_types::SignUpRequest;

    let req = SignUpRequest {
        email,
        password,
        display_name,
        role,
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    provider()
        .sign_up(req)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn sign_in(email: String, password: String) -> Result<UserProfile, ServerFnError> {
    use shared_types::SignInRequest;

    let req = SignInRequest { email, password };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    provider().sign_in(req).map_err(|e| {
        tracing::info!(kind = %e.kind, "sign-in rejected");
        e.into_server_fn_error()
    })
}

/// Sign in with an identity asserted by a federated provider.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn federated_sign_in(
    provider_name: String,
    email: String,
    display_name: Option<String>,
) -> Result<UserProfile, ServerFnError> {
    use shared_types::{AppError, FederatedSignInRequest};

    if !crate::config::feature_flags().federated_sign_in {
        return Err(AppError::forbidden("Federated sign-in is disabled").into_server_fn_error());
    }

    let req = FederatedSignInRequest {
        provider: provider_name,
        email,
        display_name,
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    provider()
        .federated_sign_in(req)
        .map_err(|e| e.into_server_fn_error())
}

/// Request a password reset link. The response is the same whether or not
/// the email has an account.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn send_password_reset(email: String) -> Result<MessageResponse, ServerFnError> {
    use shared_types::PasswordResetRequest;

    let req = PasswordResetRequest { email };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    provider()
        .send_password_reset(&req.email)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(new_password)))]
#[server]
pub async fn confirm_password_reset(
    code: String,
    new_password: String,
) -> Result<MessageResponse, ServerFnError> {
    use shared_types::ConfirmPasswordResetRequest;

    let req = ConfirmPasswordResetRequest { code, new_password };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    provider()
        .confirm_password_reset(req)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn send_email_verification(uid: String) -> Result<MessageResponse, ServerFnError> {
    provider()
        .send_email_verification(&uid)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn confirm_email_verification(code: String) -> Result<UserProfile, ServerFnError> {
    provider()
        .confirm_email_verification(&code)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_profile(
    uid: String,
    display_name: String,
) -> Result<UserProfile, ServerFnError> {
    use shared_types::UpdateProfileRequest;

    let req = UpdateProfileRequest { uid, display_name };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    provider()
        .update_profile(req)
        .map_err(|e| e.into_server_fn_error())
}

/// Latest profile for `uid`, so a session restored from storage picks up
/// changes such as a confirmed email address.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_profile(uid: String) -> Result<UserProfile, ServerFnError> {
    crate::identity::current_profile(provider(), &uid).map_err(|e| e.into_server_fn_error())
}

/// Activity feed for a user. Empty when the feed is disabled or the
/// upstream endpoint fails.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_activities(user_id: String) -> Result<Vec<Activity>, ServerFnError> {
    if !crate::config::feature_flags().activity_feed {
        return Ok(Vec::new());
    }
    Ok(crate::activities::client().fetch(&user_id).await)
}
