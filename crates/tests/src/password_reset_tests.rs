use pretty_assertions::assert_eq;
use server::identity::{IdentityProvider, OutboundKind, RESET_SENT_MESSAGE};
use shared_types::{AppErrorKind, ConfirmPasswordResetRequest, SignInRequest, UserRole};

use crate::common;

fn sign_in(
    idp: &server::identity::MemoryIdentityProvider,
    email: &str,
    password: &str,
) -> Result<shared_types::UserProfile, shared_types::AppError> {
    idp.sign_in(SignInRequest {
        email: email.into(),
        password: password.into(),
    })
}

#[test]
fn reset_replaces_the_password() {
    let idp = common::provider();
    common::sign_up(&idp, "worker@example.com", "old-secret", UserRole::Employee);

    let sent = idp.send_password_reset("worker@example.com").unwrap();
    assert_eq!(sent.message, RESET_SENT_MESSAGE);

    let code = idp
        .last_code("worker@example.com", OutboundKind::PasswordReset)
        .expect("reset code delivered");
    idp.confirm_password_reset(ConfirmPasswordResetRequest {
        code,
        new_password: "new-secret".into(),
    })
    .unwrap();

    assert!(sign_in(&idp, "worker@example.com", "old-secret").is_err());
    let profile = sign_in(&idp, "worker@example.com", "new-secret").unwrap();
    assert_eq!(profile.role, UserRole::Employee);
}

#[test]
fn unknown_email_gets_the_same_answer_and_no_code() {
    let idp = common::provider();

    let sent = idp.send_password_reset("ghost@example.com").unwrap();
    assert_eq!(sent.message, RESET_SENT_MESSAGE);
    assert!(idp
        .last_code("ghost@example.com", OutboundKind::PasswordReset)
        .is_none());
}

#[test]
fn reset_code_works_once() {
    let idp = common::provider();
    common::sign_up(&idp, "once@example.com", "old-secret", UserRole::Admin);
    idp.send_password_reset("once@example.com").unwrap();
    let code = idp
        .last_code("once@example.com", OutboundKind::PasswordReset)
        .unwrap();

    idp.confirm_password_reset(ConfirmPasswordResetRequest {
        code: code.clone(),
        new_password: "first-new".into(),
    })
    .unwrap();

    let err = idp
        .confirm_password_reset(ConfirmPasswordResetRequest {
            code,
            new_password: "second-new".into(),
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(sign_in(&idp, "once@example.com", "first-new").is_ok());
}
