use pretty_assertions::assert_eq;
use server::identity::{IdentityProvider, OutboundKind};
use shared_types::{AppErrorKind, UserRole};

use crate::common;

#[test]
fn sign_up_sends_a_verification_code() {
    let idp = common::provider();
    let profile = common::sign_up(&idp, "fresh@example.com", "secret1", UserRole::Employee);
    assert!(!profile.email_verified);

    let code = idp
        .last_code("fresh@example.com", OutboundKind::EmailVerification)
        .expect("verification code delivered on sign-up");
    let verified = idp.confirm_email_verification(&code).unwrap();

    assert_eq!(verified.uid, profile.uid);
    assert!(verified.email_verified);
    assert!(idp.profile(&profile.uid).unwrap().unwrap().email_verified);
}

#[test]
fn resend_issues_a_new_code() {
    let idp = common::provider();
    let profile = common::sign_up(&idp, "again@example.com", "secret1", UserRole::Ceo);
    let first = idp
        .last_code("again@example.com", OutboundKind::EmailVerification)
        .unwrap();

    let sent = idp.send_email_verification(&profile.uid).unwrap();
    assert!(sent.message.contains("again@example.com"));
    let second = idp
        .last_code("again@example.com", OutboundKind::EmailVerification)
        .unwrap();
    assert_ne!(first, second);

    let stale = idp.confirm_email_verification(&first).unwrap_err();
    assert_eq!(stale.kind, AppErrorKind::BadRequest);
    assert!(idp.confirm_email_verification(&second).unwrap().email_verified);
}

#[test]
fn verified_account_does_not_get_another_code() {
    let idp = common::provider();
    let profile = common::sign_up(&idp, "done@example.com", "secret1", UserRole::Employee);
    let code = idp
        .last_code("done@example.com", OutboundKind::EmailVerification)
        .unwrap();
    idp.confirm_email_verification(&code).unwrap();
    let before = idp.outbox().len();

    let sent = idp.send_email_verification(&profile.uid).unwrap();
    assert_eq!(sent.message, "Your email is already verified.");
    assert_eq!(idp.outbox().len(), before);
}

#[test]
fn bogus_code_is_rejected() {
    let idp = common::provider();
    common::sign_up(&idp, "who@example.com", "secret1", UserRole::Employee);

    let err = idp.confirm_email_verification("not-a-code").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
