use pretty_assertions::assert_eq;
use server::identity::IdentityProvider;
use shared_types::{
    dashboard_path_for, AppErrorKind, FederatedSignInRequest, SignInRequest, UserRole,
};

use crate::common;

#[test]
fn each_role_lands_on_its_dashboard() {
    let idp = common::provider();
    let expected = [
        (UserRole::Employee, "/dashboard/employee"),
        (UserRole::ProjectManager, "/dashboard/project-manager"),
        (UserRole::Ceo, "/dashboard/ceo"),
        (UserRole::Admin, "/dashboard/admin"),
    ];

    for (i, (role, path)) in expected.into_iter().enumerate() {
        let email = format!("user{i}@example.com");
        common::sign_up(&idp, &email, "secret1", role);

        let profile = idp
            .sign_in(SignInRequest {
                email: email.clone(),
                password: "secret1".into(),
            })
            .unwrap();

        // The client stores the role literal and routes from it.
        let stored = profile.role.as_str();
        assert_eq!(dashboard_path_for(Some(stored)), path);
    }
}

#[test]
fn tampered_role_value_routes_to_employee() {
    assert_eq!(dashboard_path_for(Some("root")), "/dashboard/employee");
    assert_eq!(dashboard_path_for(Some("")), "/dashboard/employee");
    assert_eq!(dashboard_path_for(None), "/dashboard/employee");
}

#[test]
fn sign_in_is_case_insensitive_on_email() {
    let idp = common::provider();
    common::sign_up(&idp, "Mixed@Example.com", "secret1", UserRole::Ceo);

    let profile = idp
        .sign_in(SignInRequest {
            email: "mixed@example.COM".into(),
            password: "secret1".into(),
        })
        .unwrap();
    assert_eq!(profile.role, UserRole::Ceo);
}

#[test]
fn wrong_password_is_unauthorized() {
    let idp = common::provider();
    common::sign_up(&idp, "pm@example.com", "secret1", UserRole::ProjectManager);

    let err = idp
        .sign_in(SignInRequest {
            email: "pm@example.com".into(),
            password: "nope-nope".into(),
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[test]
fn federated_sign_in_keeps_existing_role() {
    let idp = common::provider();
    common::sign_up(&idp, "exec@example.com", "secret1", UserRole::Ceo);

    let profile = idp
        .federated_sign_in(FederatedSignInRequest {
            provider: "google".into(),
            email: "exec@example.com".into(),
            display_name: None,
        })
        .unwrap();
    assert_eq!(profile.role, UserRole::Ceo);
    assert_eq!(dashboard_path_for(Some(profile.role.as_str())), "/dashboard/ceo");
}

#[test]
fn new_federated_user_starts_as_employee() {
    let idp = common::provider();
    let profile = idp
        .federated_sign_in(FederatedSignInRequest {
            provider: "google".into(),
            email: "newcomer@example.com".into(),
            display_name: Some("New Comer".into()),
        })
        .unwrap();
    assert_eq!(profile.role, UserRole::Employee);
    assert!(profile.email_verified);
}
