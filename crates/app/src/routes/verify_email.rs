use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardFooter, CardHeader, CardTitle, Skeleton};

use crate::auth::use_auth;
use crate::routes::Route;

/// Landing page for the link in a verification email.
#[component]
pub fn VerifyEmail(code: Option<String>) -> Element {
    let mut auth = use_auth();

    let result = use_resource(move || {
        let code = code.clone();
        async move {
            let code = code.filter(|c| !c.trim().is_empty()).ok_or_else(|| {
                "This verification link is missing its code.".to_string()
            })?;
            server::api::confirm_email_verification(code)
                .await
                .map_err(|e| AppError::friendly_message(&e.to_string()))
        }
    });

    // Refresh the session copy when the verified account is the one signed in.
    use_effect(move || {
        if let Some(Ok(profile)) = &*result.read() {
            let same_user = auth
                .user
                .peek()
                .as_ref()
                .is_some_and(|u| u.uid == profile.uid);
            if same_user {
                auth.update_user(profile.clone());
            }
        }
    });

    let body = match &*result.read() {
        None => rsx! { Skeleton { lines: 2 } },
        Some(Ok(profile)) => rsx! {
            div { class: "auth-success", "{profile.email} is verified. Thanks!" }
        },
        Some(Err(msg)) => rsx! {
            div { class: "auth-error", "{msg}" }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Email Verification" }
                }
                CardContent { {body} }
                CardFooter {
                    if auth.is_authenticated() {
                        Link { to: Route::DashboardRedirect {}, "Go to your dashboard" }
                    } else {
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
