use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, FeatureFlags, UserProfile};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Separator,
};

use crate::auth::{redirect_to_dashboard, use_auth};
use crate::routes::Route;

/// Email/password sign-in, plus federated sign-in when enabled.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the dashboard.
    if !*auth.loading.read() && auth.is_authenticated() {
        redirect_to_dashboard(*auth.role.read());
    }

    let mut finish = move |result: Result<UserProfile, ServerFnError>| match result {
        Ok(profile) => {
            let role = profile.role;
            auth.sign_in_with(profile);
            redirect_to_dashboard(Some(role));
        }
        Err(e) => {
            let err_str = e.to_string();
            let fe = AppError::parse_field_errors(&err_str);
            if fe.is_empty() {
                error_msg.set(Some(AppError::friendly_message(&err_str)));
            } else {
                field_errors.set(fe);
            }
        }
    };

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let result = server::api::sign_in(email(), password()).await;
        finish(result);
        loading.set(false);
    };

    let handle_federated = move |_| async move {
        error_msg.set(None);
        field_errors.set(HashMap::new());
        if email().trim().is_empty() {
            error_msg.set(Some("Enter your email to continue with Google".to_string()));
            return;
        }
        loading.set(true);
        let result = server::api::federated_sign_in("google".to_string(), email(), None).await;
        finish(result);
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Welcome back to Workdesk" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            input_type: "email",
                            required: true,
                            id: "email",
                            label: "Email",
                            placeholder: "you@company.com",
                            value: email(),
                            error: field_errors().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            input_type: "password",
                            required: true,
                            id: "password",
                            label: "Password",
                            placeholder: "Your password",
                            value: password(),
                            error: field_errors().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        div { class: "auth-forgot-password",
                            Link { to: Route::ForgotPassword {}, "Forgot password?" }
                        }
                        Button {
                            submit: true,
                            class: "auth-submit",
                            busy: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }

                    if flags.federated_sign_in {
                        div { class: "auth-divider",
                            Separator {}
                            span { class: "auth-divider-text", "or" }
                            Separator {}
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "auth-federated",
                            disabled: loading(),
                            onclick: handle_federated,
                            "Continue with Google"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "New here? "
                        Link { to: Route::Signup {}, "Create an account" }
                    }
                }
            }
        }
    }
}
