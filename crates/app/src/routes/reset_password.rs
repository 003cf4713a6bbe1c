use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

use crate::routes::Route;

/// Choose a new password using the code from a reset email.
#[component]
pub fn ResetPassword(code: Option<String>) -> Element {
    let mut new_password = use_signal(String::new);
    let mut done = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let Some(code) = code.filter(|c| !c.trim().is_empty()) else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./auth.css") }
            div { class: "auth-page",
                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Invalid Link" }
                        CardDescription { "This reset link is missing its code." }
                    }
                    CardFooter {
                        Link { to: Route::ForgotPassword {}, "Request a new link" }
                    }
                }
            }
        };
    };

    let handle_submit = move |evt: FormEvent| {
        let code = code.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match server::api::confirm_password_reset(code, new_password()).await {
                Ok(resp) => done.set(Some(resp.message)),
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Choose a New Password" }
                }

                CardContent {
                    if let Some(msg) = done() {
                        div { class: "auth-success", "{msg}" }
                    } else {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }
                        form { class: "auth-form", onsubmit: handle_submit,
                            Input {
                                input_type: "password",
                                required: true,
                                id: "new_password",
                                label: "New password",
                                placeholder: "At least 6 characters",
                                value: new_password(),
                                error: field_errors().get("new_password").cloned(),
                                on_input: move |e: FormEvent| new_password.set(e.value()),
                            }
                            Button {
                                submit: true,
                                class: "auth-submit",
                                busy: loading(),
                                if loading() { "Saving..." } else { "Set Password" }
                            }
                        }
                    }
                }

                CardFooter {
                    Link { to: Route::Login {}, "Back to sign in" }
                }
            }
        }
    }
}
