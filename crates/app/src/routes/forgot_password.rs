use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

use crate::routes::Route;

/// Request a password reset email. The confirmation reads the same whether
/// or not the address has an account.
#[component]
pub fn ForgotPassword() -> Element {
    let mut email = use_signal(String::new);
    let mut sent_message = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::send_password_reset(email()).await {
            Ok(resp) => sent_message.set(Some(resp.message)),
            Err(e) => error_msg.set(Some(AppError::friendly_message(&e.to_string()))),
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Reset Password" }
                    CardDescription { "We'll email you a link to choose a new password" }
                }

                CardContent {
                    if let Some(msg) = sent_message() {
                        div { class: "auth-success", "{msg}" }
                    } else {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }
                        form { class: "auth-form", onsubmit: handle_submit,
                            Input {
                                input_type: "email",
                                required: true,
                                id: "email",
                                label: "Email",
                                placeholder: "you@company.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            Button {
                                submit: true,
                                class: "auth-submit",
                                busy: loading(),
                                if loading() { "Sending..." } else { "Send Reset Link" }
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Remembered it? "
                        Link { to: Route::Login {}, "Back to sign in" }
                    }
                }
            }
        }
    }
}
