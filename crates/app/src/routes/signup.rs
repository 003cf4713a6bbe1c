use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, UserRole};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect,
    Input,
};

use crate::auth::{redirect_to_dashboard, use_auth};
use crate::routes::Route;

/// Account creation with a role picker.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(UserRole::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::sign_up(email(), password(), display_name(), role()).await {
            Ok(profile) => {
                let chosen = profile.role;
                auth.sign_in_with(profile);
                redirect_to_dashboard(Some(chosen));
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
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Pick the role you work in; it decides your dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_submit,
                        Input {
                            id: "display_name",
                            label: "Full name",
                            placeholder: "Ada Lovelace",
                            value: display_name(),
                            error: field_errors().get("display_name").cloned(),
                            on_input: move |e: FormEvent| display_name.set(e.value()),
                        }
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
                            placeholder: "At least 6 characters",
                            value: password(),
                            error: field_errors().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        FormSelect {
                            id: "role",
                            label: "Role",
                            value: role().as_str().to_string(),
                            onchange: move |e: Event<FormData>| {
                                if let Some(picked) = UserRole::parse(&e.value()) {
                                    role.set(picked);
                                }
                            },
                            for r in UserRole::ALL {
                                option { key: "{r}", value: r.as_str(), selected: r == role(), {r.label()} }
                            }
                        }
                        Button {
                            submit: true,
                            class: "auth-submit",
                            busy: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
