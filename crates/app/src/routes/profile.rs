use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, FeatureFlags, PlanTier, UserProfile};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Input, PageHeader, Separator, TabContent, TabList, TabTrigger, Tabs,
};

use crate::auth::use_auth;
use crate::format_helpers::title_case;
use crate::guard::ProtectedRoute;
use crate::routes::Route;
use crate::tier_gate::TierBadge;

/// Account settings for the signed-in user.
#[component]
pub fn Profile() -> Element {
    rsx! {
        ProtectedRoute {
            ProfileSettings {}
        }
    }
}

#[component]
fn ProfileSettings() -> Element {
    let auth = use_auth();
    let Some(user) = auth.user.read().clone() else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        section { class: "profile-page",
            PageHeader { title: "Profile".to_string(), subtitle: user.email.clone() }

            Tabs { default_value: "account", horizontal: true,
                TabList {
                    TabTrigger { value: "account", index: 0usize, "Account" }
                    TabTrigger { value: "plan", index: 1usize, "Plan" }
                }
                TabContent { value: "account", index: 0usize,
                    AccountSection { user: user.clone() }
                }
                TabContent { value: "plan", index: 1usize,
                    PlanSection { plan: user.plan }
                }
            }
        }
    }
}

#[component]
fn AccountSection(user: UserProfile) -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut display_name = use_signal(|| user.display_name.clone());
    let mut saved_msg = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);
    let mut verify_msg = use_signal(|| Option::<(bool, String)>::None);

    let uid = user.uid.clone();
    let handle_save = move |evt: FormEvent| {
        let uid = uid.clone();
        async move {
            evt.prevent_default();
            saving.set(true);
            saved_msg.set(None);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match server::api::update_profile(uid, display_name()).await {
                Ok(profile) => {
                    auth.update_user(profile);
                    saved_msg.set(Some("Profile saved".to_string()));
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
            saving.set(false);
        }
    };

    let verify_uid = user.uid.clone();
    let handle_resend = move |_| {
        let uid = verify_uid.clone();
        async move {
            verify_msg.set(None);
            match server::api::send_email_verification(uid).await {
                Ok(resp) => verify_msg.set(Some((true, resp.message))),
                Err(e) => verify_msg.set(Some((
                    false,
                    AppError::friendly_message(&e.to_string()),
                ))),
            }
        }
    };

    let handle_sign_out = move |_| {
        auth.sign_out();
        navigator().replace(Route::Login {});
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Account" }
                CardDescription { "Signed in as " {user.role.label()} }
            }
            CardContent {
                if let Some(msg) = saved_msg() {
                    div { class: "auth-success", "{msg}" }
                }
                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }
                form { class: "profile-form", onsubmit: handle_save,
                    Input {
                        id: "display_name",
                        label: "Display name",
                        value: display_name(),
                        error: field_errors().get("display_name").cloned(),
                        on_input: move |e: FormEvent| display_name.set(e.value()),
                    }
                    Input { id: "email", label: "Email", value: user.email.clone(), disabled: true }
                    Button {
                        submit: true,
                        busy: saving(),
                        if saving() { "Saving..." } else { "Save changes" }
                    }
                }

                if flags.email_verification {
                    Separator {}
                    div { class: "verify-status",
                        if user.email_verified {
                            Badge { variant: BadgeVariant::Success, "Email verified" }
                        } else {
                            Badge { variant: BadgeVariant::Warning, "Email not verified" }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: handle_resend,
                                "Resend verification email"
                            }
                        }
                        if let Some((ok, msg)) = verify_msg() {
                            span { class: if ok { "auth-success" } else { "auth-error" }, "{msg}" }
                        }
                    }
                }
            }
            CardFooter {
                Button { variant: ButtonVariant::Destructive, onclick: handle_sign_out, "Sign out" }
            }
        }
    }
}

#[component]
fn PlanSection(plan: PlanTier) -> Element {
    let tiers = [PlanTier::Free, PlanTier::Pro, PlanTier::Enterprise];

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Plan" }
                CardDescription {
                    "Current plan: "
                    TierBadge { plan }
                }
            }
            CardContent {
                ul { class: "plan-list",
                    for tier in tiers {
                        li { class: "plan-row",
                            span { {title_case(tier.as_str())} }
                            if plan.has_access(&tier) {
                                Badge { variant: BadgeVariant::Success, "Included" }
                            } else {
                                Badge { variant: BadgeVariant::Outline, "Upgrade" }
                            }
                        }
                    }
                }
            }
        }
    }
}
