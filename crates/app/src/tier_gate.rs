use dioxus::prelude::*;
use shared_types::PlanTier;
use shared_ui::{Badge, BadgeVariant};

use crate::auth::use_auth;
use crate::format_helpers::title_case;

/// Whether the signed-in user's plan includes `required`.
pub fn use_plan_check(required: PlanTier) -> bool {
    let auth = use_auth();
    let guard = auth.user.read();
    guard
        .as_ref()
        .is_some_and(|user| user.plan.has_access(&required))
}

/// Render `children` when the plan allows it, `fallback` otherwise.
#[component]
pub fn TierGate(required: PlanTier, fallback: Element, children: Element) -> Element {
    if use_plan_check(required) {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}

/// Plan name shown next to the user in the header.
#[component]
pub fn TierBadge(plan: PlanTier) -> Element {
    let variant = match plan {
        PlanTier::Free => BadgeVariant::Outline,
        PlanTier::Pro => BadgeVariant::Primary,
        PlanTier::Enterprise => BadgeVariant::Success,
    };
    let label = title_case(plan.as_str());
    rsx! {
        Badge { variant, class: "tier-badge", "{label}" }
    }
}

/// Upsell shown in place of gated content.
#[component]
pub fn UpgradeNotice(required: PlanTier) -> Element {
    let plan = title_case(required.as_str());
    rsx! {
        div { class: "upgrade-notice",
            p { "Available on the {plan} plan." }
        }
    }
}
