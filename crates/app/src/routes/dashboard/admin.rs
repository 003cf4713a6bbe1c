use dioxus::prelude::*;
use shared_types::{FeatureFlags, UserRole};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::DashboardShell;
use crate::guard::{dashboard_audience, ProtectedRoute};
use crate::routes::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed_roles: dashboard_audience(UserRole::Admin),
            AdminOverview {}
        }
    }
}

#[component]
fn AdminOverview() -> Element {
    let flags: FeatureFlags = use_context();
    let feature_rows = [
        ("Federated sign-in", flags.federated_sign_in),
        ("Activity feed", flags.activity_feed),
        ("Email verification", flags.email_verification),
    ];

    rsx! {
        DashboardShell { title: "Administration".to_string(),
            Card {
                CardHeader {
                    CardTitle { "Roles and dashboards" }
                    CardDescription { "Where each role lands after sign-in and who else may open it" }
                }
                CardContent {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Role" }
                                th { "Dashboard" }
                                th { "Open to" }
                                th {}
                            }
                        }
                        tbody {
                            for role in UserRole::ALL {
                                tr { key: "{role}",
                                    td { {role.label()} }
                                    td { code { {role.dashboard_path()} } }
                                    td {
                                        for viewer in dashboard_audience(role) {
                                            Badge { key: "{viewer}", variant: BadgeVariant::Outline, {viewer.label()} }
                                        }
                                    }
                                    td {
                                        Link { to: Route::dashboard_for(Some(role)), "Open" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Features" }
                    CardDescription { "Set in config.toml on the server" }
                }
                CardContent {
                    ul { class: "feature-list",
                        for (name, enabled) in feature_rows {
                            li { key: "{name}", class: "feature-row",
                                span { "{name}" }
                                if enabled {
                                    Badge { variant: BadgeVariant::Success, "On" }
                                } else {
                                    Badge { variant: BadgeVariant::Secondary, "Off" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
