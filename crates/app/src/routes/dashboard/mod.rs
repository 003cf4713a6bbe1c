pub mod activity_feed;
pub mod admin;
pub mod ceo;
pub mod employee;
pub mod project_manager;

use dioxus::prelude::*;
use shared_ui::{PageHeader, Skeleton};

use crate::auth::{redirect_to_dashboard, use_auth};
use crate::routes::Route;

pub use admin::AdminDashboard;
pub use ceo::CeoDashboard;
pub use employee::EmployeeDashboard;
pub use project_manager::ProjectManagerDashboard;

/// `/dashboard`: forwards to the dashboard for the stored role.
#[component]
pub fn DashboardRedirect() -> Element {
    let auth = use_auth();

    if !*auth.loading.read() {
        if auth.is_authenticated() {
            redirect_to_dashboard(*auth.role.read());
        } else {
            navigator().replace(Route::Login {});
        }
    }

    rsx! {
        div { class: "redirect-pending",
            p { "Taking you to your dashboard..." }
            Skeleton { lines: 2 }
        }
    }
}

/// Title row shared by the role dashboards: the page title, who is signed
/// in, and today's date.
#[component]
fn DashboardShell(title: String, children: Element) -> Element {
    let auth = use_auth();
    let subtitle = auth
        .user
        .read()
        .as_ref()
        .map(|u| format!("{} · {}", u.display_name, u.role.label()));
    let today = shared_types::today().format("%A, %B %-d").to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        section { class: "dashboard",
            PageHeader { title, subtitle,
                div { class: "dashboard-date",
                    span { class: "dashboard-date-label", "Today" }
                    span { class: "dashboard-date-value", "{today}" }
                }
            }
            {children}
        }
    }
}
