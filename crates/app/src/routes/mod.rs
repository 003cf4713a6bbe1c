pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod reset_password;
pub mod signup;
pub mod tasks;
pub mod verify_email;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdClock, LdLayoutDashboard, LdSettings, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, UserRole};
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_auth;
use crate::tier_gate::TierBadge;

use dashboard::{
    AdminDashboard, CeoDashboard, DashboardRedirect, EmployeeDashboard, ProjectManagerDashboard,
};
use forgot_password::ForgotPassword;
use login::Login;
use not_found::NotFound;
use profile::Profile;
use reset_password::ResetPassword;
use signup::Signup;
use tasks::Tasks;
use verify_email::VerifyEmail;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password?:code")]
    ResetPassword { code: Option<String> },
    #[route("/verify-email?:code")]
    VerifyEmail { code: Option<String> },
    #[route("/")]
    Home {},
    #[layout(AppLayout)]
    #[route("/dashboard")]
    DashboardRedirect {},
    #[route("/dashboard/employee")]
    EmployeeDashboard {},
    #[route("/dashboard/project-manager")]
    ProjectManagerDashboard {},
    #[route("/dashboard/ceo")]
    CeoDashboard {},
    #[route("/dashboard/admin")]
    AdminDashboard {},
    #[route("/tasks")]
    Tasks {},
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The dashboard route for a role; no role means the employee view.
    pub fn dashboard_for(role: Option<UserRole>) -> Route {
        match role.unwrap_or_default() {
            UserRole::Employee => Route::EmployeeDashboard {},
            UserRole::ProjectManager => Route::ProjectManagerDashboard {},
            UserRole::Ceo => Route::CeoDashboard {},
            UserRole::Admin => Route::AdminDashboard {},
        }
    }

    fn is_dashboard(&self) -> bool {
        matches!(
            self,
            Route::DashboardRedirect {}
                | Route::EmployeeDashboard {}
                | Route::ProjectManagerDashboard {}
                | Route::CeoDashboard {}
                | Route::AdminDashboard {}
        )
    }
}

/// `/` sends visitors on to their dashboard, or to sign-in.
#[component]
fn Home() -> Element {
    rsx! {
        DashboardRedirect {}
    }
}

/// Header, navigation and the signed-in user's chip around every
/// protected page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let flags: FeatureFlags = use_context();
    let mut auth = use_auth();

    let user = auth.user.read().clone();
    let role = *auth.role.read();
    let dashboard = Route::dashboard_for(role);
    let on_dashboard = route.is_dashboard();

    let handle_sign_out = move |_| {
        auth.sign_out();
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-header",
                Link { to: dashboard.clone(), class: "app-brand", "Workdesk" }

                nav { class: "app-nav",
                    Link {
                        to: dashboard,
                        class: if on_dashboard { "nav-link active" } else { "nav-link" },
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Dashboard"
                    }
                    Link {
                        to: Route::Tasks {},
                        class: if matches!(route, Route::Tasks {}) { "nav-link active" } else { "nav-link" },
                        Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                        "Tasks"
                    }
                    Link {
                        to: Route::Profile {},
                        class: if matches!(route, Route::Profile {}) { "nav-link active" } else { "nav-link" },
                        Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                        "Profile"
                    }

                    if role == Some(UserRole::Admin) {
                        span { class: "nav-divider" }
                        Link { to: Route::ProjectManagerDashboard {}, class: "nav-link",
                            Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                            "Projects"
                        }
                        Link { to: Route::CeoDashboard {}, class: "nav-link",
                            Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                            "Company"
                        }
                        Link { to: Route::AdminDashboard {}, class: "nav-link",
                            Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                            "Admin"
                        }
                    }
                }

                if let Some(user) = user.clone() {
                    div { class: "app-user",
                        span { class: "app-user-avatar", {user.initials()} }
                        div { class: "app-user-meta",
                            span { class: "app-user-name", "{user.display_name}" }
                            span { class: "app-user-role", {user.role.label()} }
                        }
                        TierBadge { plan: user.plan }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: handle_sign_out,
                            "Sign out"
                        }
                    }
                }
            }

            if flags.email_verification {
                if let Some(user) = user.filter(|u| !u.email_verified) {
                    div { class: "verify-banner",
                        "Please verify {user.email}. "
                        Link { to: Route::Profile {}, "Resend the verification email" }
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
