use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::Skeleton;

use crate::auth::{use_auth, AuthContext};
use crate::routes::Route;

/// What a protected page should do for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The stored session has not been read yet.
    Loading,
    Render,
    RedirectToLogin,
    /// Signed in with an address that has not been confirmed.
    RedirectToVerify,
    /// Signed in, but the role may not open this page.
    RedirectToDashboard(&'static str),
}

/// The parts of the session a guard looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionView {
    pub loading: bool,
    pub authenticated: bool,
    pub email_verified: bool,
    pub role: Option<UserRole>,
}

impl SessionView {
    pub fn of(auth: &AuthContext) -> Self {
        let user = auth.user.read();
        Self {
            loading: *auth.loading.read(),
            authenticated: user.is_some(),
            email_verified: user.as_ref().is_some_and(|u| u.email_verified),
            role: *auth.role.read(),
        }
    }
}

/// Decide whether a page limited to `allowed` may render.
///
/// Checks run in order: loading, signed in, verified address (only when
/// `require_verified`), then role. An empty `allowed` list admits every
/// signed-in user. A session without a stored role is treated as an
/// employee.
pub fn decide(session: SessionView, allowed: &[UserRole], require_verified: bool) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }
    if !session.authenticated {
        return GuardDecision::RedirectToLogin;
    }
    if require_verified && !session.email_verified {
        return GuardDecision::RedirectToVerify;
    }
    let role = session.role.unwrap_or_default();
    if allowed.is_empty() || allowed.contains(&role) {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToDashboard(role.dashboard_path())
    }
}

/// Roles allowed on a role's dashboard: that role plus admins.
pub fn dashboard_audience(role: UserRole) -> Vec<UserRole> {
    match role {
        UserRole::Admin => vec![UserRole::Admin],
        other => vec![other, UserRole::Admin],
    }
}

fn follow(decision: GuardDecision) {
    let route = match decision {
        GuardDecision::Loading | GuardDecision::Render => return,
        GuardDecision::RedirectToLogin => Route::Login {},
        GuardDecision::RedirectToVerify => Route::VerifyEmail { code: None },
        GuardDecision::RedirectToDashboard(path) => {
            tracing::debug!(path, "role not allowed here, redirecting");
            path.parse::<Route>().unwrap_or(Route::Login {})
        }
    };
    navigator().replace(route);
}

/// Renders `children` only for signed-in users whose role is in
/// `allowed_roles` and, with `require_verified`, whose address is
/// confirmed. Renders nothing while a redirect is pending; the redirect
/// itself runs as an effect after render.
#[component]
pub fn ProtectedRoute(
    #[props(default)] allowed_roles: Vec<UserRole>,
    #[props(default)] require_verified: bool,
    children: Element,
) -> Element {
    let auth = use_auth();
    let decision = decide(SessionView::of(&auth), &allowed_roles, require_verified);

    let allowed = allowed_roles.clone();
    use_effect(move || follow(decide(SessionView::of(&auth), &allowed, require_verified)));

    match decision {
        GuardDecision::Loading => rsx! {
            div { class: "guard-loading",
                Skeleton { lines: 3 }
            }
        },
        GuardDecision::Render => children,
        GuardDecision::RedirectToLogin
        | GuardDecision::RedirectToVerify
        | GuardDecision::RedirectToDashboard(_) => rsx! {},
    }
}
