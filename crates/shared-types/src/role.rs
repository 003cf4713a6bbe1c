use serde::{Deserialize, Serialize};
use std::fmt;

/// Route every unknown or missing role falls back to.
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard/employee";

/// Role of a signed-in user. Decides which dashboard a session may reach.
///
/// Serialized as the lowercase literals `employee`, `project_manager`,
/// `ceo` and `admin`, which is also how the role store persists it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Employee,
    ProjectManager,
    Ceo,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Employee,
        UserRole::ProjectManager,
        UserRole::Ceo,
        UserRole::Admin,
    ];

    /// Parse one of the four role literals. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "employee" => Some(UserRole::Employee),
            "project_manager" => Some(UserRole::ProjectManager),
            "ceo" => Some(UserRole::Ceo),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::ProjectManager => "project_manager",
            UserRole::Ceo => "ceo",
            UserRole::Admin => "admin",
        }
    }

    /// Human-readable name for selects and badges.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::ProjectManager => "Project Manager",
            UserRole::Ceo => "CEO",
            UserRole::Admin => "Administrator",
        }
    }

    /// Dashboard landing path for this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Employee => DEFAULT_DASHBOARD_PATH,
            UserRole::ProjectManager => "/dashboard/project-manager",
            UserRole::Ceo => "/dashboard/ceo",
            UserRole::Admin => "/dashboard/admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard path for a raw stored role value.
/// Unrecognized or missing values land on the employee dashboard.
pub fn dashboard_path_for(raw: Option<&str>) -> &'static str {
    raw.and_then(UserRole::parse)
        .map(|role| role.dashboard_path())
        .unwrap_or(DEFAULT_DASHBOARD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_role_has_its_own_dashboard() {
        assert_eq!(dashboard_path_for(Some("employee")), "/dashboard/employee");
        assert_eq!(
            dashboard_path_for(Some("project_manager")),
            "/dashboard/project-manager"
        );
        assert_eq!(dashboard_path_for(Some("ceo")), "/dashboard/ceo");
        assert_eq!(dashboard_path_for(Some("admin")), "/dashboard/admin");
    }

    #[test]
    fn dashboard_paths_are_distinct() {
        let mut paths: Vec<_> = UserRole::ALL.iter().map(|r| r.dashboard_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn unknown_role_defaults_to_employee_dashboard() {
        assert_eq!(dashboard_path_for(Some("intern")), DEFAULT_DASHBOARD_PATH);
        assert_eq!(dashboard_path_for(Some("")), DEFAULT_DASHBOARD_PATH);
        assert_eq!(dashboard_path_for(Some("project-manager")), DEFAULT_DASHBOARD_PATH);
        assert_eq!(dashboard_path_for(None), DEFAULT_DASHBOARD_PATH);
    }

    #[test]
    fn parse_accepts_case_and_padding_variations() {
        assert_eq!(UserRole::parse(" CEO "), Some(UserRole::Ceo));
        assert_eq!(UserRole::parse("Admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("manager"), None);
    }

    #[test]
    fn as_str_parses_back_for_every_role() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn serde_uses_stored_literals() {
        let json = serde_json::to_string(&UserRole::ProjectManager).unwrap();
        assert_eq!(json, "\"project_manager\"");
        let role: UserRole = serde_json::from_str("\"ceo\"").unwrap();
        assert_eq!(role, UserRole::Ceo);
        assert!(serde_json::from_str::<UserRole>("\"owner\"").is_err());
    }
}
