//! Static figures behind the manager and executive dashboards.
//!
//! None of this is fetched; the dashboards render these fixed samples.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityKind};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectHealth {
    OnTrack,
    AtRisk,
    Delayed,
    Completed,
}

impl ProjectHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectHealth::OnTrack => "On Track",
            ProjectHealth::AtRisk => "At Risk",
            ProjectHealth::Delayed => "Delayed",
            ProjectHealth::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub health: ProjectHealth,
    pub progress: u8,
    pub team_size: u32,
    pub due_date: &'static str,
    pub budget_used: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub active_tasks: u32,
    /// Share of capacity already allocated, in percent.
    pub utilization: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepartmentMetric {
    pub department: &'static str,
    pub headcount: u32,
    pub budget_utilization: u8,
    pub performance_score: u8,
    /// Quarter-over-quarter change, in percent.
    pub trend: i8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompanyKpi {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "p-website",
            name: "Website Redesign",
            health: ProjectHealth::OnTrack,
            progress: 72,
            team_size: 6,
            due_date: "2026-12-15",
            budget_used: 64,
        },
        Project {
            id: "p-mobile",
            name: "Mobile App Launch",
            health: ProjectHealth::AtRisk,
            progress: 45,
            team_size: 8,
            due_date: "2026-11-30",
            budget_used: 71,
        },
        Project {
            id: "p-crm",
            name: "CRM Migration",
            health: ProjectHealth::Delayed,
            progress: 28,
            team_size: 4,
            due_date: "2026-11-05",
            budget_used: 52,
        },
        Project {
            id: "p-onboarding",
            name: "Onboarding Portal",
            health: ProjectHealth::Completed,
            progress: 100,
            team_size: 3,
            due_date: "2026-09-20",
            budget_used: 93,
        },
    ]
}

pub fn sample_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Priya Raman",
            title: "Frontend Engineer",
            active_tasks: 7,
            utilization: 92,
        },
        TeamMember {
            name: "Marcus Chen",
            title: "Backend Engineer",
            active_tasks: 5,
            utilization: 78,
        },
        TeamMember {
            name: "Sofia Alvarez",
            title: "Product Designer",
            active_tasks: 4,
            utilization: 64,
        },
        TeamMember {
            name: "Jonah Okafor",
            title: "QA Analyst",
            active_tasks: 9,
            utilization: 105,
        },
    ]
}

pub fn sample_departments() -> Vec<DepartmentMetric> {
    vec![
        DepartmentMetric {
            department: "Engineering",
            headcount: 48,
            budget_utilization: 82,
            performance_score: 91,
            trend: 6,
        },
        DepartmentMetric {
            department: "Sales",
            headcount: 31,
            budget_utilization: 74,
            performance_score: 87,
            trend: 12,
        },
        DepartmentMetric {
            department: "Marketing",
            headcount: 17,
            budget_utilization: 96,
            performance_score: 72,
            trend: -4,
        },
        DepartmentMetric {
            department: "Operations",
            headcount: 22,
            budget_utilization: 68,
            performance_score: 84,
            trend: 2,
        },
        DepartmentMetric {
            department: "Human Resources",
            headcount: 9,
            budget_utilization: 59,
            performance_score: 88,
            trend: 0,
        },
    ]
}

pub fn sample_kpis() -> Vec<CompanyKpi> {
    vec![
        CompanyKpi {
            label: "Quarterly Revenue",
            value: "$4.2M",
            change: "+8.5%",
            positive: true,
        },
        CompanyKpi {
            label: "Operating Margin",
            value: "18.3%",
            change: "+1.2pt",
            positive: true,
        },
        CompanyKpi {
            label: "Employee Count",
            value: "127",
            change: "+5",
            positive: true,
        },
        CompanyKpi {
            label: "Customer Churn",
            value: "3.1%",
            change: "+0.4pt",
            positive: false,
        },
    ]
}

/// Headcount summed over every department.
pub fn total_headcount(departments: &[DepartmentMetric]) -> u32 {
    departments.iter().map(|d| d.headcount).sum()
}

/// Mean performance score, rounded down; zero for an empty list.
pub fn average_performance(departments: &[DepartmentMetric]) -> u8 {
    if departments.is_empty() {
        return 0;
    }
    let sum: u32 = departments.iter().map(|d| u32::from(d.performance_score)).sum();
    (sum / departments.len() as u32) as u8
}

/// Sample feed served by the development activities endpoint.
pub fn sample_activities(user_id: &str, now: DateTime<Utc>) -> Vec<Activity> {
    let entry = |n: usize, kind: ActivityKind, title: &str, detail: &str, ago: Duration| Activity {
        id: format!("{user_id}-{n}"),
        kind,
        title: title.to_string(),
        description: Some(detail.to_string()),
        timestamp: (now - ago).to_rfc3339(),
        user_id: Some(user_id.to_string()),
    };
    vec![
        entry(
            1,
            ActivityKind::Commit,
            "Pushed 3 commits to main",
            "Refactor invoice export",
            Duration::minutes(12),
        ),
        entry(
            2,
            ActivityKind::CalendarEvent,
            "Sprint planning",
            "Conference room B",
            Duration::hours(3),
        ),
        entry(
            3,
            ActivityKind::Task,
            "Completed \"Update onboarding docs\"",
            "Moved to Done",
            Duration::days(1),
        ),
        entry(
            4,
            ActivityKind::Commit,
            "Opened pull request #214",
            "Add CSV import for timesheets",
            Duration::days(2),
        ),
    ]
}
