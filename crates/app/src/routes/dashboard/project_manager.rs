use dioxus::prelude::*;
use shared_types::metrics::{sample_projects, sample_team, Project, ProjectHealth};
use shared_types::{PlanTier, UserRole};
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, ProgressBar, StatCard, Trend,
};

use super::activity_feed::{use_activity_feed, ActivityList, ActivityStats};
use super::DashboardShell;
use crate::format_helpers::health_variant;
use crate::guard::{dashboard_audience, ProtectedRoute};
use crate::tier_gate::{use_plan_check, TierGate, UpgradeNotice};

#[component]
pub fn ProjectManagerDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed_roles: dashboard_audience(UserRole::ProjectManager),
            ProjectOverview {}
        }
    }
}

/// Headline numbers for the project portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioSummary {
    pub active: usize,
    pub needs_attention: usize,
    pub people: u32,
    pub average_progress: u8,
}

impl PortfolioSummary {
    pub fn of(projects: &[Project]) -> Self {
        let active = projects
            .iter()
            .filter(|p| p.health != ProjectHealth::Completed)
            .count();
        let needs_attention = projects
            .iter()
            .filter(|p| matches!(p.health, ProjectHealth::AtRisk | ProjectHealth::Delayed))
            .count();
        let people = projects.iter().map(|p| p.team_size).sum();
        let average_progress = if projects.is_empty() {
            0
        } else {
            let total: u32 = projects.iter().map(|p| u32::from(p.progress)).sum();
            (total / projects.len() as u32) as u8
        };
        Self {
            active,
            needs_attention,
            people,
            average_progress,
        }
    }
}

#[component]
fn ProjectOverview() -> Element {
    let projects = sample_projects();
    let team = sample_team();
    let summary = PortfolioSummary::of(&projects);
    let has_pro = use_plan_check(PlanTier::Pro);
    let feed = use_activity_feed();

    rsx! {
        DashboardShell { title: "Projects".to_string(),
            div { class: "stat-grid",
                StatCard { title: "Active projects".to_string(), value: summary.active.to_string() }
                StatCard {
                    title: "Needs attention".to_string(),
                    value: summary.needs_attention.to_string(),
                    detail: "At risk or delayed".to_string(),
                    trend: if summary.needs_attention > 0 { Trend::Down } else { Trend::Flat },
                }
                StatCard { title: "People assigned".to_string(), value: summary.people.to_string() }
                StatCard {
                    title: "Average progress".to_string(),
                    value: format!("{}%", summary.average_progress),
                }
            }
            ActivityStats { feed: feed.clone() }

            Card {
                CardHeader {
                    CardTitle { "Portfolio" }
                    CardDescription { "Every project with its delivery health" }
                }
                CardContent {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Project" }
                                th { "Health" }
                                th { "Progress" }
                                th { "Team" }
                                th { "Due" }
                                th { "Budget used" }
                            }
                        }
                        tbody {
                            for project in projects {
                                tr { key: "{project.id}",
                                    td { "{project.name}" }
                                    td {
                                        Badge { variant: health_variant(project.health), dot: true, {project.health.label()} }
                                    }
                                    td { ProgressBar { value: i64::from(project.progress) } }
                                    td { "{project.team_size}" }
                                    td { "{project.due_date}" }
                                    td {
                                        TierGate {
                                            required: PlanTier::Pro,
                                            fallback: rsx! { span { class: "muted", "Pro" } },
                                            "{project.budget_used}%"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if !has_pro {
                        UpgradeNotice { required: PlanTier::Pro }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Team workload" }
                    CardDescription { "Share of each person's capacity already committed" }
                }
                CardContent {
                    div { class: "workload-list",
                        for member in team {
                            div { key: "{member.name}", class: "workload-row",
                                div { class: "workload-person",
                                    span { class: "workload-name", "{member.name}" }
                                    span { class: "workload-title", "{member.title} · {member.active_tasks} tasks" }
                                }
                                ProgressBar { value: i64::from(member.utilization) }
                            }
                        }
                    }
                }
            }

            ActivityList { feed }
        }
    }
}
