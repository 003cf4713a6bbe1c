use dioxus::prelude::*;
use shared_types::metrics::{
    average_performance, sample_departments, sample_kpis, total_headcount, DepartmentMetric,
};
use shared_types::{PlanTier, UserRole};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, ProgressBar, StatCard, Trend,
};

use super::activity_feed::{use_activity_feed, ActivityList, ActivityStats};
use super::DashboardShell;
use crate::format_helpers::format_trend;
use crate::guard::{dashboard_audience, ProtectedRoute};
use crate::tier_gate::{TierGate, UpgradeNotice};

#[component]
pub fn CeoDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed_roles: dashboard_audience(UserRole::Ceo),
            CompanyOverview {}
        }
    }
}

/// The department with the highest performance score.
pub fn top_department(departments: &[DepartmentMetric]) -> Option<&DepartmentMetric> {
    departments.iter().max_by_key(|d| d.performance_score)
}

#[component]
fn CompanyOverview() -> Element {
    let kpis = sample_kpis();
    let departments = sample_departments();
    let headcount = total_headcount(&departments);
    let performance = average_performance(&departments);
    let department_count = departments.len();
    let leader = top_department(&departments)
        .map(|d| format!("{} leads at {}", d.department, d.performance_score));
    let feed = use_activity_feed();

    rsx! {
        DashboardShell { title: "Company Overview".to_string(),
            div { class: "stat-grid",
                for kpi in kpis {
                    StatCard {
                        key: "{kpi.label}",
                        title: kpi.label.to_string(),
                        value: kpi.value.to_string(),
                        detail: format!("{} vs last quarter", kpi.change),
                        trend: if kpi.positive { Trend::Up } else { Trend::Down },
                    }
                }
            }
            ActivityStats { feed: feed.clone() }

            Card {
                CardHeader {
                    CardTitle { "Departments" }
                    CardDescription { "{headcount} people across {department_count} departments, average performance {performance}" }
                }
                CardContent {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Department" }
                                th { "Headcount" }
                                th { "Budget utilization" }
                                th { "Performance" }
                                th { "Trend" }
                            }
                        }
                        tbody {
                            for dept in departments.iter() {
                                tr { key: "{dept.department}",
                                    td { "{dept.department}" }
                                    td { "{dept.headcount}" }
                                    td { ProgressBar { value: i64::from(dept.budget_utilization) } }
                                    td { "{dept.performance_score}" }
                                    td {
                                        class: if dept.trend < 0 { "trend down" } else { "trend up" },
                                        {format_trend(dept.trend)}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            TierGate {
                required: PlanTier::Enterprise,
                fallback: rsx! { UpgradeNotice { required: PlanTier::Enterprise } },
                Card {
                    CardHeader {
                        CardTitle { "Board summary" }
                    }
                    CardContent {
                        ul { class: "board-summary",
                            li { "Headcount: {headcount}" }
                            li { "Average performance: {performance}" }
                            if let Some(line) = leader {
                                li { "{line}" }
                            }
                        }
                    }
                }
            }

            ActivityList { feed }
        }
    }
}
