use dioxus::prelude::*;
use shared_types::{Task, TaskCounts, UserRole};
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, ProgressBar, StatCard,
    TabContent, TabList, TabTrigger, Tabs,
};

use super::activity_feed::{use_activity_feed, ActivityList, ActivityStats};
use super::DashboardShell;
use crate::format_helpers::{format_due_date, priority_variant, status_variant};
use crate::guard::{dashboard_audience, ProtectedRoute};
use crate::routes::Route;
use crate::storage::BrowserStorage;
use crate::task_store::TaskStore;

/// How many upcoming tasks the dashboard lists.
const UPCOMING_LIMIT: usize = 5;

#[component]
pub fn EmployeeDashboard() -> Element {
    rsx! {
        ProtectedRoute { allowed_roles: dashboard_audience(UserRole::Employee),
            EmployeeOverview {}
        }
    }
}

/// Open tasks ordered by due date, soonest first.
pub fn upcoming(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut open: Vec<Task> = tasks.iter().filter(|t| !t.is_completed()).cloned().collect();
    open.sort_by_key(|t| t.due_date);
    open.truncate(limit);
    open
}

#[component]
fn EmployeeOverview() -> Element {
    let tasks = use_signal(|| TaskStore::load(BrowserStorage).tasks().to_vec());
    let feed = use_activity_feed();

    let today = shared_types::today();
    let counts = TaskCounts::tally(&tasks.read(), today);
    let next_up = upcoming(&tasks.read(), UPCOMING_LIMIT);

    rsx! {
        DashboardShell { title: "My Workspace".to_string(),
            div { class: "stat-grid",
                StatCard {
                    title: "Open tasks".to_string(),
                    value: (counts.todo + counts.in_progress).to_string(),
                    detail: format!("{} overdue", counts.overdue),
                }
                StatCard {
                    title: "Completed".to_string(),
                    value: counts.completed.to_string(),
                    detail: format!("{}% of all tasks", counts.completion_rate()),
                }
            }
            ActivityStats { feed: feed.clone() }

            Card {
                CardHeader {
                    CardTitle { "Overall progress" }
                }
                CardContent {
                    ProgressBar { value: counts.completion_rate() as i64, label: "Tasks done".to_string() }
                }
            }

            Tabs { default_value: "upcoming", horizontal: true,
                TabList {
                    TabTrigger { value: "upcoming", index: 0usize, "Upcoming" }
                    TabTrigger { value: "activity", index: 1usize, "Activity" }
                }
                TabContent { value: "upcoming", index: 0usize,
                    Card {
                        CardHeader {
                            CardTitle { "Up next" }
                            CardDescription {
                                Link { to: Route::Tasks {}, "Open the task manager" }
                            }
                        }
                        CardContent {
                            if next_up.is_empty() {
                                p { class: "empty-state", "Nothing due. Add tasks from the task manager." }
                            }
                            ul { class: "task-summary-list",
                                for task in next_up {
                                    li { key: "{task.id}", class: "task-summary",
                                        span { class: "task-summary-title", "{task.title}" }
                                        Badge { variant: priority_variant(task.priority), {task.priority.as_str()} }
                                        Badge { variant: status_variant(task.status), dot: true, {task.status.label()} }
                                        span {
                                            class: if task.is_overdue(today) { "task-due overdue" } else { "task-due" },
                                            {format_due_date(task.due_date)}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                TabContent { value: "activity", index: 1usize,
                    ActivityList { feed }
                }
            }
        }
    }
}
