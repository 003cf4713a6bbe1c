//! Display formatting shared by the pages.

use chrono::NaiveDate;
use shared_types::metrics::ProjectHealth;
use shared_types::{TaskPriority, TaskStatus};
use shared_ui::BadgeVariant;

/// "Mar 20, 2024".
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn status_variant(status: TaskStatus) -> BadgeVariant {
    match status {
        TaskStatus::Todo => BadgeVariant::Secondary,
        TaskStatus::InProgress => BadgeVariant::Primary,
        TaskStatus::Completed => BadgeVariant::Success,
    }
}

pub fn priority_variant(priority: TaskPriority) -> BadgeVariant {
    match priority {
        TaskPriority::Low => BadgeVariant::Outline,
        TaskPriority::Medium => BadgeVariant::Warning,
        TaskPriority::High => BadgeVariant::Destructive,
    }
}

pub fn health_variant(health: ProjectHealth) -> BadgeVariant {
    match health {
        ProjectHealth::OnTrack => BadgeVariant::Primary,
        ProjectHealth::AtRisk => BadgeVariant::Warning,
        ProjectHealth::Delayed => BadgeVariant::Destructive,
        ProjectHealth::Completed => BadgeVariant::Success,
    }
}

/// Signed percentage such as "+4%" or "-2%".
pub fn format_trend(trend: i8) -> String {
    if trend > 0 {
        format!("+{trend}%")
    } else {
        format!("{trend}%")
    }
}

/// Capitalize the first letter of a lowercase identifier ("pro" → "Pro").
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn due_dates_are_human_readable() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_due_date(date), "Mar 5, 2024");
    }

    #[test]
    fn trend_has_explicit_sign() {
        assert_eq!(format_trend(4), "+4%");
        assert_eq!(format_trend(0), "0%");
        assert_eq!(format_trend(-3), "-3%");
    }

    #[test]
    fn title_case_handles_empty() {
        assert_eq!(title_case("enterprise"), "Enterprise");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn completed_work_reads_as_success() {
        assert_eq!(status_variant(TaskStatus::Completed), BadgeVariant::Success);
        assert_eq!(health_variant(ProjectHealth::Completed), BadgeVariant::Success);
    }
}
