use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Date format used for due dates in forms and storage.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => TaskPriority::Low,
            "high" => TaskPriority::High,
            _ => TaskPriority::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Status implied by a progress percentage.
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            0 => TaskStatus::Todo,
            100.. => TaskStatus::Completed,
            _ => TaskStatus::InProgress,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A personal task kept in the browser's local storage.
///
/// `progress` is always within 0..=100 and `status` is `Completed`
/// exactly when `progress` is 100. Stored tasks are normalized on load:
/// progress wins over a contradicting status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "StoredTask")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(serialize_with = "serialize_due_date")]
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub progress: u8,
}

/// A task as found in storage, before the status is re-derived.
#[derive(Deserialize)]
struct StoredTask {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default, alias = "dueDate", deserialize_with = "deserialize_due_date")]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    priority: TaskPriority,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default, deserialize_with = "deserialize_progress")]
    progress: Option<u8>,
}

impl From<StoredTask> for Task {
    fn from(stored: StoredTask) -> Self {
        let id = if stored.id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            stored.id
        };
        // Without a stored percentage, fall back to what the status implies.
        let progress = stored.progress.unwrap_or(match stored.status {
            TaskStatus::Completed => 100,
            _ => 0,
        });
        let mut task = Task {
            id,
            title: stored.title,
            due_date: stored.due_date.unwrap_or_else(today),
            priority: stored.priority,
            status: stored.status,
            progress,
        };
        task.set_progress(progress);
        task
    }
}

impl Task {
    pub fn new(title: impl Into<String>, due_date: NaiveDate, priority: TaskPriority) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            due_date,
            priority,
            status: TaskStatus::Todo,
            progress: 0,
        }
    }

    /// Set progress (clamped to 100) and derive the status from it.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
        self.status = TaskStatus::for_progress(self.progress);
    }

    /// Flip between completed and not completed.
    ///
    /// A completed task goes back to `Todo` with no progress; anything
    /// else is marked `Completed` at 100%.
    pub fn toggle_completed(&mut self) {
        if self.status == TaskStatus::Completed {
            self.set_progress(0);
        } else {
            self.set_progress(100);
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed() && self.due_date < today
    }

    /// Due date formatted for `<input type="date">`.
    pub fn due_date_input(&self) -> String {
        self.due_date.format(DUE_DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` due date. Malformed input yields `today`.
pub fn parse_due_date(raw: &str, today: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT).unwrap_or(today)
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn serialize_due_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&date.format(DUE_DATE_FORMAT).to_string())
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(|s| parse_due_date(s, today())))
}

fn deserialize_progress<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .map(|pct| pct.clamp(0.0, 100.0).round() as u8))
}

/// Values typed into the task form before they become a `Task`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: String,
    pub priority: TaskPriority,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            due_date: task.due_date_input(),
            priority: task.priority,
        }
    }

    /// Returns the message to show when the draft cannot be saved.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Please enter a task title".to_string());
        }
        Ok(())
    }

    pub fn into_task(self, today: NaiveDate) -> Task {
        let due = parse_due_date(&self.due_date, today);
        Task::new(self.title.trim(), due, self.priority)
    }

    /// Copy the draft's editable fields onto an existing task.
    pub fn apply_to(&self, task: &mut Task, today: NaiveDate) {
        task.title = self.title.trim().to_string();
        task.due_date = parse_due_date(&self.due_date, today);
        task.priority = self.priority;
    }
}

/// The task manager's tabs, relative to a given day.
///
/// `Today` and `Upcoming` go by due date alone, so a finished task due
/// today still shows under `Today`. `Overdue` only holds unfinished
/// tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    Today,
    Upcoming,
    Overdue,
    Completed,
    All,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 5] = [
        TaskFilter::Today,
        TaskFilter::Upcoming,
        TaskFilter::Overdue,
        TaskFilter::Completed,
        TaskFilter::All,
    ];

    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskFilter::Today => task.due_date == today,
            TaskFilter::Upcoming => task.due_date > today,
            TaskFilter::Overdue => task.is_overdue(today),
            TaskFilter::Completed => task.is_completed(),
            TaskFilter::All => true,
        }
    }

    /// Tasks from `tasks` that belong in this view, in stored order.
    pub fn select<'a>(&self, tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t, today)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::Today => "today",
            TaskFilter::Upcoming => "upcoming",
            TaskFilter::Overdue => "overdue",
            TaskFilter::Completed => "completed",
            TaskFilter::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::Today => "Today",
            TaskFilter::Upcoming => "Upcoming",
            TaskFilter::Overdue => "Overdue",
            TaskFilter::Completed => "Completed",
            TaskFilter::All => "All",
        }
    }

    /// Message shown when the view has no tasks.
    pub fn empty_message(&self) -> &'static str {
        match self {
            TaskFilter::Today => "No tasks due today",
            TaskFilter::Upcoming => "No upcoming tasks",
            TaskFilter::Overdue => "No overdue tasks",
            TaskFilter::Completed => "No completed tasks",
            TaskFilter::All => "No tasks yet",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .unwrap_or_default()
    }
}

/// Per-status totals shown above the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl TaskCounts {
    pub fn tally(tasks: &[Task], today: NaiveDate) -> Self {
        tasks.iter().fold(Self::default(), |mut acc, task| {
            acc.total += 1;
            match task.status {
                TaskStatus::Todo => acc.todo += 1,
                TaskStatus::InProgress => acc.in_progress += 1,
                TaskStatus::Completed => acc.completed += 1,
            }
            if task.is_overdue(today) {
                acc.overdue += 1;
            }
            acc
        })
    }

    /// Whole-number completion percentage across all tasks.
    pub fn completion_rate(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }
}
