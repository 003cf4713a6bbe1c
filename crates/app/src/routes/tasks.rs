use dioxus::prelude::*;
use shared_types::{FeatureFlags, Task, TaskCounts, TaskDraft, TaskFilter, TaskPriority};
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormSelect,
    Input, PageHeader, ProgressBar, StatCard, TabContent, TabList, TabTrigger, Tabs,
};

use crate::format_helpers::{format_due_date, priority_variant, status_variant};
use crate::guard::ProtectedRoute;
use crate::storage::BrowserStorage;
use crate::task_store::TaskStore;

/// Personal task manager, open to every role.
#[component]
pub fn Tasks() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        ProtectedRoute { require_verified: flags.email_verification,
            TaskManager {}
        }
    }
}

type Store = TaskStore<BrowserStorage>;

#[component]
fn TaskManager() -> Element {
    let store = use_signal(|| Store::load(BrowserStorage));
    let mut draft = use_signal(|| TaskDraft {
        due_date: shared_types::today().format(shared_types::DUE_DATE_FORMAT).to_string(),
        ..TaskDraft::default()
    });
    let mut form_error = use_signal(|| Option::<String>::None);

    let today = shared_types::today();
    let counts = TaskCounts::tally(store.read().tasks(), today);
    let views: Vec<(TaskFilter, String, Vec<Task>)> = TaskFilter::ALL
        .into_iter()
        .map(|view| {
            let tasks: Vec<Task> = view
                .select(store.read().tasks(), today)
                .into_iter()
                .cloned()
                .collect();
            let tab = format!("{} ({})", view.label(), tasks.len());
            (view, tab, tasks)
        })
        .collect();

    let mut store_for_add = store;
    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let result = store_for_add
            .write()
            .add(draft(), shared_types::today())
            .map(|task| task.id.clone());
        match result {
            Ok(id) => {
                tracing::debug!(%id, "task added");
                form_error.set(None);
                draft.with_mut(|d| {
                    d.title.clear();
                    d.priority = TaskPriority::default();
                });
            }
            Err(msg) => form_error.set(Some(msg)),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tasks.css") }

        section { class: "tasks-page",
            PageHeader {
                title: "Tasks".to_string(),
                subtitle: "Saved in this browser only".to_string(),
            }

            div { class: "stat-grid",
                StatCard { title: "Total".to_string(), value: counts.total.to_string() }
                StatCard { title: "To do".to_string(), value: counts.todo.to_string() }
                StatCard { title: "In progress".to_string(), value: counts.in_progress.to_string() }
                StatCard {
                    title: "Completed".to_string(),
                    value: counts.completed.to_string(),
                    detail: format!("{} overdue", counts.overdue),
                }
            }

            Card {
                CardHeader {
                    CardTitle { "New task" }
                }
                CardContent {
                    form { class: "task-form", onsubmit: handle_add,
                        Input {
                            id: "task_title",
                            label: "Title",
                            placeholder: "What needs doing?",
                            value: draft().title,
                            error: form_error(),
                            on_input: move |e: FormEvent| draft.with_mut(|d| d.title = e.value()),
                        }
                        Input {
                            input_type: "date",
                            id: "task_due",
                            label: "Due date",
                            value: draft().due_date,
                            on_input: move |e: FormEvent| draft.with_mut(|d| d.due_date = e.value()),
                        }
                        PrioritySelect {
                            id: "task_priority",
                            value: draft().priority,
                            onchange: move |p| draft.with_mut(|d| d.priority = p),
                        }
                        Button { submit: true, "Add task" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Your tasks" }
                }
                CardContent {
                    Tabs { default_value: TaskFilter::default().as_str(), horizontal: true,
                        TabList {
                            for (i, (view, tab, _)) in views.iter().enumerate() {
                                TabTrigger { key: "{tab}", value: view.as_str(), index: i, "{tab}" }
                            }
                        }
                        for (i, (view, _, tasks)) in views.into_iter().enumerate() {
                            TabContent { key: "{i}", value: view.as_str(), index: i,
                                if tasks.is_empty() {
                                    p { class: "empty-state", {view.empty_message()} }
                                }
                                ul { class: "task-list",
                                    for task in tasks {
                                        TaskRow { key: "{task.id}", task, store }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PrioritySelect(id: String, value: TaskPriority, onchange: EventHandler<TaskPriority>) -> Element {
    rsx! {
        FormSelect {
            id,
            label: "Priority",
            value: value.as_str().to_string(),
            onchange: move |e: Event<FormData>| onchange.call(TaskPriority::from_str_or_default(&e.value())),
            for p in TaskPriority::ALL {
                option { value: p.as_str(), selected: p == value, {p.as_str()} }
            }
        }
    }
}

/// One task with its inline controls. Switches to an edit form on demand.
#[component]
fn TaskRow(task: Task, store: Signal<Store>) -> Element {
    let mut store = store;
    let mut editing = use_signal(|| false);
    let mut edit = use_signal(|| TaskDraft::from_task(&task));
    let mut edit_error = use_signal(|| Option::<String>::None);
    let today = shared_types::today();
    let overdue = task.is_overdue(today);

    let id = task.id.clone();
    let toggle_id = id.clone();
    let progress_id = id.clone();
    let save_id = id.clone();
    let delete_id = id;

    if editing() {
        let handle_save = move |evt: FormEvent| {
            evt.prevent_default();
            match store.write().update(&save_id, &edit(), shared_types::today()) {
                Ok(()) => {
                    edit_error.set(None);
                    editing.set(false);
                }
                Err(msg) => edit_error.set(Some(msg)),
            }
        };

        return rsx! {
            li { class: "task-row editing",
                form { class: "task-form", onsubmit: handle_save,
                    Input {
                        id: format!("title-{}", task.id),
                        value: edit().title,
                        label: "Title",
                        error: edit_error(),
                        on_input: move |e: FormEvent| edit.with_mut(|d| d.title = e.value()),
                    }
                    Input {
                        id: format!("due-{}", task.id),
                        input_type: "date",
                        label: "Due date",
                        value: edit().due_date,
                        on_input: move |e: FormEvent| edit.with_mut(|d| d.due_date = e.value()),
                    }
                    PrioritySelect {
                        id: format!("priority-{}", task.id),
                        value: edit().priority,
                        onchange: move |p| edit.with_mut(|d| d.priority = p),
                    }
                    Button { submit: true, "Save" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            edit_error.set(None);
                            editing.set(false);
                        },
                        "Cancel"
                    }
                }
            }
        };
    }

    let draft_source = task.clone();

    rsx! {
        li { class: if task.is_completed() { "task-row completed" } else { "task-row" },
            input {
                r#type: "checkbox",
                class: "task-toggle",
                checked: task.is_completed(),
                "aria-label": "Mark complete",
                onchange: move |_| store.write().toggle(&toggle_id),
            }
            div { class: "task-main",
                span { class: "task-title", "{task.title}" }
                div { class: "task-meta",
                    Badge { variant: priority_variant(task.priority), {task.priority.as_str()} }
                    Badge { variant: status_variant(task.status), dot: true, {task.status.label()} }
                    span {
                        class: if overdue { "task-due overdue" } else { "task-due" },
                        if overdue { "Overdue · " }
                        {format_due_date(task.due_date)}
                    }
                }
                div { class: "task-progress",
                    ProgressBar { value: i64::from(task.progress), show_value: false }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "5",
                        value: "{task.progress}",
                        "aria-label": "Progress",
                        onchange: move |e: Event<FormData>| {
                            let pct = e.value().parse::<u8>().unwrap_or(0);
                            store.write().set_progress(&progress_id, pct);
                        },
                    }
                    span { class: "task-progress-value", "{task.progress}%" }
                }
            }
            div { class: "task-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Compact,
                    onclick: move |_| {
                        edit.set(TaskDraft::from_task(&draft_source));
                        editing.set(true);
                    },
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    size: ButtonSize::Compact,
                    onclick: move |_| store.write().delete(&delete_id),
                    "Delete"
                }
            }
        }
    }
}
