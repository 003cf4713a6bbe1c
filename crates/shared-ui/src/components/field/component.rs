use dioxus::prelude::*;

/// Id of the inline error element for the control `id`.
pub fn error_id(id: &str) -> String {
    format!("{id}-error")
}

/// Label, control and inline error stacked as one form row.
///
/// The label is tied to the control by `id`, and the error message gets
/// [`error_id`] so the control can point at it with `aria-describedby`.
#[component]
pub fn Field(
    #[props(default)] id: String,
    #[props(default)] label: String,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    let message_id = error_id(&id);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": error.is_some(),
            if !label.is_empty() {
                label { class: "field-label", r#for: "{id}", "{label}" }
            }
            {children}
            if let Some(message) = error {
                span { class: "field-error", id: "{message_id}", role: "alert", "{message}" }
            }
        }
    }
}
