use dioxus::prelude::*;

use crate::components::field::{error_id, Field};

/// Single-line text control. `id` ties it to its label and, when `error`
/// is set, to the error message via `aria-describedby`.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let described_by = if error.is_some() && !id.is_empty() {
        error_id(&id)
    } else {
        String::new()
    };
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Field { id: id.clone(), label, error,
            input {
                class: "input",
                id: "{id}",
                r#type: "{input_type}",
                value,
                placeholder,
                required,
                disabled,
                "aria-invalid": invalid,
                "aria-describedby": if described_by.is_empty() { None } else { Some(described_by) },
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
