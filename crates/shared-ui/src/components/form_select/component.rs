use dioxus::prelude::*;

use crate::components::field::Field;

/// Native `<select>` in a labelled [`Field`]. Children are the `option`s;
/// the handler receives the raw change event and parses the value itself.
#[component]
pub fn FormSelect(
    #[props(default)] id: String,
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Field { id: id.clone(), label,
            select {
                class: "form-select",
                id: "{id}",
                value,
                disabled,
                onchange: move |evt| {
                    if let Some(handler) = onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
