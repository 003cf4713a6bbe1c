use dioxus::prelude::*;

/// Clamp a percentage into `0..=100`.
pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Horizontal progress bar for a percentage.
#[component]
pub fn ProgressBar(
    value: i64,
    #[props(default)] label: Option<String>,
    #[props(default = true)] show_value: bool,
) -> Element {
    let pct = clamp_percent(value);
    let state = match pct {
        0 => "empty",
        100 => "complete",
        _ => "partial",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress-row",
            if let Some(text) = label {
                span { class: "progress-label", "{text}" }
            }
            div {
                class: "progress",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{pct}",
                "data-state": state,
                div { class: "progress-indicator", style: "width: {pct}%;" }
            }
            if show_value {
                span { class: "progress-value", "{pct}%" }
            }
        }
    }
}
