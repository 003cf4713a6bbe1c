use dioxus::prelude::*;

use crate::components::card::{Card, CardContent};

/// Direction of a stat's change, used to color the detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// Single headline number with a title and optional detail line.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] detail: Option<String>,
    #[props(default)] trend: Trend,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { class: "stat-card",
            CardContent {
                p { class: "stat-title", "{title}" }
                p { class: "stat-value", "{value}" }
                if let Some(text) = detail {
                    p { class: "stat-detail", "data-trend": trend.as_str(), "{text}" }
                }
            }
        }
    }
}
