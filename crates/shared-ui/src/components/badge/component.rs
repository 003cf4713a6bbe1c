use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    /// Value of the `data-style` attribute the stylesheet keys on.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

/// Short inline label for a status, priority, role or plan.
///
/// With `dot` set, a small colored marker precedes the text; it is hidden
/// from assistive technology since the text carries the meaning.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] dot: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let own = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![own, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if dot {
                span { class: "badge-dot", "aria-hidden": "true" }
            }
            {children}
        }
    }
}
