use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Regular,
    Compact,
}

impl ButtonVariant {
    fn as_attr(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }
}

/// Buttons default to `type="button"` so they never submit a form by
/// accident; pass `submit: true` for the form's primary action.
///
/// `busy` marks an in-flight action: the button is disabled and carries
/// `aria-busy` until the caller clears it.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub submit: bool,
    #[props(default)]
    pub busy: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut own = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.as_attr(), None, false),
    ];
    if props.size == ButtonSize::Compact {
        own.push(Attribute::new("data-size", "compact", None, false));
    }
    if props.busy {
        own.push(Attribute::new("aria-busy", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![own, props.attributes]);
    let kind = if props.submit { "submit" } else { "button" };
    let onclick = props.onclick;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: kind,
            disabled: props.disabled || props.busy,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
