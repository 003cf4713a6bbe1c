use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

fn push_class(attributes: &mut Vec<Attribute>, class: &'static str) {
    attributes.push(Attribute::new("class", class, None, false));
}

/// Tab set; `default_value` picks the initially open panel.
#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    push_class(&mut props.attributes, "tabs");
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    push_class(&mut props.attributes, "tab-list");
    rsx! {
        prim::TabList { ..props }
    }
}

#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    props.class.get_or_insert_with(|| "tab-trigger".to_string());
    rsx! {
        prim::TabTrigger { ..props }
    }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    props.class.get_or_insert_with(|| "tab-content".to_string());
    rsx! {
        prim::TabContent { ..props }
    }
}
