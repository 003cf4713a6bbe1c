use dioxus::prelude::*;

/// Declares a card section: a single element with a fixed class that
/// merges any extra attributes the caller passes.
macro_rules! card_section {
    ($(#[$doc:meta])* $name:ident, $tag:ident, $class:literal) => {
        $(#[$doc])*
        #[component]
        pub fn $name(
            #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
            children: Element,
        ) -> Element {
            let own = vec![Attribute::new("class", $class, None, false)];
            let merged = dioxus_primitives::merge_attributes(vec![own, attributes]);
            rsx! {
                $tag { ..merged, {children} }
            }
        }
    };
}

/// Bordered surface grouping a header, body and footer. Only `Card`
/// pulls in the stylesheet; the sections rely on it.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let own = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![own, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { ..merged, {children} }
    }
}

card_section!(CardHeader, header, "card-header");
card_section!(
    /// Rendered as an `h3`, so page headings stay above it.
    CardTitle, h3, "card-title"
);
card_section!(CardDescription, p, "card-description");
card_section!(CardContent, div, "card-content");
card_section!(CardFooter, footer, "card-footer");
