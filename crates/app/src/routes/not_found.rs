use dioxus::prelude::*;

use crate::auth::use_dashboard_url;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let home = use_dashboard_url();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " doesn't match any page in Workdesk."
                }
                Link { to: home, class: "not-found-link", "Take me to my dashboard" }
            }
        }
    }
}
