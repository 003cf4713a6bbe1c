use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod format_helpers;
mod guard;
mod role_store;
mod routes;
mod storage;
mod task_store;
mod tier_gate;

use auth::use_auth_provider;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        server::health::record_start_time();

        let flags = server::config::feature_flags();
        tracing::info!(
            federated_sign_in = flags.federated_sign_in,
            activity_feed = flags.activity_feed,
            email_verification = flags.email_verification,
            "starting workdesk"
        );

        let router = dioxus::server::router(App).merge(server::routes());
        Ok(server::telemetry::with_request_tracing(router))
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Flags come from the server once; all-off if the call fails.
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_auth_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
