use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::use_tracker_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_tracker_provider(&ctx);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Learn AI" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
