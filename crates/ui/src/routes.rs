use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CourseView, ProgressView, ToastHost, TrackerState};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CourseView)] Course {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let tracker = use_context::<TrackerState>();
    let percentage = tracker.progress.read().summary().percentage;

    rsx! {
        nav { class: "sidebar",
            h1 { "Learn AI" }
            ul {
                li { Link { to: Route::Course {}, "Course" } }
                li { Link { to: Route::Progress {}, "Progress" } }
            }
            p { class: "sidebar-progress", "{percentage}% complete" }
        }
    }
}
