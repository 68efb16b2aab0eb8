use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { "No page exists at /{path}." }
            p {
                Link { to: Route::Home {}, "Back to Home" }
            }
        }
    }
}
