use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let session_id = ctx.default_session_id().value();

    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { "Role-based areas for scheduling sessions and running inductions." }
            ul { class: "home-areas",
                li { Link { to: Route::Admin {}, "Admin dashboard" } }
                li { Link { to: Route::Hr {}, "HR dashboard" } }
                li { Link { to: Route::Facilitator {}, "Facilitator dashboard" } }
                li { Link { to: Route::Hse {}, "HSE dashboard" } }
            }
            p { class: "home-join",
                Link { to: Route::Join { session_id }, "Join today's session" }
            }
        }
    }
}
