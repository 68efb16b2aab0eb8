use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    AdminView, FacilitatorView, HomeView, HrView, HseView, JoinView, NotFoundView, ResultView,
    ScanView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/admin", AdminView)] Admin {},
        #[route("/hr", HrView)] Hr {},
        #[route("/facilitator", FacilitatorView)] Facilitator {},
        #[route("/hse", HseView)] Hse {},
        #[route("/sessions/:session_id/join", JoinView)] Join { session_id: u64 },
        #[route("/sessions/:session_id/scan", ScanView)] Scan { session_id: u64 },
        #[route("/result?:score&:status", ResultView)] Result { score: Option<String>, status: Option<String> },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "Induction Training" }
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            h1 { "Induct" }
            nav {
                ul {
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Admin {}, "Admin" } }
                    li { Link { to: Route::Hr {}, "HR" } }
                    li { Link { to: Route::Facilitator {}, "Facilitator" } }
                    li { Link { to: Route::Hse {}, "HSE" } }
                }
            }
        }
    }
}
