use super::use_session;
use crate::session::ADMIN_HOME;
use dioxus::prelude::*;

#[component]
pub fn AdminHome() -> Element {
    let session = use_session();
    let allowed = session().user().is_some_and(|user| user.can(ADMIN_HOME));

    rsx! {
        div { id: "admin-page",
            h1 { "Dashboard" }
            if allowed {
                p { "Administration tools." }
            } else {
                p { class: "error-message", "You are not authorized to view this page." }
            }
        }
    }
}
