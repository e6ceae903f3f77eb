use super::use_session;
use crate::session::SessionContext;
use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    let session = use_session();

    rsx! {
        div { id: "profile-page",
            h1 { "Your profile" }
            match session() {
                SessionContext::Authenticated(user) => rsx! {
                    img { class: "profile__avatar", src: "{user.avatar_url}", alt: "" }
                    h2 { "{user.display_name}" }
                },
                SessionContext::Guest => rsx! {
                    p { "Sign in to see your profile." }
                },
            }
        }
    }
}
