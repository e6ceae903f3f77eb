use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        div { id: "home-page",
            h1 { "Welcome" }
            p { "Procedures, news and contact information for residents." }
        }
    }
}
