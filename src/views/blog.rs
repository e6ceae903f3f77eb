use dioxus::prelude::*;

#[component]
pub fn Blog() -> Element {
    rsx! {
        div { id: "blog-page",
            h1 { "Information page" }
            p { "News and data of interest published by the municipality." }
        }
    }
}
