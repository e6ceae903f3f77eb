use dioxus::prelude::*;

// Sign-in and sign-up are owned by the identity service; these routes only reserve the paths.

#[component]
pub fn Login() -> Element {
    rsx! {
        div { id: "login-page",
            h1 { "Login" }
        }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        div { id: "register-page",
            h1 { "Register" }
        }
    }
}
