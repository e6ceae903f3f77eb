use crate::menu::{NavMenus, NavTarget};
use crate::session::{ADMIN_HOME, AuthenticatedUser, CSRF_FIELD, SessionContext};
use crate::{LOGOUT_PATH, Route};
use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Router layout: loads the visitor's session, shares it with the pages and
/// renders the bar above them
#[component]
pub fn Navbar() -> Element {
    let resource = use_server_future(current_session)?;
    let session = use_memo(move || match &*resource.read() {
        Some(Ok(ctx)) => ctx.clone(),
        Some(Err(e)) => {
            log::warn!("Could not load the session context, rendering as guest: {}", e);
            SessionContext::Guest
        }
        None => SessionContext::Guest,
    });
    use_context_provider(|| session);

    rsx! {
        NavbarView { session: session(),
            Outlet::<Route> {}
        }
    }
}

/// Session context loaded by the [`Navbar`] layout
pub fn use_session() -> Memo<SessionContext> {
    use_context::<Memo<SessionContext>>()
}

/// The navigation bar for a given session, wrapping the page below it.
///
/// Clicks bubble up to the wrapper, which closes every panel the click was
/// not aimed at. Triggers and panels stop propagation after recording their
/// own target.
#[component]
pub fn NavbarView(
    session: SessionContext,
    #[props(default)] menus: NavMenus,
    children: Element,
) -> Element {
    let mut menus = use_signal(|| menus);
    let home = Route::Home {}.to_string();
    let blog = Route::Blog {}.to_string();
    let mobile = menus().mobile;

    rsx! {
        div {
            class: "layout",
            onclick: move |_| menus.write().click(NavTarget::Elsewhere),
            nav { id: "navbar", class: "navbar",
                div { class: "navbar__inner",
                    button {
                        id: "mobile-menu-button",
                        r#type: "button",
                        class: "navbar__mobile-toggle icon-button",
                        aria_controls: "mobile-menu",
                        aria_expanded: mobile.aria_expanded(),
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            menus.write().click(NavTarget::MobileTrigger);
                        },
                        span { class: "sr-only", "Open main menu" }
                        if mobile.is_open() {
                            CloseIcon {}
                        } else {
                            BarsIcon {}
                        }
                    }

                    a { id: "brand-link", class: "navbar__brand", href: "{home}",
                        img { class: "navbar__logo", src: LOGO, alt: "Logo" }
                    }
                    div { class: "navbar__links",
                        a { class: "navbar__link", href: "{home}", "Home" }
                        a { class: "navbar__link", href: "{blog}", "Information page" }
                    }

                    match session {
                        SessionContext::Authenticated(user) => rsx! {
                            UserMenu { user, menus }
                        },
                        SessionContext::Guest => rsx! {
                            GuestLinks {}
                        },
                    }
                }

                div {
                    id: "mobile-menu",
                    class: "navbar__mobile-menu",
                    "data-state": mobile.data_state(),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        menus.write().click(NavTarget::MobilePanel);
                    },
                }
            }
            main { class: "page-content", {children} }
        }
    }
}

#[component]
fn GuestLinks() -> Element {
    let login = Route::Login {}.to_string();
    let register = Route::Register {}.to_string();

    rsx! {
        div { id: "guest-links", class: "navbar__actions",
            a { class: "navbar__link", href: "{login}", "Login" }
            a { class: "navbar__link", href: "{register}", "Register" }
        }
    }
}

/// Notification bell and profile dropdown for a signed-in user
#[component]
fn UserMenu(user: AuthenticatedUser, menus: Signal<NavMenus>) -> Element {
    let mut menus = menus;
    let profile = Route::Profile {}.to_string();
    let admin = Route::AdminHome {}.to_string();
    let show_admin = user.can(ADMIN_HOME);
    let dropdown = menus().profile;

    rsx! {
        div { class: "navbar__actions",
            // decorative only
            button {
                id: "notification-button",
                r#type: "button",
                class: "icon-button",
                span { class: "sr-only", "View notifications" }
                BellIcon {}
            }

            div { class: "user-menu",
                button {
                    id: "user-menu-button",
                    r#type: "button",
                    class: "user-menu__trigger",
                    aria_haspopup: "true",
                    aria_expanded: dropdown.aria_expanded(),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        menus.write().click(NavTarget::ProfileTrigger);
                    },
                    span { class: "sr-only", "Open user menu" }
                    img {
                        class: "user-menu__avatar",
                        src: "{user.avatar_url}",
                        alt: "",
                    }
                }

                div {
                    id: "user-menu",
                    class: "user-menu__panel",
                    role: "menu",
                    aria_labelledby: "user-menu-button",
                    "data-state": dropdown.data_state(),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        menus.write().click(NavTarget::ProfilePanel);
                    },
                    a {
                        class: "user-menu__item",
                        role: "menuitem",
                        href: "{profile}",
                        "Your profile"
                    }
                    if show_admin {
                        a {
                            class: "user-menu__item",
                            role: "menuitem",
                            href: "{admin}",
                            "Dashboard"
                        }
                    }
                    a { class: "user-menu__item", role: "menuitem", href: "#", "Settings" }
                    form { method: "post", action: LOGOUT_PATH,
                        input {
                            r#type: "hidden",
                            name: CSRF_FIELD,
                            value: "{user.csrf_token}",
                        }
                        button {
                            r#type: "submit",
                            class: "user-menu__item",
                            role: "menuitem",
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BarsIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5",
            }
        }
    }
}

#[component]
fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M6 18L18 6M6 6l12 12",
            }
        }
    }
}

#[component]
fn BellIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M14.857 17.082a23.848 23.848 0 005.454-1.31A8.967 8.967 0 0118 9.75v-.7V9A6 6 0 006 9v.75a8.967 8.967 0 01-2.312 6.022c1.733.64 3.56 1.085 5.455 1.31m5.714 0a24.255 24.255 0 01-5.714 0m5.714 0a3 3 0 11-5.714 0",
            }
        }
    }
}

/// Session context of the requesting visitor
#[server]
pub async fn current_session() -> Result<SessionContext, ServerFnError> {
    let headers: axum::http::HeaderMap = extract().await?;
    let session_id = crate::server::session_id_from_headers(&headers);
    let ctx = crate::state::SESSION_STORE
        .lock()
        .await
        .context(session_id.as_deref());
    Ok(ctx)
}
