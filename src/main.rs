mod menu;
mod server;
mod session;
mod state;
mod views;

use dioxus::prelude::*;
use views::{AdminHome, Blog, Home, Login, Navbar, Profile, Register};

/// Form endpoint closing the current session; not a page, so not part of [`Route`]
pub const LOGOUT_PATH: &str = "/logout";

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/blog")]
        Blog {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/user/profile")]
        Profile {},
        #[route("/admin")]
        AdminHome {},
}

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on; defaults to the one chosen by the dioxus CLI
    #[arg(long)]
    addr: Option<std::net::SocketAddr>,
    /// Seed a session for this user and log its cookie
    #[arg(long)]
    dev_user: Option<String>,
    /// Avatar URL of the seeded user
    #[arg(long, requires = "dev_user")]
    dev_avatar: Option<String>,
    /// Grant the admin dashboard capability to the seeded user
    #[arg(long, default_value_t = false, requires = "dev_user")]
    dev_admin: bool,
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();

    if let Some(name) = &args.dev_user {
        seed_dev_session(name, args.dev_avatar.as_deref(), args.dev_admin).await;
    }

    let addr = args
        .addr
        .unwrap_or_else(dioxus_cli_config::fullstack_address_or_localhost);
    let router = server::router(App)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log::info!("Portal listening on http://{}", addr);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
async fn seed_dev_session(name: &str, avatar: Option<&str>, admin: bool) -> String {
    use std::collections::BTreeSet;

    let avatar = avatar
        .map(str::to_string)
        .unwrap_or_else(|| session::initials_avatar_url(name));
    let mut capabilities = BTreeSet::new();
    if admin {
        capabilities.insert(session::ADMIN_HOME.to_string());
    }
    let session_id = state::SESSION_STORE
        .lock()
        .await
        .open(name, &avatar, capabilities);
    log::info!(
        "Development session for '{}': set cookie {}",
        name,
        session::session_cookie(&session_id)
    );
    session_id
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
