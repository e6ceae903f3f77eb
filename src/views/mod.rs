//! Web interface components for the portal
//!
//! The navigation bar is the layout shared by every page; the page bodies
//! themselves are kept minimal.

/// Navigation bar layout
mod navbar;
pub use navbar::{Navbar, use_session};

/// Landing page
mod home;
pub use home::Home;

/// Information page
mod blog;
pub use blog::Blog;

/// Sign-in and registration entry points
mod auth;
pub use auth::{Login, Register};

/// Signed-in user's profile
mod profile;
pub use profile::Profile;

/// Admin dashboard
mod admin;
pub use admin::AdminHome;
