//! Campus Site - page server rendering CMS content.
//!
//! Every page is backed by one CMS node. Handlers fetch the node through a
//! [`ContentSource`](campus_content::ContentSource), run the extraction the
//! page needs over its rich text, and render HTML.

pub mod config;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;

pub use config::SiteConfig;
pub use routes::{app, PageKind};
pub use state::AppState;
