//! Route table of the site.
//!
//! | Route                 | CMS path              | Page kind  |
//! |-----------------------|-----------------------|------------|
//! | `/`                   | `/`                   | Home       |
//! | `/departments/{slug}` | `/departments/{slug}` | Department |
//! | `/placements`         | `/placements`         | Placements |
//! | `/downloads`          | `/downloads`          | Downloads  |
//! | `/{*path}`            | same path             | Generic    |

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// How a fetched node is turned into a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Rewritten links plus an announcement marquee.
    Home,
    /// Rewritten links split into vision, mission and programs.
    Department,
    /// Placement table rows.
    Placements,
    /// Link list with absolute hrefs.
    Downloads,
    /// Rewritten links split by table.
    Generic,
}

/// Build the site router.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::home))
        .route("/departments/{slug}", get(handlers::department))
        .route("/placements", get(handlers::placements_page))
        .route("/downloads", get(handlers::downloads))
        .route("/{*path}", get(handlers::generic))
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
