use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use campus_content::dom::parse_fragment;
use campus_content::extract::{
    department_sections, extract_table_sections, link_list, marquee_items, placements,
    HeadingClassifier, PlacementSchema,
};
use campus_content::{resolve, ContentNode};

use crate::render;
use crate::routes::PageKind;
use crate::state::AppState;

pub async fn health() -> &'static str {
    "OK"
}

pub async fn home(State(state): State<AppState>) -> Response {
    page(&state, PageKind::Home, "/").await
}

pub async fn department(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    page(&state, PageKind::Department, &format!("/departments/{slug}")).await
}

pub async fn placements_page(State(state): State<AppState>) -> Response {
    page(&state, PageKind::Placements, "/placements").await
}

pub async fn downloads(State(state): State<AppState>) -> Response {
    page(&state, PageKind::Downloads, "/downloads").await
}

pub async fn generic(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    page(&state, PageKind::Generic, &format!("/{path}")).await
}

/// Fetch the node behind `cms_path` and render it as `kind`.
async fn page(state: &AppState, kind: PageKind, cms_path: &str) -> Response {
    let outcome = match state.source.fetch_by_path(cms_path).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(path = cms_path, error = %e, "content fetch failed");
            let status = StatusCode::BAD_GATEWAY;
            return (status, Html(render::error_page(status.as_u16()))).into_response();
        }
    };

    let Some(node) = outcome.data.as_ref() else {
        if outcome.is_not_found() {
            return (StatusCode::NOT_FOUND, Html(render::not_found_page(cms_path))).into_response();
        }
        let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::BAD_GATEWAY);
        return (status, Html(render::error_page(status.as_u16()))).into_response();
    };

    let cache_control = format!(
        "public, s-maxage={}, stale-while-revalidate",
        outcome.revalidate.as_secs()
    );
    let html = render::layout(&node.title, &node.details, &page_body(state, kind, node));

    ([(header::CACHE_CONTROL, cache_control)], Html(html)).into_response()
}

/// Run the passes the page kind needs over the editor field.
///
/// Pages that show editor HTML rewrite the raw string first, so markup the
/// rewriter does not touch reaches the browser as authored.
fn page_body(state: &AppState, kind: PageKind, node: &ContentNode) -> String {
    let origin = state.origin();

    match kind {
        PageKind::Home => {
            let html = state.rewriter.rewrite(&node.editor);
            let marquee = marquee_items(&parse_fragment(&html));
            render::home_body(&marquee, &resolved_images(node, origin), &html)
        }
        PageKind::Department => {
            let html = state.rewriter.rewrite(&node.editor);
            let section = department_sections(&parse_fragment(&html), &HeadingClassifier::default());
            render::department_body(&section, &html)
        }
        PageKind::Placements => {
            let records = placements(&parse_fragment(&node.editor), &PlacementSchema::default(), origin);
            render::placements_body(&records)
        }
        PageKind::Downloads => {
            let mut links = link_list(&parse_fragment(&node.editor));
            for link in &mut links {
                link.href = resolve(&link.href, origin);
            }
            render::downloads_body(&links)
        }
        PageKind::Generic => {
            let html = state.rewriter.rewrite(&node.editor);
            render::sections_body(&extract_table_sections(&html), &resolved_images(node, origin))
        }
    }
}

fn resolved_images(node: &ContentNode, origin: &str) -> Vec<String> {
    node.images
        .iter()
        .filter(|src| !src.trim().is_empty())
        .map(|src| resolve(src, origin))
        .collect()
}
