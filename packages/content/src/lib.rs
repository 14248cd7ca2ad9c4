//! Campus Content - fetch CMS nodes and normalize their rich-text HTML.
//!
//! This crate turns what editors author in the CMS into data the site can
//! render: it resolves CMS-relative paths, rewrites file links to absolute
//! URLs, and extracts structured records (link lists, placements, department
//! sections) from rich-text fragments.
//!
//! # Example
//!
//! ```
//! use campus_content::{extract_link_list, resolve, rewrite_links};
//!
//! let origin = "https://cms.example.edu";
//! assert_eq!(resolve("/files/a.pdf", origin), "https://cms.example.edu/files/a.pdf");
//!
//! let html = rewrite_links(r#"<img src="/files/a.png">"#, "/files", origin);
//! assert_eq!(html, r#"<img src="https://cms.example.edu/files/a.png">"#);
//!
//! let links = extract_link_list(r#"<ul><li><a href="/x">X</a></li></ul>"#);
//! assert_eq!(links[0].title, "X");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: CMS connection settings
//! - [`types`]: Core data types (ContentNode, PlacementRecord, etc.)
//! - [`error`]: Error types and Result alias
//! - [`resolve`]: CMS-relative path resolution
//! - [`dom`]: `ego_tree` HTML tree, parsed by html5ever and serialized through it
//! - [`rewrite`]: Streaming link and image rewriting (`lol_html`)
//! - [`extract`]: Structured extraction from rich text
//! - [`http`]: HTTP client construction
//! - [`fetch`]: Node lookup by site path
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod resolve;
pub mod rewrite;
pub mod types;

// Re-export commonly used items
pub use config::ContentConfig;
pub use error::{ContentError, Result};
pub use extract::{
    extract_department_sections, extract_link_list, extract_marquee, extract_placements,
    extract_table_sections,
};
pub use fetch::{ContentSource, FetchOutcome, HttpContentSource};
pub use resolve::resolve;
pub use rewrite::{rewrite_links, LinkRewriter};
pub use types::{
    ContentNode, DepartmentSection, GenericSection, LinkRecord, MarqueeItem, PlacementRecord,
};
