use std::sync::Arc;

use campus_content::{ContentSource, LinkRewriter};

use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub rewriter: Arc<LinkRewriter>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig, source: Arc<dyn ContentSource>) -> Self {
        let mut rewriter = LinkRewriter::from_config(&config.content);
        if let Some(class) = &config.link_class {
            rewriter = rewriter.with_anchor_class(class.clone());
        }

        Self {
            source,
            rewriter: Arc::new(rewriter),
            config: Arc::new(config),
        }
    }

    /// CMS origin used to absolutize extracted URLs.
    pub fn origin(&self) -> &str {
        self.rewriter.origin()
    }
}
