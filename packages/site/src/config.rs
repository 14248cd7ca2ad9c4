use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use campus_content::{ContentConfig, ContentError, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Page server settings, wrapping the CMS connection settings.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub content: ContentConfig,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Class set on anchors whose links were rewritten.
    pub link_class: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(ContentConfig::from_env()?);

        if let Ok(addr) = env::var("SITE_BIND_ADDR") {
            let addr = addr
                .parse()
                .map_err(|_| ContentError::Config(format!("invalid SITE_BIND_ADDR: {addr}")))?;
            config = config.with_bind_addr(addr);
        }

        if let Ok(dir) = env::var("STATIC_DIR") {
            config = config.with_static_dir(dir);
        }

        if let Some(class) = env::var("SITE_LINK_CLASS").ok().filter(|c| !c.trim().is_empty()) {
            config = config.with_link_class(class);
        }

        Ok(config)
    }

    pub fn new(content: ContentConfig) -> Self {
        Self {
            content,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            link_class: None,
        }
    }

    #[must_use]
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_link_class(mut self, class: impl Into<String>) -> Self {
        self.link_class = Some(class.into());
        self
    }
}
