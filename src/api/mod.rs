pub mod get_blocks;

pub use get_blocks::models::{BlocksPage, PageQuery, Stats};

use crate::{
    config::ExplorerConfig,
    error::LoadError,
};
use self::get_blocks::src::{get_blocks as get_blocks_page, BLOCKS_PATH};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

/// Where a [`crate::BlockStore`] gets its pages from.
#[async_trait]
pub trait BlockSource: Send + Sync {
    async fn fetch_blocks(&self, query: PageQuery) -> Result<BlocksPage, LoadError>;
}

#[derive(Clone, Debug)]
pub struct HttpBlockSource {
    client:   Client,
    endpoint: Url,
}

impl HttpBlockSource {
    pub fn new(cfg: &ExplorerConfig) -> Result<Self> {
        let base = Url::parse(&cfg.api_base_url)
            .with_context(|| format!("invalid api_base_url `{}`", cfg.api_base_url))?;

        let mut builder = Client::builder();
        if let Some(ms) = cfg.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().context("building HTTP client")?;

        Self::with_client(client, &base)
    }

    pub fn with_client(client: Client, base: &Url) -> Result<Self> {
        let endpoint = base
            .join(BLOCKS_PATH)
            .with_context(|| format!("joining `{}` onto `{}`", BLOCKS_PATH, base))?;
        Ok(HttpBlockSource { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl BlockSource for HttpBlockSource {
    async fn fetch_blocks(&self, query: PageQuery) -> Result<BlocksPage, LoadError> {
        get_blocks_page(&self.client, &self.endpoint, &query).await
    }
}
