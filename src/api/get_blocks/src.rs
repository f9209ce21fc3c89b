use crate::error::LoadError;
use super::models::{PageQuery, BlocksPage};
use reqwest::{Client, Url};
use tracing::trace;

pub const BLOCKS_PATH: &str = "/api/blocks";

pub async fn get_blocks(
    client: &Client,
    endpoint: &Url,
    query: &PageQuery,
) -> Result<BlocksPage, LoadError> {
    let resp = client
        .get(endpoint.clone())
        .query(query)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }

    // read the whole body first so a bad payload surfaces as Malformed,
    // not as a transport error
    let body = resp.bytes().await?;
    trace!(bytes = body.len(), "GET {} answered", BLOCKS_PATH);

    let page: BlocksPage = serde_json::from_slice(&body)?;
    Ok(page)
}
