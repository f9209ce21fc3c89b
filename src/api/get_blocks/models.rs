use crate::block::Block;
use serde::{Serialize, Deserialize};

// query string sent to GET /api/blocks; page is already zero-based here
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page:  i64,
    pub limit: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlocksPage {
    pub blocks: Vec<Block>,
    pub stats:  Stats,
}

// only bestHeight is kept, every other stats field is dropped on decode
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Stats {
    #[serde(rename = "bestHeight")]
    pub best_height: u64,
}
