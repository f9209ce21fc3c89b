pub mod block;          // opaque Block payload as served by /api/blocks
pub mod config;         // loads explorer.toml
pub mod error;          // LoadError, the failure side of a page load
pub mod api;            // outbound wire contract (BlockSource trait + reqwest impl)
pub mod store;          // BlockStore: current page of blocks + best height

pub use api::{BlockSource, HttpBlockSource};
pub use block::Block;
pub use error::LoadError;
pub use store::{BlockState, BlockStore};
