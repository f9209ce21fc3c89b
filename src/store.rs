use crate::{
    api::{BlockSource, BlocksPage, PageQuery},
    block::Block,
    error::LoadError,
};

use tokio::sync::watch;
use tracing::{debug, warn, instrument};

/// What the UI renders: the current page of blocks and the best height
/// used as the pagination total.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockState {
    pub blocks:       Vec<Block>,
    pub total_blocks: u64,
}

impl BlockState {
    pub(crate) fn replace_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
    }

    pub(crate) fn replace_total(&mut self, best_height: u64) {
        self.total_blocks = best_height;
    }

    /// Number of pages of `rows_per_page` needed to cover `total_blocks`.
    pub fn page_count(&self, rows_per_page: u32) -> u64 {
        if rows_per_page == 0 {
            return 0;
        }
        self.total_blocks.div_ceil(u64::from(rows_per_page))
    }
}

/// Holds one [`BlockState`] and refreshes it from a [`BlockSource`].
///
/// Readers either take a snapshot or [`subscribe`](BlockStore::subscribe) to
/// be woken on every change. Only [`load_blocks`](BlockStore::load_blocks)
/// writes. Overlapping loads are not sequenced: whichever response lands
/// last is what stays.
pub struct BlockStore<S> {
    source: S,
    state:  watch::Sender<BlockState>,
}

impl<S: BlockSource> BlockStore<S> {
    pub fn new(source: S) -> Self {
        BlockStore {
            source,
            state: watch::Sender::new(BlockState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<BlockState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> BlockState {
        self.state.borrow().clone()
    }

    pub fn blocks(&self) -> Vec<Block> {
        self.state.borrow().blocks.clone()
    }

    pub fn total_blocks(&self) -> u64 {
        self.state.borrow().total_blocks
    }

    /// Fetch 1-based `page` and replace the held blocks and total with the
    /// response. On error the state is left as it was.
    #[instrument(skip(self))]
    pub async fn load_blocks(&self, page: i64, rows_per_page: u32) -> Result<(), LoadError> {
        let query = PageQuery {
            page:  page.saturating_sub(1),
            limit: rows_per_page,
        };

        let BlocksPage { blocks, stats } = match self.source.fetch_blocks(query).await {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "loading blocks failed");
                return Err(e);
            }
        };

        debug!(
            count       = blocks.len(),
            best_height = stats.best_height,
            "blocks loaded"
        );

        // one modification so observers never see blocks without their total
        self.state.send_modify(|st| {
            st.replace_blocks(blocks);
            st.replace_total(stats.best_height);
        });

        Ok(())
    }
}
