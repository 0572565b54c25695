pub mod block_aggregator;

pub use block_aggregator::{aggregate, group_by_block, BlockResult, BlockResults};
