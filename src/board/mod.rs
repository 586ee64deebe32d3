mod category;
mod format;
mod ranking;
mod stats;
mod status;

pub use category::Category;
pub use format::{format_currency, format_percent, format_timestamp, parse_timestamp, source_label, EM_DASH};
pub use ranking::group_and_rank;
pub use stats::{compute_stats, RunStats};
pub use status::{classify_status, BoardStatus};

use crate::provider::Offer;

/// Everything the rates page needs, computed fresh from one fetch result.
pub struct RateBoard {
    pub status: BoardStatus,
    pub stats: RunStats,
    pub groups: Vec<(Category, Vec<Offer>)>,
}

/// Run the full pipeline over one offer batch: classify, summarize, group.
pub fn build(offers: Vec<Offer>) -> RateBoard {
    let status = classify_status(&offers);
    let stats = compute_stats(&offers);
    let groups = group_and_rank(&offers, &Category::ALL);

    RateBoard {
        status,
        stats,
        groups,
    }
}
