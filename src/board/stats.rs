use crate::board::format::parse_timestamp;
use crate::provider::Offer;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Summary line figures, recomputed on every render. Never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub total_offers: usize,
    pub distinct_lenders: usize,
    pub last_run_at: Option<DateTime<Utc>>,
    pub is_fallback: bool,
}

/// Summarize an offer batch. Lender names compare exact and case-sensitive.
///
/// `last_run_at` compares parsed instants, not raw `updated_at` strings,
/// so mixed offset notations still order correctly. Rows whose timestamp
/// fails to parse are skipped. Empty batch → `None`.
pub fn compute_stats(offers: &[Offer]) -> RunStats {
    let lenders: HashSet<&str> = offers.iter().map(|o| o.lender_name.as_str()).collect();

    let last_run_at = offers
        .iter()
        .filter_map(|o| parse_timestamp(&o.updated_at))
        .max();

    RunStats {
        total_offers: offers.len(),
        distinct_lenders: lenders.len(),
        last_run_at,
        is_fallback: offers.iter().any(|o| o.is_fallback),
    }
}
