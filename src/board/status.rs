use crate::provider::Offer;
use std::collections::HashSet;

/// Data-availability status shown in the page badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    Live,
    Partial,
    Sample,
    None,
}

impl BoardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BoardStatus::Live => "Live Rates",
            BoardStatus::Partial => "Partial Data",
            BoardStatus::Sample => "Sample Data",
            BoardStatus::None => "No Data",
        }
    }
}

/// Distinct lender names needed before a batch counts as fully live.
pub const LIVE_LENDER_THRESHOLD: usize = 10;

/// Classify an offer batch, in precedence order:
/// empty → None, any fallback row → Sample, then by distinct lender count.
///
/// Fallback detection is "any row flagged", not first-row-only: the backend
/// sets the flag batch-wide, and a mixed batch still contains placeholder
/// rows the reader must be warned about.
pub fn classify_status(offers: &[Offer]) -> BoardStatus {
    if offers.is_empty() {
        return BoardStatus::None;
    }

    if offers.iter().any(|o| o.is_fallback) {
        return BoardStatus::Sample;
    }

    let lenders: HashSet<&str> = offers.iter().map(|o| o.lender_name.as_str()).collect();
    match lenders.len() {
        n if n >= LIVE_LENDER_THRESHOLD => BoardStatus::Live,
        n if n >= 1 => BoardStatus::Partial,
        _ => BoardStatus::None,
    }
}
