use serde::Deserialize;

// offer
//  ├── lender_name / category          (who and what bucket)
//  ├── rate / apr / points / fees      (the quote, any of which may be null)
//  ├── state / loan_amount / ltv
//  │   fico / lock_days                (quote assumptions)
//  ├── updated_at                      (always present, ISO-ish string)
//  ├── source_id / source_name
//  ├── is_fallback                     (placeholder row substituted for live data)
//  └── details.source_label            (optional structured blob)

/// One row from the `get_latest_rates_with_fallback` RPC.
///
/// Every numeric field may be null on the wire; formatting must degrade to a
/// placeholder glyph rather than fail.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Offer {
    pub lender_name: String,
    pub category: String,

    pub rate: Option<f64>,
    pub apr: Option<f64>,
    pub points: Option<f64>,
    pub lender_fees: Option<f64>,

    pub state: Option<String>,
    pub loan_amount: Option<f64>,
    pub ltv: Option<f64>,
    pub fico: Option<i64>,
    pub lock_days: Option<i64>,

    pub updated_at: String,

    pub source_id: Option<i64>,
    pub source_name: Option<String>,

    #[serde(default)]
    pub is_fallback: bool,

    #[serde(default)]
    pub details: Option<OfferDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OfferDetails {
    pub source_label: Option<String>,
}
