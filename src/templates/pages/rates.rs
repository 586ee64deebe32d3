use crate::board::{
    format_currency, format_percent, format_timestamp, parse_timestamp, source_label, Category,
    RateBoard, EM_DASH,
};
use crate::provider::Offer;
use crate::templates::{page_layout, status_badge};
use maud::{html, Markup};

const ASSUMPTIONS: &str =
    "Assumptions: $600,000 loan, 80% LTV, 760 FICO, 30-day lock, owner-occupied.";

pub fn rates_page(board: &RateBoard) -> Markup {
    page_layout(
        "Mortgage Rates",
        html! {
            main class="container" {
                div class="page-head" {
                    h1 { "Mortgage Rates" }
                    (status_badge(board.status))
                }

                p class="summary" {
                    @match board.stats.last_run_at {
                        Some(ts) => { "As of " (format_timestamp(ts)) " ET" }
                        None => { "Latest available run" }
                    }
                    " — "
                    (board.stats.distinct_lenders) " lenders, "
                    (board.stats.total_offers) " offers. "
                    (ASSUMPTIONS)
                }

                @for (category, offers) in &board.groups {
                    (category_table(*category, offers))
                }

                div class="disclaimer" {
                    p {
                        "Disclaimer: Rates shown are for informational purposes only and may \
                         vary based on loan details, property type, location, and lender \
                         underwriting. Confirm with the lender before making decisions."
                    }
                    p {
                        "Data is aggregated from publicly available lender sources. We do not \
                         guarantee accuracy and availability."
                    }
                }
            }
        },
    )
}

pub fn category_table(category: Category, offers: &[Offer]) -> Markup {
    html! {
        section class="category" {
            h2 { (category) }
            table {
                thead {
                    tr {
                        th { "Lender" }
                        th { "Source" }
                        th { "Rate" }
                        th { "APR" }
                        th { "Points" }
                        th { "Fees" }
                        th { "Updated" }
                    }
                }
                tbody {
                    @for offer in offers {
                        tr {
                            td { (offer.lender_name) }
                            td { (source_label(offer)) }
                            td { (format_percent(offer.rate)) }
                            td { (format_percent(offer.apr)) }
                            td {
                                @match offer.points {
                                    Some(p) => { (p) }
                                    None => { (EM_DASH) }
                                }
                            }
                            td { (format_currency(offer.lender_fees)) }
                            td {
                                @match parse_timestamp(&offer.updated_at) {
                                    Some(ts) => { (format_timestamp(ts)) }
                                    None => { (EM_DASH) }
                                }
                            }
                        }
                    }
                    @if offers.is_empty() {
                        tr {
                            td colspan="7" class="empty" { "No rates available yet." }
                        }
                    }
                }
            }
        }
    }
}
