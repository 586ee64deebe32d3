use crate::board::Category;
use crate::provider::Offer;

/// Offers shown per category table.
pub const MAX_PER_CATEGORY: usize = 10;

/// Offers missing APR or rate sort after everything real.
const MISSING_SENTINEL: f64 = 999.0;

/// Bucket offers into the given categories, best quotes first.
///
/// Per category: exact string match on `category`, ascending sort by
/// (APR, rate) with missing values treated as the sentinel, then truncate
/// to the top `MAX_PER_CATEGORY`. Every requested category appears in the
/// output. An empty vec means the page renders a "no data" row instead of
/// dropping the table.
pub fn group_and_rank(offers: &[Offer], categories: &[Category]) -> Vec<(Category, Vec<Offer>)> {
    categories
        .iter()
        .map(|&cat| {
            let mut matched: Vec<Offer> = offers
                .iter()
                .filter(|o| o.category == cat.as_str())
                .cloned()
                .collect();

            matched.sort_by(|a, b| {
                let apr = sort_value(a.apr).total_cmp(&sort_value(b.apr));
                apr.then(sort_value(a.rate).total_cmp(&sort_value(b.rate)))
            });
            matched.truncate(MAX_PER_CATEGORY);

            (cat, matched)
        })
        .collect()
}

fn sort_value(v: Option<f64>) -> f64 {
    v.unwrap_or(MISSING_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(lender: &str, category: &str, rate: Option<f64>, apr: Option<f64>) -> Offer {
        Offer {
            lender_name: lender.to_string(),
            category: category.to_string(),
            rate,
            apr,
            updated_at: "2024-06-01T15:30:00+00:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn sorts_by_apr_then_rate() {
        let offers = vec![
            offer("C", "30Y fixed", Some(6.500), Some(6.700)),
            offer("A", "30Y fixed", Some(6.125), Some(6.300)),
            offer("B", "30Y fixed", Some(6.250), Some(6.300)),
        ];

        let groups = group_and_rank(&offers, &[Category::ThirtyYearFixed]);
        let ranked = &groups[0].1;
        let order: Vec<&str> = ranked.iter().map(|o| o.lender_name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_apr_and_rate_sort_last() {
        let offers = vec![
            offer("No APR", "30Y fixed", Some(5.000), None),
            offer("Complete", "30Y fixed", Some(6.500), Some(6.700)),
            offer("Nothing", "30Y fixed", None, None),
        ];

        let groups = group_and_rank(&offers, &[Category::ThirtyYearFixed]);
        let order: Vec<&str> = groups[0].1.iter().map(|o| o.lender_name.as_str()).collect();
        // "No APR" still has a rate, so it beats the fully-blank row.
        assert_eq!(order, vec!["Complete", "No APR", "Nothing"]);
    }

    #[test]
    fn truncates_to_top_ten() {
        let offers: Vec<Offer> = (0..25)
            .map(|i| {
                offer(
                    &format!("Lender {i}"),
                    "30Y fixed",
                    Some(6.0 + i as f64 * 0.01),
                    Some(6.2 + i as f64 * 0.01),
                )
            })
            .collect();

        let groups = group_and_rank(&offers, &[Category::ThirtyYearFixed]);
        assert_eq!(groups[0].1.len(), MAX_PER_CATEGORY);
        // Lowest APRs survive the cut.
        assert_eq!(groups[0].1[0].lender_name, "Lender 0");
        assert_eq!(groups[0].1[9].lender_name, "Lender 9");
    }

    #[test]
    fn every_category_appears_even_when_empty() {
        let offers = vec![offer("DCU", "30Y fixed", Some(6.125), Some(6.300))];

        let groups = group_and_rank(&offers, &Category::ALL);
        assert_eq!(groups.len(), Category::ALL.len());

        let (cat_30y, rows_30y) = &groups[0];
        assert_eq!(*cat_30y, Category::ThirtyYearFixed);
        assert_eq!(rows_30y.len(), 1);

        for (cat, rows) in &groups[1..] {
            assert!(rows.is_empty(), "expected no offers for {cat}");
        }
    }

    #[test]
    fn category_match_is_exact() {
        let offers = vec![offer("DCU", "30y FIXED", Some(6.125), Some(6.300))];
        let groups = group_and_rank(&offers, &[Category::ThirtyYearFixed]);
        assert!(groups[0].1.is_empty());
    }

    #[test]
    fn output_is_non_decreasing_by_apr_then_rate() {
        let offers = vec![
            offer("A", "15Y fixed", Some(5.500), None),
            offer("B", "15Y fixed", None, Some(5.600)),
            offer("C", "15Y fixed", Some(5.400), Some(5.600)),
            offer("D", "15Y fixed", None, None),
        ];

        let groups = group_and_rank(&offers, &[Category::FifteenYearFixed]);
        let keys: Vec<(f64, f64)> = groups[0]
            .1
            .iter()
            .map(|o| (sort_value(o.apr), sort_value(o.rate)))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}
