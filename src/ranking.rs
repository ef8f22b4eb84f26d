use crate::consts::FALLBACK_RATING;
use crate::session::RatingStore;

/// Sums the current ratings per opportunity, in opportunity-list order.
///
/// Pure: reads the store as it is right now, no caching. Pairs absent
/// from the store count as the initializer's fallback so a partial store
/// still aggregates.
pub fn aggregate_totals(
    store: &RatingStore,
    opportunities: &[String],
    differentiators: &[String],
) -> Vec<(String, i64)> {
    opportunities
        .iter()
        .map(|opportunity| {
            let total = differentiators
                .iter()
                .map(|differentiator| {
                    store
                        .get(&(opportunity.clone(), differentiator.clone()))
                        .copied()
                        .unwrap_or(FALLBACK_RATING)
                })
                .sum();
            (opportunity.clone(), total)
        })
        .collect()
}

/// Sorts totals descending. `sort_by` is stable, so ties keep the
/// aggregator's (input) order.
pub fn rank(mut totals: Vec<(String, i64)>) -> Vec<(String, i64)> {
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}
