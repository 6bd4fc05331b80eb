//! Score-cutoff policy for deciding which matches count as "good".

use tracing::{debug, instrument};

use super::SearchHit;

/// Default cutoff percentage at or under which a match counts as good.
pub const SCORE_CUTOFF: f64 = 4.0;

/// Counts hits whose score, scaled to a percentage, falls in
/// `[0, cutoff]` inclusive.
///
/// An empty query forces the count to 0 regardless of hits. When hits exist
/// but none pass the cutoff, the count falls back to the total hit count.
#[instrument(skip(hits), fields(hits = hits.len(), query = %query))]
pub fn good_match_count(hits: &[SearchHit], query: &str, cutoff: f64) -> usize {
    if query.trim().is_empty() {
        return 0;
    }
    let good = hits
        .iter()
        .filter(|hit| (0.0..=cutoff).contains(&(hit.score() * 100.0)))
        .count();
    let count = if good == 0 && !hits.is_empty() {
        hits.len()
    } else {
        good
    };
    debug!(good, count, "Cutoff applied");
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(scores: &[f64]) -> Vec<SearchHit> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| SearchHit::new(i, *s))
            .collect()
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let hits = hits(&[0.0, 0.04, 0.041]);
        assert_eq!(good_match_count(&hits, "chad", SCORE_CUTOFF), 2);
    }

    #[test]
    fn test_empty_query_forces_zero() {
        let hits = hits(&[0.0, 0.01]);
        assert_eq!(good_match_count(&hits, "", SCORE_CUTOFF), 0);
        assert_eq!(good_match_count(&hits, "   ", SCORE_CUTOFF), 0);
    }

    #[test]
    fn test_no_good_hits_falls_back_to_total() {
        let hits = hits(&[0.5, 0.9]);
        assert_eq!(good_match_count(&hits, "xy", SCORE_CUTOFF), 2);
    }

    #[test]
    fn test_no_hits_counts_zero() {
        assert_eq!(good_match_count(&[], "xy", SCORE_CUTOFF), 0);
    }
}
