//! Fuzzy matching of free-text queries against country records.

use std::fmt;

use derive_getters::Getters;
use derive_new::new;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::{debug, instrument};

/// Shortest query that can produce matches.
pub const MIN_QUERY_LEN: usize = 2;

/// A record offering textual fields to the matcher.
pub trait Searchable {
    /// Field values the query is matched against.
    fn haystack(&self) -> Vec<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn haystack(&self) -> Vec<&str> {
        (**self).haystack()
    }
}

/// A scored match into the searched slice.
///
/// Scores lie in `[0, 1]` with 0 a perfect match, lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
pub struct SearchHit {
    /// Index of the matched record in the searched slice.
    index: usize,
    /// Normalized match quality, 0 = perfect.
    score: f64,
}

/// Ranks records against a query with a Skim matcher.
///
/// Each call is independent; the matcher itself carries no per-call state.
pub struct SearchEngine {
    matcher: SkimMatcherV2,
}

impl SearchEngine {
    /// Creates an engine with the default Skim matcher.
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Scores `items` against `query`, best match first.
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] characters (after trimming)
    /// match nothing, as does an empty item slice. Raw Skim scores are
    /// higher-is-better with no fixed ceiling; they are normalized onto
    /// `[0, 1]` lower-is-better against the query's self-match score, so an
    /// exact case-insensitive match scores 0.
    #[instrument(skip(self, items), fields(count = items.len(), query = %query))]
    pub fn search<T: Searchable>(&self, items: &[T], query: &str) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_LEN || items.is_empty() {
            return Vec::new();
        }

        let baseline = self.matcher.fuzzy_match(&query, &query).unwrap_or(1).max(1);

        let mut hits: Vec<SearchHit> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let raw = item
                    .haystack()
                    .into_iter()
                    .filter_map(|field| self.matcher.fuzzy_match(&field.to_lowercase(), &query))
                    .max()?;
                let score = (1.0 - raw as f64 / baseline as f64).clamp(0.0, 1.0);
                Some(SearchHit::new(index, score))
            })
            .collect();

        hits.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        debug!(hits = hits.len(), "Search ranked");
        hits
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Searchable for Named {
        fn haystack(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn test_short_query_matches_nothing() {
        let engine = SearchEngine::new();
        let items = [Named("Australia")];
        assert!(engine.search(&items, "a").is_empty());
        assert!(engine.search(&items, "").is_empty());
        assert!(engine.search(&items, "  a  ").is_empty());
    }

    #[test]
    fn test_empty_slice_matches_nothing() {
        let engine = SearchEngine::new();
        let items: [Named; 0] = [];
        assert!(engine.search(&items, "australia").is_empty());
    }

    #[test]
    fn test_exact_match_scores_zero() {
        let engine = SearchEngine::new();
        let items = [Named("Austria"), Named("Australia")];
        let hits = engine.search(&items, "Australia");
        assert_eq!(*hits[0].index(), 1);
        assert_eq!(*hits[0].score(), 0.0);
    }

    #[test]
    fn test_better_match_sorts_first() {
        let engine = SearchEngine::new();
        let items = [Named("Mauritania"), Named("Austria"), Named("Australia")];
        let hits = engine.search(&items, "austral");
        assert!(!hits.is_empty());
        assert_eq!(*hits[0].index(), 2);
        for pair in hits.windows(2) {
            assert!(pair[0].score() <= pair[1].score());
        }
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let engine = SearchEngine::new();
        let items = [Named("Chad"), Named("China"), Named("Chile")];
        for hit in engine.search(&items, "ch") {
            assert!((0.0..=1.0).contains(hit.score()));
        }
    }
}
