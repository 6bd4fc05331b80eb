//! Debounced fuzzy search over the country list.

mod debounce;
mod engine;
mod filter;

pub use debounce::{DEBOUNCE_MS, Debouncer};
pub use engine::{MIN_QUERY_LEN, SearchEngine, SearchHit, Searchable};
pub use filter::{SCORE_CUTOFF, good_match_count};
