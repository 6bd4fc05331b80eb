//! Flagquest library - browse countries and guess their flags
//!
//! This library backs a terminal country explorer fed by a public REST API.
//!
//! # Architecture
//!
//! - **Client**: fetches country records over HTTP
//! - **Search**: debounced fuzzy search with a good-match cutoff
//! - **Listing**: region filter, view modes, and pagination
//! - **Game**: guess-the-flag rounds with persisted state
//! - **Explorer**: the multi-screen TUI tying it all together
//!
//! # Example
//!
//! ```no_run
//! use flagquest::{CountryProvider, ExplorerConfig, RestCountriesClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ExplorerConfig::default();
//! let client = RestCountriesClient::new(
//!     config.api_base_url().clone(),
//!     config.request_timeout(),
//! )?;
//! let countries = client.fetch_all().await?;
//! println!("{} countries", countries.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod client;
mod config;
mod country;
mod error;
mod explorer;
mod game;
mod listing;
mod search;
mod store;

// Crate-level exports - Country data
pub use country::Country;

// Crate-level exports - Data source
pub use client::{CountryProvider, RestCountriesClient, StaticProvider};

// Crate-level exports - Configuration
pub use config::{ConfigError, ExplorerConfig};

// Crate-level exports - Errors
pub use error::{FetchError, LookupError, NotFoundError, StoreError, ValidationError};

// Crate-level exports - Explorer TUI
pub use explorer::{
    ExplorerController, ExplorerState, Screen, ScreenTransition, TOAST_TTL, Toast, run_tui,
};

// Crate-level exports - Guess-the-flag game
pub use game::{GuessGame, GuessOutcome, MAX_TRIES, RESET_DELAY_MS, RoundPhase, RoundSnapshot};

// Crate-level exports - Listing helpers
pub use listing::{Page, Region, ViewKind, filter_by_region, page_count, paginate};

// Crate-level exports - Search
pub use search::{
    DEBOUNCE_MS, Debouncer, MIN_QUERY_LEN, SCORE_CUTOFF, SearchEngine, SearchHit, Searchable,
    good_match_count,
};

// Crate-level exports - Persisted UI state
pub use store::{SnapshotStore, StoredState};
