//! Region and view selection plus pagination for country listings.

use derive_getters::Getters;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::country::Country;
use crate::error::ValidationError;

/// Continental grouping used to filter the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Region {
    /// No filtering, every country passes.
    All,
    /// African countries.
    Africa,
    /// North, Central, and South America.
    Americas,
    /// Asian countries.
    Asia,
    /// European countries.
    Europe,
    /// Oceania and the Pacific.
    Oceania,
}

impl Region {
    /// Display label for this region.
    #[instrument]
    pub fn label(&self) -> &'static str {
        match self {
            Region::All => "All",
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }

    /// Parses a region label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the accepted values when the label
    /// is not a recognized region.
    #[instrument(skip(s), fields(s = %s))]
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::iter()
            .find(|region| region.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::new(
                    "Value must be one of 'All', 'Africa', 'Americas', 'Asia', 'Europe', or 'Oceania'.",
                )
            })
    }

    /// The region after this one, wrapping around.
    #[instrument]
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|r| *r == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Filters countries by region.
///
/// `All` passes the input through unchanged, otherwise keeps the
/// subsequence whose `region` field equals the label case-insensitively.
#[instrument(skip(countries), fields(count = countries.len(), region = region.label()))]
pub fn filter_by_region(countries: &[Country], region: Region) -> Vec<&Country> {
    let filtered: Vec<&Country> = match region {
        Region::All => countries.iter().collect(),
        _ => countries
            .iter()
            .filter(|c| c.region().eq_ignore_ascii_case(region.label()))
            .collect(),
    };
    debug!(matched = filtered.len(), "Region filter applied");
    filtered
}

/// Presentation style for country listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum ViewKind {
    /// One bordered card per country.
    Cards,
    /// Aligned columns.
    Table,
    /// Plain one-line entries.
    Default,
}

impl ViewKind {
    /// Display label for this view kind.
    #[instrument]
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::Cards => "cards",
            ViewKind::Table => "table",
            ViewKind::Default => "default",
        }
    }

    /// Parses a view label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the accepted values when the label
    /// is not a recognized view kind.
    #[instrument(skip(s), fields(s = %s))]
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::iter()
            .find(|view| view.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::new("Value must be one of 'cards', 'table', or 'default'.")
            })
    }

    /// The view kind after this one, wrapping around.
    #[instrument]
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|v| *v == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// One page of a listing, produced by [`paginate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Page {
    /// Zero-based page index, clamped into range.
    index: usize,
    /// Total number of pages.
    count: usize,
    /// First item index on this page.
    start: usize,
    /// One past the last item index on this page.
    end: usize,
}

impl Page {
    /// The items visible on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start..self.end.min(items.len())]
    }
}

/// Number of pages needed for `total` items at `page_size` per page.
#[instrument]
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size)
}

/// Computes the page at `page_index`.
///
/// Out-of-range indices clamp to the last page; a zero page size is treated
/// as one item per page. An empty input yields an empty page with a count
/// of zero.
#[instrument]
pub fn paginate(total: usize, page_size: usize, page_index: usize) -> Page {
    let page_size = page_size.max(1);
    let count = page_count(total, page_size);
    let index = if count == 0 {
        0
    } else {
        page_index.min(count - 1)
    };
    let start = index * page_size;
    let end = (start + page_size).min(total);
    Page {
        index,
        count,
        start,
        end,
    }
}
