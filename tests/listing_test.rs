//! Tests for region filtering, view modes, and pagination.

mod common;

use common::{country, fixture_countries};
use flagquest::{Region, ViewKind, filter_by_region, page_count, paginate};

#[test]
fn test_fixture_has_expected_shape() {
    let countries = fixture_countries();
    assert_eq!(countries.len(), 250);
}

#[test]
fn test_africa_filter_counts() {
    let countries = fixture_countries();
    assert_eq!(filter_by_region(&countries, Region::Africa).len(), 60);
}

#[test]
fn test_europe_filter_counts() {
    let countries = fixture_countries();
    assert_eq!(filter_by_region(&countries, Region::Europe).len(), 53);
}

#[test]
fn test_all_passes_everything_through_in_order() {
    let countries = fixture_countries();
    let filtered = filter_by_region(&countries, Region::All);
    assert_eq!(filtered.len(), 250);
    for (kept, original) in filtered.iter().zip(countries.iter()) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn test_filter_matches_region_case_insensitively() {
    let countries = vec![
        country("Upperland", "UP", "UPL", "EUROPE", "Upper City"),
        country("Lowerland", "LO", "LOW", "europe", "Lower City"),
        country("Farland", "FA", "FAR", "Asia", "Far City"),
    ];
    let filtered = filter_by_region(&countries, Region::Europe);
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_filter_on_empty_list() {
    let countries: Vec<flagquest::Country> = Vec::new();
    assert!(filter_by_region(&countries, Region::Africa).is_empty());
    assert!(filter_by_region(&countries, Region::All).is_empty());
}

#[test]
fn test_region_parse_accepts_any_case() {
    assert_eq!(Region::parse("africa").unwrap(), Region::Africa);
    assert_eq!(Region::parse("  EUROPE  ").unwrap(), Region::Europe);
    assert_eq!(Region::parse("aLl").unwrap(), Region::All);
}

#[test]
fn test_region_parse_rejects_unknown_value() {
    let err = Region::parse("Atlantis").unwrap_err();
    assert_eq!(
        err.message,
        "Value must be one of 'All', 'Africa', 'Americas', 'Asia', 'Europe', or 'Oceania'."
    );
}

#[test]
fn test_view_parse_accepts_any_case() {
    assert_eq!(ViewKind::parse("cards").unwrap(), ViewKind::Cards);
    assert_eq!(ViewKind::parse("TABLE").unwrap(), ViewKind::Table);
    assert_eq!(ViewKind::parse(" default ").unwrap(), ViewKind::Default);
}

#[test]
fn test_view_parse_rejects_unknown_value() {
    let err = ViewKind::parse("grid").unwrap_err();
    assert_eq!(
        err.message,
        "Value must be one of 'cards', 'table', or 'default'."
    );
}

#[test]
fn test_fixture_paginates_into_thirteen_pages() {
    let countries = fixture_countries();
    let filtered = filter_by_region(&countries, Region::All);
    assert_eq!(page_count(filtered.len(), 20), 13);

    let last = paginate(filtered.len(), 20, 12);
    assert_eq!(last.slice(&filtered).len(), 10);

    let clamped = paginate(filtered.len(), 20, 500);
    assert_eq!(*clamped.index(), 12);
}

#[test]
fn test_filtered_pages_cover_every_country() {
    let countries = fixture_countries();
    let filtered = filter_by_region(&countries, Region::Africa);
    let mut seen = 0;
    for i in 0..page_count(filtered.len(), 20) {
        seen += paginate(filtered.len(), 20, i).slice(&filtered).len();
    }
    assert_eq!(seen, 60);
}
