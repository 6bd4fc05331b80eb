//! Shared country fixtures for integration tests.

#![allow(dead_code)]

use flagquest::Country;

/// Builds one fixture country with a fixed population and flag URL.
pub fn country(name: &str, alpha2: &str, alpha3: &str, region: &str, capital: &str) -> Country {
    Country::new(
        name.to_string(),
        alpha2.to_string(),
        alpha3.to_string(),
        region.to_string(),
        capital.to_string(),
        1_000_000,
        format!("https://flagcdn.com/{}.svg", alpha2.to_lowercase()),
    )
}

/// A deterministic 250-country list: 60 in Africa, 53 in Europe, 57 in the
/// Americas, 50 in Asia, 27 in Oceania, and 3 in Polar.
///
/// A few real countries anchor each region; the rest are synthetic padding
/// with unique codes.
pub fn fixture_countries() -> Vec<Country> {
    let mut countries = vec![
        country("Chad", "TD", "TCD", "Africa", "N'Djamena"),
        country("Egypt", "EG", "EGY", "Africa", "Cairo"),
        country("France", "FR", "FRA", "Europe", "Paris"),
        country("Germany", "DE", "DEU", "Europe", "Berlin"),
        country("Brazil", "BR", "BRA", "Americas", "Brasilia"),
        country("Japan", "JP", "JPN", "Asia", "Tokyo"),
        country("Australia", "AU", "AUS", "Oceania", "Canberra"),
        country("Antarctica", "AQ", "ATA", "Polar", ""),
    ];
    fill(&mut countries, "Africa", "AF", 60);
    fill(&mut countries, "Europe", "EU", 53);
    fill(&mut countries, "Americas", "AM", 57);
    fill(&mut countries, "Asia", "AS", 50);
    fill(&mut countries, "Oceania", "OC", 27);
    fill(&mut countries, "Polar", "PO", 3);
    countries
}

/// Pads `countries` with synthetic entries until `region` holds `target`.
fn fill(countries: &mut Vec<Country>, region: &str, prefix: &str, target: usize) {
    let existing = countries.iter().filter(|c| c.region() == region).count();
    for i in existing..target {
        let name = format!("{} Nation {:02}", region, i);
        let code = format!("{}{:02}", prefix, i);
        countries.push(country(&name, &code, &code, region, "Capital City"));
    }
}
