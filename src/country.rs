//! Country record and display helpers.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::search::Searchable;

/// A country as served by the REST countries API.
///
/// Immutable once fetched. v2-style payload field names are mapped through
/// serde renames; `capital` is absent for a handful of territories and
/// defaults to empty.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Common name, e.g. "Australia".
    name: String,
    /// ISO 3166-1 alpha-2 code, e.g. "AU".
    alpha2_code: String,
    /// ISO 3166-1 alpha-3 code, e.g. "AUS".
    alpha3_code: String,
    /// Continental region, e.g. "Oceania".
    region: String,
    /// Capital city, empty when the payload omits it.
    #[serde(default)]
    capital: String,
    /// Population count.
    population: u64,
    /// URL of the flag image.
    #[serde(rename = "flag")]
    flag_url: String,
}

impl Country {
    /// Renders the flag as a regional-indicator emoji pair.
    ///
    /// Falls back to the uppercased raw code when it is not two ASCII
    /// letters.
    #[instrument(skip(self), fields(code = %self.alpha2_code))]
    pub fn flag_emoji(&self) -> String {
        let code = self.alpha2_code.trim().to_ascii_uppercase();
        let bytes = code.as_bytes();
        if bytes.len() == 2 && bytes.iter().all(|b| b.is_ascii_uppercase()) {
            bytes
                .iter()
                .filter_map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
                .collect()
        } else {
            code
        }
    }

    /// Population with thousands separators for display.
    #[instrument(skip(self))]
    pub fn population_display(&self) -> String {
        let digits = self.population.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Lines for the detail card, shared by the CLI and the detail screen.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn card_lines(&self) -> Vec<String> {
        let capital = if self.capital.is_empty() {
            "(none)"
        } else {
            self.capital.as_str()
        };
        vec![
            format!("{}  {}", self.flag_emoji(), self.name),
            format!("Codes:      {} / {}", self.alpha2_code, self.alpha3_code),
            format!("Region:     {}", self.region),
            format!("Capital:    {}", capital),
            format!("Population: {}", self.population_display()),
            format!("Flag image: {}", self.flag_url),
        ]
    }

    /// One-line summary used for clipboard copies.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {}, capital {}, population {}",
            self.name,
            self.alpha3_code,
            self.region,
            if self.capital.is_empty() {
                "(none)"
            } else {
                self.capital.as_str()
            },
            self.population_display(),
        )
    }
}

impl Searchable for Country {
    fn haystack(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.alpha2_code,
            &self.alpha3_code,
            &self.region,
            &self.capital,
        ]
    }
}
