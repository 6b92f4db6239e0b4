//! Location-area listing DTOs
//!
//! Shape of `GET /location-area?offset=..&limit=..`.

use serde::Deserialize;

/// A name plus the URL of the full resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing.
///
/// `next` and `previous` are absolute URLs, `null` at either end of the list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    #[serde(default)]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Iterates the area names in page order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|area| area.name.as_str())
    }
}
