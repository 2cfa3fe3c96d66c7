use serde::Deserialize;

/// Form fields of one batch submission. Absent fields deserialize to empty
/// strings and are passed through to the search API as-is.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Raw keyword blob, one keyword per line.
    #[serde(default)]
    pub keywords: String,
    /// Locale/region restriction.
    #[serde(default)]
    pub lr: String,
    /// Country restriction.
    #[serde(default)]
    pub cr: String,
    /// Result count, forwarded as a string.
    #[serde(default)]
    pub num: String,
}

// Search API types. The API returns more fields per result; only the link
// is consumed, and missing fields decode to defaults rather than failing
// the keyword.
#[derive(Debug, Deserialize)]
pub struct RapidApiResponse {
    #[serde(default)]
    pub results: Vec<RapidApiResult>,
}

#[derive(Debug, Deserialize)]
pub struct RapidApiResult {
    #[serde(default)]
    pub link: String,
}
