//! Domain identifier types with validation
//!
//! Newtype wrappers for years, asset identifiers, and band names. Each type
//! keeps callers from mixing a band name with an asset path, for example.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification year
///
/// Identifies which annual band to extract and is embedded in every
/// output name derived from it.
///
/// # Examples
///
/// ```
/// use mapexport::domain::ids::Year;
///
/// let year = Year::new(1985).unwrap();
/// assert_eq!(year.to_string(), "1985");
/// assert!(Year::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// First year of the annual land-cover series
    pub const FIRST_ANNUAL: Year = Year(1985);

    /// Last year of the annual land-cover series
    pub const LAST_ANNUAL: Year = Year(2024);

    /// Longest inclusive range `start..=end` that may be expanded
    pub const MAX_RANGE_LEN: i64 = 10_000;

    /// Creates a new Year, rejecting zero and negative values
    pub fn new(value: i32) -> Result<Self, String> {
        if value <= 0 {
            return Err(format!("Year must be a positive integer, got {value}"));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value of the year
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Checks that `start..=end` is ordered and short enough to expand
    pub fn check_range(start: Year, end: Year) -> Result<(), String> {
        if start > end {
            return Err(format!("Year range {start}-{end}: start is after end"));
        }
        let len = i64::from(end.0) - i64::from(start.0) + 1;
        if len > Self::MAX_RANGE_LEN {
            return Err(format!(
                "Year range {start}-{end} spans {len} years, at most {} allowed",
                Self::MAX_RANGE_LEN
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid year '{}'", s.trim()))?;
        Self::new(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// Parses a year list given on the command line
///
/// Accepts comma-separated entries where each entry is either a single year
/// or an inclusive range `start-end`. Order and duplicates are preserved.
///
/// # Examples
///
/// ```
/// use mapexport::domain::ids::parse_year_list;
///
/// let years = parse_year_list("1985-1987,1990").unwrap();
/// let values: Vec<i32> = years.iter().map(|y| y.value()).collect();
/// assert_eq!(values, vec![1985, 1986, 1987, 1990]);
/// ```
pub fn parse_year_list(input: &str) -> Result<Vec<Year>, String> {
    let mut years = Vec::new();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.split_once('-') {
            Some((start, end)) => {
                let start = Year::from_str(start)?;
                let end = Year::from_str(end)?;
                Year::check_range(start, end)
                    .map_err(|e| format!("Invalid year range '{entry}': {e}"))?;
                for value in start.value()..=end.value() {
                    years.push(Year(value));
                }
            }
            None => years.push(Year::from_str(entry)?),
        }
    }

    Ok(years)
}

/// Remote asset identifier
///
/// An opaque path naming an image or table on the export platform,
/// e.g. `projects/mapbiomas-public/assets/brazil/lulc/collection10/...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(String);

impl AssetId {
    /// Creates a new AssetId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Asset ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the asset ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Name of a single band within a multi-band image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandName(String);

impl BandName {
    /// Creates a new BandName from a string
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Band name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Builds the band name for a year: `<prefix><year>`
    pub fn for_year(prefix: &str, year: Year) -> Self {
        Self(format!("{prefix}{year}"))
    }

    /// Returns the band name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
