use serde::{Serialize, Deserialize};
use anyhow::Result;
use thiserror::Error;

/// Structured contents of one wiki "day article".
///
/// All sequences keep the source order of the article. Repeated mentions in
/// the source produce repeated entries, nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub holidays_int: Vec<String>,
    pub holidays_loc: Vec<String>,
    pub holidays_prof: Vec<String>,
    pub holidays_rlg: Vec<ReligiousHolidayGroup>,
    pub name_days: Vec<String>,
    pub omens: Vec<String>,
}

/// One run of religious-holiday lines under a single denomination header.
///
/// A denomination header that reappears later in the article starts a new
/// group; groups are never merged after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReligiousHolidayGroup {
    /// Short group label: "правосл.", "катол.", "бахаи", or empty for
    /// other faiths and unclassified blocks.
    pub group_abbr: String,
    pub descriptions: Vec<String>,
}

impl DayReport {
    pub fn as_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty article body")]
    EmptyInput,
}
