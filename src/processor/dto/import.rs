//! Input shapes for the coach (XML) and team (JSON) feeds.
//!
//! Every constrained field is optional at the serde level so that a missing
//! value surfaces as a validation failure for that record, not as a
//! malformed document.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

/// Allowed characters in a team name
pub const TEAM_NAME_PATTERN: &str = r"^[a-zA-Z0-9 ._-]+$";

static TEAM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TEAM_NAME_PATTERN).expect("valid regex"));

/// Root of the coach feed: `<Coaches><Coach>...</Coach></Coaches>`
#[derive(Debug, Default, Deserialize)]
pub struct CoachesImportDocument {
    #[serde(rename = "Coach", default)]
    pub coaches: Vec<CoachImportDto>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CoachImportDto {
    #[serde(rename = "Name")]
    #[validate(required, length(min = 2, max = 40))]
    pub name: Option<String>,

    #[serde(rename = "Nationality")]
    #[validate(required, length(min = 1))]
    pub nationality: Option<String>,

    #[serde(rename = "Footballers", default)]
    pub footballers: FootballersImportList,
}

/// `<Footballers>` wrapper element around the coach's footballers
#[derive(Debug, Default, Deserialize)]
pub struct FootballersImportList {
    #[serde(rename = "Footballer", default)]
    pub items: Vec<FootballerImportDto>,
}

/// Dates and category codes stay textual here; they are converted only after
/// the record passes field validation.
#[derive(Debug, Deserialize, Validate)]
pub struct FootballerImportDto {
    #[serde(rename = "Name")]
    #[validate(required, length(min = 2, max = 40))]
    pub name: Option<String>,

    #[serde(rename = "ContractStartDate")]
    #[validate(required, length(min = 1))]
    pub contract_start_date: Option<String>,

    #[serde(rename = "ContractEndDate")]
    #[validate(required, length(min = 1))]
    pub contract_end_date: Option<String>,

    #[serde(rename = "BestSkillType")]
    #[validate(required, length(min = 1))]
    pub best_skill_type: Option<String>,

    #[serde(rename = "PositionType")]
    #[validate(required, length(min = 1))]
    pub position_type: Option<String>,
}

/// One element of the team feed's top-level JSON array
#[derive(Debug, Deserialize, Validate)]
pub struct TeamImportDto {
    #[serde(rename = "Name")]
    #[validate(required, length(min = 3, max = 40), regex(path = *TEAM_NAME_RE))]
    pub name: Option<String>,

    #[serde(rename = "Nationality")]
    #[validate(required, length(min = 2, max = 40))]
    pub nationality: Option<String>,

    /// Feeds send this as a string or a bare number; both are kept as text
    #[serde(rename = "Trophies", default, deserialize_with = "number_as_text")]
    #[validate(required, length(min = 1))]
    pub trophies: Option<String>,

    #[serde(rename = "Footballers")]
    pub footballers: Option<Vec<i32>>,
}

/// Reads any JSON scalar as text so a badly typed value fails conversion for
/// its own record instead of failing the whole document
fn number_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
