//! Output shapes for the coach (XML) and team (JSON) exports.

use serde::Serialize;

/// Root of the coach export, serialized under the `Coaches` root tag
#[derive(Debug, Serialize)]
pub struct CoachesExportDocument {
    #[serde(rename = "Coach")]
    pub coaches: Vec<CoachExportDto>,
}

#[derive(Debug, Serialize)]
pub struct CoachExportDto {
    #[serde(rename = "@FootballersCount")]
    pub footballers_count: String,

    #[serde(rename = "CoachName")]
    pub coach_name: String,

    #[serde(rename = "Footballers")]
    pub footballers: FootballersExportList,
}

#[derive(Debug, Serialize)]
pub struct FootballersExportList {
    #[serde(rename = "Footballer")]
    pub items: Vec<FootballerExportDto>,
}

#[derive(Debug, Serialize)]
pub struct FootballerExportDto {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Position")]
    pub position: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamExportDto {
    pub name: String,
    pub footballers: Vec<TeamFootballerExportDto>,
}

/// Contract dates are pre-formatted in the invariant short date format
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamFootballerExportDto {
    pub footballer_name: String,
    pub contract_start_date: String,
    pub contract_end_date: String,
    pub best_skill_type: String,
    pub position_type: String,
}
