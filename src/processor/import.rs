//! Import pipelines for the coach and team feeds.
//!
//! Each call deserializes the whole document, validates and converts record
//! by record, writes one report line per outcome and finally hands every
//! accepted aggregate to the repository in a single bulk commit.

use std::fmt;

use super::conversion::{
    parse_best_skill_type, parse_contract_period, parse_position_type, parse_trophies,
};
use super::dto::import::{
    CoachImportDto, CoachesImportDocument, FootballerImportDto, TeamImportDto,
};
use super::errors::{ConversionError, ProcessorError, ProcessorResult};
use super::report::ImportReport;
use super::validation::is_valid;
use crate::domain::coach::Coach;
use crate::domain::errors::DomainError;
use crate::domain::footballer::Footballer;
use crate::domain::repositories::{CoachRepository, FootballerRepository, TeamRepository};
use crate::domain::team::{distinct_footballer_ids, Team};

/// Why a single record or item was left out of the import
#[derive(Debug)]
enum Rejection {
    Fields,
    Conversion(ConversionError),
    UnknownFootballer(i32),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields => write!(f, "field constraints not met"),
            Self::Conversion(error) => write!(f, "{}", error),
            Self::UnknownFootballer(id) => write!(f, "footballer {} does not exist", id),
        }
    }
}

impl From<ConversionError> for Rejection {
    fn from(error: ConversionError) -> Self {
        Self::Conversion(error)
    }
}

impl From<DomainError> for Rejection {
    fn from(error: DomainError) -> Self {
        Self::Conversion(error.into())
    }
}

/// Imports coaches and their footballers from an XML document
///
/// # Returns
/// * `Ok(String)` - Report text, one line per coach and per rejected footballer
/// * `Err(ProcessorError::MalformedXml)` - The document could not be read;
///   nothing is stored
/// * `Err(ProcessorError::Repository)` - The bulk commit failed
///
/// A rejected footballer does not reject its coach: the coach is still stored
/// with whichever footballers were accepted.
pub async fn import_coaches(
    coaches: &dyn CoachRepository,
    xml: &str,
) -> ProcessorResult<String> {
    let document: CoachesImportDocument = quick_xml::de::from_str(xml)?;

    let mut report = ImportReport::new();
    let mut valid_coaches = Vec::with_capacity(document.coaches.len());

    for dto in &document.coaches {
        let mut coach = match convert_coach(dto) {
            Ok(coach) => coach,
            Err(reason) => {
                tracing::debug!(%reason, "Rejected coach record");
                report.record_failure();
                continue;
            }
        };

        for footballer_dto in &dto.footballers.items {
            match convert_footballer(footballer_dto) {
                Ok(footballer) => coach.add_footballer(footballer),
                Err(reason) => {
                    tracing::debug!(coach = coach.name(), %reason, "Rejected footballer");
                    report.record_failure();
                }
            }
        }

        report.record_coach_imported(coach.name(), coach.footballers_count());
        valid_coaches.push(coach);
    }

    let imported = valid_coaches.len();
    coaches
        .save_all(valid_coaches)
        .await
        .map_err(ProcessorError::Repository)?;

    tracing::info!(
        imported,
        rejected_lines = report.failures(),
        "Coach import finished"
    );

    Ok(report.into_text())
}

/// Imports teams from a JSON array, linking them to existing footballers
///
/// Repeated footballer ids in a team are dropped silently; ids that do not
/// match a stored footballer produce a failure line but keep the team.
pub async fn import_teams(
    teams: &dyn TeamRepository,
    footballers: &dyn FootballerRepository,
    json: &str,
) -> ProcessorResult<String> {
    let dtos: Vec<TeamImportDto> =
        serde_json::from_str(json).map_err(ProcessorError::MalformedJson)?;

    let mut report = ImportReport::new();
    let mut valid_teams = Vec::with_capacity(dtos.len());

    for dto in &dtos {
        let mut team = match convert_team(dto) {
            Ok(team) => team,
            Err(reason) => {
                tracing::debug!(%reason, "Rejected team record");
                report.record_failure();
                continue;
            }
        };

        let requested = dto.footballers.as_deref().unwrap_or_default();
        for footballer_id in distinct_footballer_ids(requested) {
            if let Err(reason) = link_footballer(&mut team, footballers, footballer_id).await? {
                tracing::debug!(team = team.name(), %reason, "Rejected footballer link");
                report.record_failure();
            }
        }

        report.record_team_imported(team.name(), team.footballers().len());
        valid_teams.push(team);
    }

    let imported = valid_teams.len();
    teams
        .save_all(valid_teams)
        .await
        .map_err(ProcessorError::Repository)?;

    tracing::info!(
        imported,
        rejected_lines = report.failures(),
        "Team import finished"
    );

    Ok(report.into_text())
}

fn convert_coach(dto: &CoachImportDto) -> Result<Coach, Rejection> {
    if !is_valid(dto) {
        return Err(Rejection::Fields);
    }

    Ok(Coach::new(
        dto.name.clone().unwrap_or_default(),
        dto.nationality.clone().unwrap_or_default(),
    )?)
}

fn convert_footballer(dto: &FootballerImportDto) -> Result<Footballer, Rejection> {
    if !is_valid(dto) {
        return Err(Rejection::Fields);
    }

    let (start, end) = parse_contract_period(
        dto.contract_start_date.as_deref().unwrap_or_default(),
        dto.contract_end_date.as_deref().unwrap_or_default(),
    )?;
    let best_skill_type = parse_best_skill_type(dto.best_skill_type.as_deref().unwrap_or_default())?;
    let position_type = parse_position_type(dto.position_type.as_deref().unwrap_or_default())?;

    Ok(Footballer::new(
        dto.name.clone().unwrap_or_default(),
        start,
        end,
        best_skill_type,
        position_type,
    )?)
}

fn convert_team(dto: &TeamImportDto) -> Result<Team, Rejection> {
    if !is_valid(dto) {
        return Err(Rejection::Fields);
    }

    let trophies = parse_trophies(dto.trophies.as_deref().unwrap_or_default())?;

    Ok(Team::new(
        dto.name.clone().unwrap_or_default(),
        dto.nationality.clone().unwrap_or_default(),
        trophies,
    )?)
}

/// Resolves the footballer id against storage and links it to the team
///
/// The outer error is a repository failure and aborts the call; the inner
/// one rejects only this link.
async fn link_footballer(
    team: &mut Team,
    footballers: &dyn FootballerRepository,
    footballer_id: i32,
) -> ProcessorResult<Result<(), Rejection>> {
    let exists = footballers
        .exists(footballer_id)
        .await
        .map_err(ProcessorError::Repository)?;

    if !exists {
        return Ok(Err(Rejection::UnknownFootballer(footballer_id)));
    }

    team.add_footballer(footballer_id);
    Ok(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::dto::import::FootballersImportList;

    fn footballer_dto(start: &str, end: &str) -> FootballerImportDto {
        FootballerImportDto {
            name: Some("Deco".to_string()),
            contract_start_date: Some(start.to_string()),
            contract_end_date: Some(end.to_string()),
            best_skill_type: Some("1".to_string()),
            position_type: Some("2".to_string()),
        }
    }

    #[test]
    fn convert_footballer_with_valid_fields() {
        let footballer = convert_footballer(&footballer_dto("01/07/2004", "30/06/2008")).unwrap();
        assert_eq!(footballer.name(), "Deco");
    }

    #[test]
    fn convert_footballer_rejects_reversed_contract() {
        let result = convert_footballer(&footballer_dto("30/06/2008", "01/07/2004"));
        assert!(matches!(result, Err(Rejection::Conversion(_))));
    }

    #[test]
    fn convert_footballer_rejects_unknown_position_code() {
        let mut dto = footballer_dto("01/07/2004", "30/06/2008");
        dto.position_type = Some("7".to_string());
        assert!(convert_footballer(&dto).is_err());
    }

    #[test]
    fn convert_coach_rejects_missing_nationality() {
        let dto = CoachImportDto {
            name: Some("Mourinho".to_string()),
            nationality: None,
            footballers: FootballersImportList::default(),
        };
        assert!(matches!(convert_coach(&dto), Err(Rejection::Fields)));
    }

    #[test]
    fn convert_team_rejects_non_numeric_trophies() {
        let dto = TeamImportDto {
            name: Some("Porto".to_string()),
            nationality: Some("Portugal".to_string()),
            trophies: Some("lots".to_string()),
            footballers: Some(vec![1]),
        };
        assert!(matches!(convert_team(&dto), Err(Rejection::Conversion(_))));
    }

    #[test]
    fn convert_team_rejects_blank_nationality() {
        let dto = TeamImportDto {
            name: Some("Porto".to_string()),
            nationality: Some("   ".to_string()),
            trophies: Some("30".to_string()),
            footballers: None,
        };
        assert!(matches!(convert_team(&dto), Err(Rejection::Conversion(_))));
    }

    #[test]
    fn rejection_reason_names_the_cause() {
        assert_eq!(
            Rejection::UnknownFootballer(7).to_string(),
            "footballer 7 does not exist"
        );
        let reason = Rejection::from(ConversionError::InvalidNumber("lots".to_string()));
        assert_eq!(reason.to_string(), "\"lots\" is not a whole number");
    }
}
