//! Read-only export pipelines over persisted coaches and teams.

use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, Event};
use quick_xml::Writer;
use serde::Serialize;

use super::conversion::format_short_date;
use super::dto::export::{
    CoachExportDto, CoachesExportDocument, FootballerExportDto, FootballersExportList,
    TeamExportDto, TeamFootballerExportDto,
};
use super::errors::{ProcessorError, ProcessorResult};
use crate::domain::coach::Coach;
use crate::domain::footballer::Footballer;
use crate::domain::repositories::{CoachRepository, TeamRepository};
use crate::domain::team::{Team, TeamFootballer};

/// Upper bound on teams in the team export
pub const MAX_EXPORTED_TEAMS: usize = 5;

/// Exports every coach that has footballers as an XML document
///
/// Coaches are ordered by footballer count (descending) then name; each
/// coach's footballers are ordered by name.
pub async fn export_coaches_with_their_footballers(
    coaches: &dyn CoachRepository,
) -> ProcessorResult<String> {
    let mut selected: Vec<Coach> = coaches
        .find_all()
        .await
        .map_err(ProcessorError::Repository)?
        .into_iter()
        .filter(|coach| coach.footballers_count() >= 1)
        .collect();

    selected.sort_by(|a, b| {
        b.footballers_count()
            .cmp(&a.footballers_count())
            .then_with(|| a.name().cmp(b.name()))
    });

    tracing::debug!(coaches = selected.len(), "Exporting coaches");

    let document = CoachesExportDocument {
        coaches: selected.iter().map(coach_export).collect(),
    };

    render_xml(&document, "Coaches")
}

/// Exports up to [`MAX_EXPORTED_TEAMS`] teams as indented JSON
///
/// Only footballers whose contract starts on or after `date` count; teams
/// without any such footballer are left out.
pub async fn export_teams_with_most_footballers(
    teams: &dyn TeamRepository,
    date: NaiveDate,
) -> ProcessorResult<String> {
    let mut selected: Vec<TeamExportDto> = teams
        .find_all()
        .await
        .map_err(ProcessorError::Repository)?
        .iter()
        .filter_map(|team| team_export(team, date))
        .collect();

    selected.sort_by(|a, b| {
        b.footballers
            .len()
            .cmp(&a.footballers.len())
            .then_with(|| a.name.cmp(&b.name))
    });
    selected.truncate(MAX_EXPORTED_TEAMS);

    tracing::debug!(teams = selected.len(), %date, "Exporting teams");

    serde_json::to_string_pretty(&selected).map_err(ProcessorError::RenderJson)
}

fn coach_export(coach: &Coach) -> CoachExportDto {
    let mut footballers: Vec<FootballerExportDto> = coach
        .footballers()
        .iter()
        .map(|footballer| FootballerExportDto {
            name: footballer.name().to_string(),
            position: footballer.position_type().name().to_string(),
        })
        .collect();
    footballers.sort_by(|a, b| a.name.cmp(&b.name));

    CoachExportDto {
        footballers_count: coach.footballers_count().to_string(),
        coach_name: coach.name().to_string(),
        footballers: FootballersExportList { items: footballers },
    }
}

fn team_export(team: &Team, date: NaiveDate) -> Option<TeamExportDto> {
    let mut qualifying: Vec<&Footballer> = team
        .footballers()
        .iter()
        .filter_map(TeamFootballer::footballer)
        .filter(|footballer| footballer.contract_start_date() >= date)
        .collect();

    if qualifying.is_empty() {
        return None;
    }

    qualifying.sort_by(|a, b| {
        b.contract_end_date()
            .cmp(&a.contract_end_date())
            .then_with(|| a.name().cmp(b.name()))
    });

    Some(TeamExportDto {
        name: team.name().to_string(),
        footballers: qualifying
            .into_iter()
            .map(|footballer| TeamFootballerExportDto {
                footballer_name: footballer.name().to_string(),
                contract_start_date: format_short_date(footballer.contract_start_date()),
                contract_end_date: format_short_date(footballer.contract_end_date()),
                best_skill_type: footballer.best_skill_type().name().to_string(),
                position_type: footballer.position_type().name().to_string(),
            })
            .collect(),
    })
}

fn render_xml<T: Serialize>(value: &T, root: &str) -> ProcessorResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| ProcessorError::WriteXml(e.to_string()))?;
    writer.write_serializable(root, value)?;

    String::from_utf8(writer.into_inner()).map_err(|e| ProcessorError::WriteXml(e.to_string()))
}
