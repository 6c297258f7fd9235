//! Conversion of textual feed values into typed domain values.
//!
//! A conversion failure is a distinct outcome from a field validation
//! failure, but both end up as the same generic report line.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::errors::ConversionError;
use crate::domain::errors::DomainError;
use crate::domain::footballer::{BestSkillType, PositionType};

/// chrono format for the `dd/MM/yyyy` contract dates of the coach feed
pub const CONTRACT_DATE_FORMAT: &str = "%d/%m/%Y";

/// chrono format for the invariant short date (`MM/dd/yyyy`) used in exports
pub const SHORT_DATE_FORMAT: &str = "%m/%d/%Y";

// chrono accepts single-digit days/months and signed years, so the exact
// shape is checked first.
static CONTRACT_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"));

/// Parses a `dd/MM/yyyy` date, rejecting anything that deviates from the
/// exact pattern
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use footballers_api::processor::conversion::parse_contract_date;
///
/// assert_eq!(
///     parse_contract_date("05/11/2021").unwrap(),
///     NaiveDate::from_ymd_opt(2021, 11, 5).unwrap()
/// );
/// assert!(parse_contract_date("5/11/2021").is_err());
/// ```
pub fn parse_contract_date(value: &str) -> Result<NaiveDate, ConversionError> {
    if !CONTRACT_DATE_SHAPE.is_match(value) {
        return Err(ConversionError::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, CONTRACT_DATE_FORMAT)
        .map_err(|_| ConversionError::InvalidDate(value.to_string()))
}

/// Parses both contract dates and checks that start is strictly before end
///
/// Any of the three checks failing rejects the whole period.
pub fn parse_contract_period(
    start: &str,
    end: &str,
) -> Result<(NaiveDate, NaiveDate), ConversionError> {
    let start = parse_contract_date(start)?;
    let end = parse_contract_date(end)?;

    if start >= end {
        return Err(DomainError::InvalidContractPeriod { start, end }.into());
    }

    Ok((start, end))
}

/// Parses a whole number, tolerating surrounding whitespace
pub fn parse_whole_number(value: &str) -> Result<i32, ConversionError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ConversionError::InvalidNumber(value.to_string()))
}

/// Parses a trophy count, which must be strictly positive
pub fn parse_trophies(value: &str) -> Result<i32, ConversionError> {
    let trophies = parse_whole_number(value)?;
    if trophies <= 0 {
        return Err(DomainError::NonPositiveTrophies(trophies).into());
    }
    Ok(trophies)
}

pub fn parse_best_skill_type(value: &str) -> Result<BestSkillType, ConversionError> {
    Ok(BestSkillType::try_from(parse_whole_number(value)?)?)
}

pub fn parse_position_type(value: &str) -> Result<PositionType, ConversionError> {
    Ok(PositionType::try_from(parse_whole_number(value)?)?)
}

/// Formats a date the way the invariant culture prints a short date
pub fn format_short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}
