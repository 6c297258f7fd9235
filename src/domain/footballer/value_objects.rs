use std::fmt;

use crate::domain::errors::DomainError;

/// The skill a footballer is best known for
///
/// Stored and supplied as an integer code:
/// ```text
/// 0 Defence | 1 Dribble | 2 Endurance | 3 Pace | 4 Power
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum BestSkillType {
    Defence = 0,
    Dribble = 1,
    Endurance = 2,
    Pace = 3,
    Power = 4,
}

impl BestSkillType {
    /// Returns the category name used in exports
    ///
    /// # Example
    /// ```
    /// use footballers_api::domain::footballer::BestSkillType;
    ///
    /// assert_eq!(BestSkillType::Pace.name(), "Pace");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            BestSkillType::Defence => "Defence",
            BestSkillType::Dribble => "Dribble",
            BestSkillType::Endurance => "Endurance",
            BestSkillType::Pace => "Pace",
            BestSkillType::Power => "Power",
        }
    }
}

impl TryFrom<i32> for BestSkillType {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BestSkillType::Defence),
            1 => Ok(BestSkillType::Dribble),
            2 => Ok(BestSkillType::Endurance),
            3 => Ok(BestSkillType::Pace),
            4 => Ok(BestSkillType::Power),
            other => Err(DomainError::UnknownBestSkillType(other)),
        }
    }
}

impl fmt::Display for BestSkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The position a footballer plays
///
/// ```text
/// 0 Goalkeeper | 1 Defender | 2 Midfielder | 3 Forward
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum PositionType {
    Goalkeeper = 0,
    Defender = 1,
    Midfielder = 2,
    Forward = 3,
}

impl PositionType {
    /// Returns the category name used in exports
    pub fn name(&self) -> &'static str {
        match self {
            PositionType::Goalkeeper => "Goalkeeper",
            PositionType::Defender => "Defender",
            PositionType::Midfielder => "Midfielder",
            PositionType::Forward => "Forward",
        }
    }
}

impl TryFrom<i32> for PositionType {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PositionType::Goalkeeper),
            1 => Ok(PositionType::Defender),
            2 => Ok(PositionType::Midfielder),
            3 => Ok(PositionType::Forward),
            other => Err(DomainError::UnknownPositionType(other)),
        }
    }
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
