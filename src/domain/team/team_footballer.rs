use crate::domain::footballer::Footballer;

/// Association between a team and an existing footballer
///
/// Links created during import only carry the footballer id. Links read back
/// from storage also carry the linked footballer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFootballer {
    footballer_id: i32,
    footballer: Option<Footballer>,
}

impl TeamFootballer {
    /// Creates a link to the footballer with the given id
    pub fn new(footballer_id: i32) -> Self {
        Self {
            footballer_id,
            footballer: None,
        }
    }

    pub fn footballer_id(&self) -> i32 {
        self.footballer_id
    }

    /// Returns the linked footballer when loaded from storage
    pub fn footballer(&self) -> Option<&Footballer> {
        self.footballer.as_ref()
    }

    /// Reconstructs a loaded link from persistence layer data
    pub fn from_persistence(footballer_id: i32, footballer: Footballer) -> Self {
        Self {
            footballer_id,
            footballer: Some(footballer),
        }
    }
}
