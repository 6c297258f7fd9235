// Footballer domain module
// Contains the footballer entity and its coded categories

#![allow(clippy::module_inception)]

pub mod footballer;
pub mod value_objects;

pub use footballer::Footballer;
pub use value_objects::{BestSkillType, PositionType};
