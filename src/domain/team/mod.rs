// Team domain module
// Contains team aggregate root and its footballer links

#![allow(clippy::module_inception)]

pub mod team;
pub mod team_footballer;

// Re-export main types for convenience
pub use team::{distinct_footballer_ids, Team};
pub use team_footballer::TeamFootballer;
