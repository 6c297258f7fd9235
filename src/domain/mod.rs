// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod coach;
pub mod errors;
pub mod footballer;
pub mod repositories;
pub mod team;
