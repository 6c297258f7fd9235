// Repository ports
// Implemented by adapters in the infrastructure layer

pub mod coach_repository;
pub mod footballer_repository;
pub mod team_repository;

pub use coach_repository::CoachRepository;
pub use footballer_repository::FootballerRepository;
pub use team_repository::TeamRepository;
