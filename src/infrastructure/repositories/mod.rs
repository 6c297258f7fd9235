// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_repository;
pub mod postgres_coach_repository;
pub mod postgres_footballer_repository;
pub mod postgres_team_repository;

pub use in_memory_repository::InMemoryRepository;
pub use postgres_coach_repository::PostgresCoachRepository;
pub use postgres_footballer_repository::PostgresFootballerRepository;
pub use postgres_team_repository::PostgresTeamRepository;
