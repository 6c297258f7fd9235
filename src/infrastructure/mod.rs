// Infrastructure layer module
// Storage adapters for the domain repository ports:
// PostgreSQL for deployments, an in-memory store for tests and local runs

pub mod repositories;
