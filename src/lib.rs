//! Footballers Data Processor Library
//!
//! Imports coaches (XML) and teams (JSON) with per-record validation and a
//! line-oriented report, and exports persisted data back out as XML and
//! JSON documents.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod processor;
