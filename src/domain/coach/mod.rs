// Coach domain module
// Contains the coach aggregate root that owns its footballers

#![allow(clippy::module_inception)]

pub mod coach;

pub use coach::Coach;
