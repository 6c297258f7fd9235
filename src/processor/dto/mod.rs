// Transient wire shapes for the import feeds and export documents

pub mod export;
pub mod import;
