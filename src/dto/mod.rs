//! DTO modules that bridge request parameters and query results with templates.

pub mod references;
