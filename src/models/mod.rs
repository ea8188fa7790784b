//! Runtime configuration of the server.

pub mod config;
