//! Term Scanning Server Library
//!
//! This crate exposes everything the server binary, the integration tests,
//! and the benches need. The binary itself is in main.rs.
//!
//! # Modules
//!
//! - `terms`: term list resolution (spreadsheet first column or built-in list)
//! - `scan`: the two matching strategies (geometric quad search, normalized text search)
//! - `annotate`: object-level highlight writing and clean re-serialization
//! - `routes`: HTTP endpoints

pub mod annotate;
pub mod config;
pub mod error;
pub mod routes;
pub mod scan;
pub mod state;
pub mod terms;
