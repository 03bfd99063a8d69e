//! Keystone core: record normalization and listing helpers.
//!
//! Everything in this crate is a pure function over `serde_json` records.
//! No I/O, no global state; the persistence and HTTP layers build on top.

pub mod analytics;
pub mod coercion;
pub mod display;
pub mod error;
pub mod fields;
pub mod mapping;
pub mod search;
pub mod table;
pub mod types;
pub mod value;
