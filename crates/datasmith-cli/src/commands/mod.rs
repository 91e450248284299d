//! CLI command implementations.

pub mod kpi;
pub mod weather;
