//! # Catalog Server Library
//!
//! Composition root and startup utilities for the product catalog server.

pub mod app;
pub mod startup;
pub mod telemetry;
