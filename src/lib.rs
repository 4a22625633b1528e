//! Night Shift core
//!
//! State persistence and derived-metrics engine for the Night Shift
//! productivity dashboard: the durable document store, the ordered
//! collection editor, and the pure analytics over the raw event logs.

pub mod collections;
pub mod config;
pub mod document;
pub mod error;
pub mod metrics;
pub mod services;
pub mod store;
