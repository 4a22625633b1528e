//! Persistence layer
//!
//! The state store owning the single document slot and its export/import
//! surface.

mod state_store;

pub use state_store::{DocumentSlice, ImportOutcome, StateStore};
