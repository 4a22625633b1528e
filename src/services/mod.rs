//! Service layer
//!
//! High-level business logic over the persistence layer.

mod workspace;

pub use workspace::{ImportSummary, Workspace};
