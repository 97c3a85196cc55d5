//! Domain types for the metro route engine.
//!
//! This module contains the core domain model types: structured station
//! identity, route results, and the errors that registry lookups can
//! surface. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod error;
mod route;
mod station;

pub use error::EngineError;
pub use route::{AnnotatedRoute, Route};
pub use station::{InvalidLineCode, LineCode, StationId};
