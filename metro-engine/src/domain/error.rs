//! Engine error types.
//!
//! Unknown-station lookups fail fast with an error; an unreachable
//! destination is an expected outcome and is represented by an empty
//! route with weight zero, never by an error.

/// Errors surfaced by registry lookups and route queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// An operation referenced a station absent from the registry.
    #[error("unknown station: {station}")]
    UnknownStation { station: String },
}

impl EngineError {
    /// Convenience constructor from anything displayable as a station key.
    pub fn unknown_station(station: impl ToString) -> Self {
        EngineError::UnknownStation {
            station: station.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineCode, StationId};

    #[test]
    fn error_display() {
        let err = EngineError::unknown_station("Narnia");
        assert_eq!(err.to_string(), "unknown station: Narnia");

        let id = StationId::new("Saket", LineCode::parse("Y").unwrap());
        let err = EngineError::unknown_station(&id);
        assert_eq!(err.to_string(), "unknown station: Saket [Y]");
    }
}
