//! The fixed authoritative network dataset and its population routine.
//!
//! The network is described as line segments: an ordered list of station
//! labels with per-hop distances in kilometres. Population walks each
//! segment in order, then joins same-label records on distinct lines with
//! zero-distance interchange edges. The routine is deterministic: the same
//! segment table always yields the same registry, including iteration
//! order.

use tracing::debug;

use crate::domain::{InvalidLineCode, LineCode, StationId};

use super::registry::Network;

/// One run of stations along a line, with per-hop distances.
///
/// `hops_km` must have exactly one entry fewer than `stations`. A line may
/// contribute several segments (branches and spurs).
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    /// Line code for every station in this segment.
    pub line: &'static str,
    /// Ordered station labels.
    pub stations: &'static [&'static str],
    /// Distance of each hop, in kilometres.
    pub hops_km: &'static [f64],
}

/// Errors detected while populating the network from a segment table.
///
/// The dataset is static, so any of these indicates a build-time defect;
/// callers treat them as fatal at startup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    /// A segment's line code failed validation.
    #[error("bad line code {code:?}: {source}")]
    BadLineCode {
        code: String,
        source: InvalidLineCode,
    },

    /// A segment listed no stations.
    #[error("line {line} has an empty segment")]
    EmptySegment { line: String },

    /// A station label was empty.
    #[error("line {line} has a station with an empty label")]
    EmptyLabel { line: String },

    /// Hop count does not match station count.
    #[error("line {line} segment has {stations} stations but {hops} hops")]
    HopCountMismatch {
        line: String,
        stations: usize,
        hops: usize,
    },

    /// A hop distance was negative or non-finite.
    #[error("bad distance {distance} between {from} and {to}")]
    BadDistance {
        from: String,
        to: String,
        distance: f64,
    },

    /// A segment listed the same station twice in a row.
    #[error("line {line} lists {label} twice in a row")]
    RepeatedStation { line: String, label: String },
}

/// The Delhi Metro network used by the application.
///
/// Distances are route kilometres between adjacent stations. Stations
/// served by several lines (Rajiv Chowk, New Delhi, Dwarka Sector 21,
/// Rajouri Garden) appear once per line and are joined by interchange
/// edges during population.
const DELHI_METRO: &[LineSegment] = &[
    LineSegment {
        line: "B",
        stations: &[
            "Noida Sector 62",
            "Botanical Garden",
            "Yamuna Bank",
            "Rajiv Chowk",
            "Moti Nagar",
            "Janak Puri West",
            "Dwarka Sector 21",
        ],
        hops_km: &[8.0, 10.0, 6.0, 9.0, 7.0, 6.0],
    },
    LineSegment {
        line: "B",
        stations: &["Yamuna Bank", "Vaishali"],
        hops_km: &[8.0],
    },
    LineSegment {
        line: "B",
        stations: &["Moti Nagar", "Rajouri Garden"],
        hops_km: &[2.0],
    },
    LineSegment {
        line: "Y",
        stations: &[
            "Huda City Centre",
            "Saket",
            "AIIMS",
            "Rajiv Chowk",
            "New Delhi",
            "Chandni Chowk",
            "Vishwavidyalaya",
        ],
        hops_km: &[15.0, 6.0, 7.0, 1.0, 2.0, 5.0],
    },
    LineSegment {
        line: "O",
        stations: &[
            "New Delhi",
            "Shivaji Stadium",
            "DDS Campus",
            "IGI Airport",
            "Dwarka Sector 21",
        ],
        hops_km: &[2.0, 7.0, 8.0, 5.0],
    },
    LineSegment {
        line: "P",
        stations: &["Rajouri Garden", "Punjabi Bagh West", "Netaji Subhash Place"],
        hops_km: &[2.0, 3.0],
    },
];

/// Build the fixed Delhi Metro network.
///
/// This is the one-time population step; the resulting network is treated
/// as immutable for the rest of the process.
pub fn delhi_metro() -> Result<Network, DatasetError> {
    build_network(DELHI_METRO)
}

/// Populate a network from a segment table.
///
/// Walks each segment in order, inserting stations idempotently and
/// symmetric distance edges per hop, then adds a zero-distance interchange
/// edge between every pair of same-label records on distinct lines.
pub fn build_network(segments: &[LineSegment]) -> Result<Network, DatasetError> {
    let mut network = Network::new();

    for segment in segments {
        let line = LineCode::parse(segment.line).map_err(|source| DatasetError::BadLineCode {
            code: segment.line.to_string(),
            source,
        })?;

        if segment.stations.is_empty() {
            return Err(DatasetError::EmptySegment {
                line: segment.line.to_string(),
            });
        }
        if segment.hops_km.len() != segment.stations.len() - 1 {
            return Err(DatasetError::HopCountMismatch {
                line: segment.line.to_string(),
                stations: segment.stations.len(),
                hops: segment.hops_km.len(),
            });
        }

        let mut previous: Option<StationId> = None;
        for (i, &label) in segment.stations.iter().enumerate() {
            if label.is_empty() {
                return Err(DatasetError::EmptyLabel {
                    line: segment.line.to_string(),
                });
            }

            let station = StationId::new(label, line);
            network.add_station(station.clone());

            if let Some(prev) = previous {
                if prev == station {
                    return Err(DatasetError::RepeatedStation {
                        line: segment.line.to_string(),
                        label: label.to_string(),
                    });
                }
                let distance = segment.hops_km[i - 1];
                if !distance.is_finite() || distance < 0.0 {
                    return Err(DatasetError::BadDistance {
                        from: prev.label().to_string(),
                        to: label.to_string(),
                        distance,
                    });
                }
                // Endpoints were just inserted, so this cannot fail.
                let _ = network.add_edge(&prev, &station, distance);
            }
            previous = Some(station);
        }
    }

    add_interchange_edges(&mut network);

    debug!(
        stations = network.len(),
        "populated network from segment table"
    );
    Ok(network)
}

/// Join same-label records on distinct lines with zero-distance edges.
fn add_interchange_edges(network: &mut Network) {
    let stations: Vec<StationId> = network.stations().to_vec();
    for (i, a) in stations.iter().enumerate() {
        for b in &stations[..i] {
            if a.label() == b.label() && a.line() != b.line() {
                // Both endpoints exist by construction.
                let _ = network.add_edge(a, b, 0.0);
            }
        }
    }
}
