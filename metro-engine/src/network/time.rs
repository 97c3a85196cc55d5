//! Derived travel-time graph.
//!
//! "Minimum time" queries run over a second network with the same vertex
//! set and topology as the distance network, where each weight is the hop's
//! travel time in minutes. Interchange edges (same label, different line)
//! additionally carry a fixed penalty modeling the delay of changing lines.

use tracing::debug;

use super::registry::Network;

/// Timing parameters for the distance-to-time transform.
#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Average train speed used to convert kilometres to minutes.
    pub average_speed_kmh: f64,

    /// Fixed penalty added to every interchange edge, in minutes.
    pub interchange_penalty_mins: f64,
}

impl TimingConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(average_speed_kmh: f64, interchange_penalty_mins: f64) -> Self {
        Self {
            average_speed_kmh,
            interchange_penalty_mins,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 40.0,
            interchange_penalty_mins: 2.0,
        }
    }
}

/// Build the travel-time network from a distance network.
///
/// Pure transform: the distance network is not mutated, and the result is
/// a fresh, independent network differing only in weight semantics.
pub fn travel_time_graph(distance: &Network, timing: &TimingConfig) -> Network {
    let time = distance.map_weights(|a, b, km| {
        let mut mins = km / timing.average_speed_kmh * 60.0;
        if a.label() == b.label() && a.line() != b.line() {
            mins += timing.interchange_penalty_mins;
        }
        mins
    });

    debug!(
        stations = time.len(),
        speed_kmh = timing.average_speed_kmh,
        penalty_mins = timing.interchange_penalty_mins,
        "derived travel-time graph"
    );
    time
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineCode, StationId};

    fn id(label: &str, line: &str) -> StationId {
        StationId::new(label, LineCode::parse(line).unwrap())
    }

    fn two_line_network() -> Network {
        let mut net = Network::new();
        net.add_station(id("A", "B"));
        net.add_station(id("X", "B"));
        net.add_station(id("X", "Y"));
        net.add_station(id("C", "Y"));
        net.add_edge(&id("A", "B"), &id("X", "B"), 8.0).unwrap();
        net.add_edge(&id("X", "B"), &id("X", "Y"), 0.0).unwrap();
        net.add_edge(&id("X", "Y"), &id("C", "Y"), 4.0).unwrap();
        net
    }

    #[test]
    fn default_config() {
        let timing = TimingConfig::default();
        assert_eq!(timing.average_speed_kmh, 40.0);
        assert_eq!(timing.interchange_penalty_mins, 2.0);
    }

    #[test]
    fn converts_distance_to_minutes() {
        let net = two_line_network();
        let time = travel_time_graph(&net, &TimingConfig::default());

        // 8 km at 40 km/h = 12 minutes.
        let nbrs = time.neighbors(&id("A", "B")).unwrap();
        assert_eq!(nbrs, vec![(id("X", "B"), 12.0)]);
    }

    #[test]
    fn interchange_edges_get_penalty() {
        let net = two_line_network();
        let time = travel_time_graph(&net, &TimingConfig::default());

        let nbrs = time.neighbors(&id("X", "B")).unwrap();
        assert!(nbrs.contains(&(id("X", "Y"), 2.0)));
    }

    #[test]
    fn same_line_edges_get_no_penalty() {
        let net = two_line_network();
        let time = travel_time_graph(&net, &TimingConfig::new(60.0, 5.0));

        // 4 km at 60 km/h = 4 minutes, no penalty within a line.
        let nbrs = time.neighbors(&id("X", "Y")).unwrap();
        assert!(nbrs.contains(&(id("C", "Y"), 4.0)));
    }

    #[test]
    fn transform_is_pure() {
        let net = two_line_network();
        let before = net.adjacency();
        let _ = travel_time_graph(&net, &TimingConfig::default());
        assert_eq!(net.adjacency(), before);
    }

    #[test]
    fn same_topology_and_vertex_set() {
        let net = two_line_network();
        let time = travel_time_graph(&net, &TimingConfig::default());

        assert_eq!(time.stations(), net.stations());
        for (station, nbrs) in net.adjacency() {
            let time_nbrs = time.neighbors(&station).unwrap();
            assert_eq!(time_nbrs.len(), nbrs.len());
            for ((a, _), (b, _)) in nbrs.iter().zip(time_nbrs.iter()) {
                assert_eq!(a, b);
            }
        }
    }
}
