//! The engine's query surface.
//!
//! `Planner` owns the distance network and derives the time network once
//! at construction; both are immutable afterwards, so every query is a
//! pure read and a built planner can be shared across threads freely.
//!
//! Callers address stations by human label. A label resolves to all of its
//! per-line records, and the solver is given the whole set for both
//! endpoints, so a query never pays a phantom interchange just because a
//! multi-line station was entered on the "wrong" line.

use tracing::debug;

use crate::domain::{AnnotatedRoute, EngineError, StationId};
use crate::network::{DatasetError, Network, TimingConfig, delhi_metro, travel_time_graph};

use super::annotate::annotate;
use super::dijkstra::shortest_path_multi;
use super::reach::any_path;

/// The route query engine.
///
/// Holds the distance network and the derived time network. Built once at
/// startup; all query methods take `&self`.
#[derive(Debug, Clone)]
pub struct Planner {
    distance: Network,
    time: Network,
}

impl Planner {
    /// Create a planner over a populated network, deriving the time graph
    /// with the given timing parameters.
    pub fn new(network: Network, timing: &TimingConfig) -> Self {
        let time = travel_time_graph(&network, timing);
        Self {
            distance: network,
            time,
        }
    }

    /// Build the planner over the fixed Delhi Metro dataset with default
    /// timing. Fails only on a defective dataset, which is fatal at
    /// startup.
    pub fn delhi_metro() -> Result<Self, DatasetError> {
        Ok(Self::new(delhi_metro()?, &TimingConfig::default()))
    }

    /// Is there any path between the two labelled stations?
    ///
    /// Fails if either label is unknown.
    pub fn has_path(&self, from: &str, to: &str) -> Result<bool, EngineError> {
        let sources = self.resolve(from)?;
        let targets = self.resolve(to)?;
        Ok(any_path(&self.distance, &sources, &targets))
    }

    /// Shortest route by physical distance (kilometres).
    ///
    /// Unreachable destinations yield an empty annotated route with weight
    /// zero; unknown labels are an error.
    pub fn shortest_by_distance(&self, from: &str, to: &str) -> Result<AnnotatedRoute, EngineError> {
        self.query(&self.distance, from, to, "distance")
    }

    /// Shortest route by travel time (minutes), including interchange
    /// penalties.
    pub fn shortest_by_time(&self, from: &str, to: &str) -> Result<AnnotatedRoute, EngineError> {
        self.query(&self.time, from, to, "time")
    }

    /// Every station record, in registry insertion order.
    pub fn list_stations(&self) -> &[StationId] {
        self.distance.stations()
    }

    /// The distance adjacency relation, for diagnostic display.
    pub fn adjacency(&self) -> Vec<(StationId, Vec<(StationId, f64)>)> {
        self.distance.adjacency()
    }

    /// The underlying distance network.
    pub fn network(&self) -> &Network {
        &self.distance
    }

    /// The derived travel-time network.
    pub fn time_network(&self) -> &Network {
        &self.time
    }

    fn query(
        &self,
        graph: &Network,
        from: &str,
        to: &str,
        metric: &'static str,
    ) -> Result<AnnotatedRoute, EngineError> {
        let sources = self.resolve(from)?;
        let targets = self.resolve(to)?;
        let route = shortest_path_multi(graph, &sources, &targets);
        let annotated = annotate(&route);

        debug!(
            from,
            to,
            metric,
            weight = annotated.total_weight(),
            interchanges = annotated.interchanges(),
            reachable = !annotated.is_empty(),
            "route query answered"
        );
        Ok(annotated)
    }

    /// All record indices for a label. Record sets for the two graphs are
    /// identical, so resolution always happens against the distance
    /// network.
    fn resolve(&self, label: &str) -> Result<Vec<usize>, EngineError> {
        let indices = self.distance.indices_with_label(label);
        if indices.is_empty() {
            return Err(EngineError::unknown_station(label));
        }
        Ok(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineCode;
    use crate::network::{LineSegment, build_network};

    fn planner() -> Planner {
        Planner::delhi_metro().unwrap()
    }

    #[test]
    fn shortest_by_distance_crosses_lines() {
        let route = planner()
            .shortest_by_distance("Yamuna Bank", "New Delhi")
            .unwrap();

        // Yamuna Bank -6- Rajiv Chowk (interchange) -1- New Delhi.
        assert_eq!(route.total_weight(), 7.0);
        assert_eq!(route.interchanges(), 1);
        let labels: Vec<&str> = route.stops().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Yamuna Bank", "Rajiv Chowk", "New Delhi"]);
    }

    #[test]
    fn shortest_by_time_adds_interchange_penalty() {
        let route = planner()
            .shortest_by_time("Yamuna Bank", "New Delhi")
            .unwrap();

        // 7 km at 40 km/h = 10.5 minutes, plus one 2-minute interchange.
        assert_eq!(route.total_weight(), 12.5);
        assert_eq!(route.interchanges(), 1);
    }

    #[test]
    fn single_line_route_has_no_interchanges() {
        let route = planner()
            .shortest_by_distance("Huda City Centre", "Vishwavidyalaya")
            .unwrap();

        assert_eq!(route.total_weight(), 36.0);
        assert_eq!(route.interchanges(), 0);
        assert_eq!(route.stops().len(), 7);
    }

    #[test]
    fn multi_line_source_starts_on_cheapest_line() {
        // New Delhi is on Yellow and Orange; Shivaji Stadium is Orange
        // only. The query must not pay an interchange for starting on
        // Yellow.
        let route = planner()
            .shortest_by_distance("New Delhi", "Shivaji Stadium")
            .unwrap();

        assert_eq!(route.total_weight(), 2.0);
        assert_eq!(route.interchanges(), 0);
        assert_eq!(route.source().unwrap().line(), LineCode::parse("O").unwrap());
    }

    #[test]
    fn source_equals_destination() {
        let route = planner().shortest_by_distance("Saket", "Saket").unwrap();
        assert_eq!(route.stops().len(), 1);
        assert_eq!(route.total_weight(), 0.0);
        assert_eq!(route.interchanges(), 0);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let planner = planner();
        assert_eq!(
            planner.shortest_by_distance("Narnia", "Saket").unwrap_err(),
            EngineError::unknown_station("Narnia")
        );
        assert!(planner.has_path("Saket", "Narnia").is_err());
    }

    #[test]
    fn has_path_on_connected_network() {
        let planner = planner();
        assert!(planner.has_path("Vaishali", "IGI Airport").unwrap());
        assert!(planner.has_path("IGI Airport", "Vaishali").unwrap());
    }

    #[test]
    fn list_stations_is_in_insertion_order() {
        let planner = planner();
        let stations = planner.list_stations();
        assert_eq!(stations.len(), 24);
        assert_eq!(stations[0].label(), "Noida Sector 62");
        assert_eq!(stations[0].line(), LineCode::parse("B").unwrap());
    }

    #[test]
    fn adjacency_covers_every_station() {
        let planner = planner();
        let adjacency = planner.adjacency();
        assert_eq!(adjacency.len(), planner.list_stations().len());
        for (_, neighbors) in &adjacency {
            assert!(!neighbors.is_empty());
        }
    }

    const TWO_ISLANDS: &[LineSegment] = &[
        LineSegment {
            line: "B",
            stations: &["A", "C"],
            hops_km: &[1.0],
        },
        LineSegment {
            line: "Y",
            stations: &["X", "Z"],
            hops_km: &[1.0],
        },
    ];

    #[test]
    fn disjoint_subgraphs_yield_empty_route_and_no_path() {
        let planner = Planner::new(build_network(TWO_ISLANDS).unwrap(), &TimingConfig::default());

        assert!(!planner.has_path("A", "X").unwrap());
        let route = planner.shortest_by_distance("A", "X").unwrap();
        assert!(route.is_empty());
        assert_eq!(route.total_weight(), 0.0);
    }

    const TWO_LINE_SCENARIO: &[LineSegment] = &[
        LineSegment {
            line: "L1",
            stations: &["P", "Q"],
            hops_km: &[2.0],
        },
        LineSegment {
            line: "L2",
            stations: &["Q", "R"],
            hops_km: &[3.0],
        },
    ];

    #[test]
    fn two_line_scenario() {
        let planner = Planner::new(
            build_network(TWO_LINE_SCENARIO).unwrap(),
            &TimingConfig::default(),
        );

        let route = planner.shortest_by_distance("P", "R").unwrap();
        assert_eq!(route.total_weight(), 5.0);
        assert_eq!(route.interchanges(), 1);
        let labels: Vec<&str> = route.stops().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["P", "Q", "R"]);
    }

    /// Two routes with equal distance, one requiring an interchange: the
    /// time query must prefer the interchange-free one.
    const PARALLEL_ROUTES: &[LineSegment] = &[
        LineSegment {
            line: "B",
            stations: &["A", "C"],
            hops_km: &[4.0],
        },
        LineSegment {
            line: "B",
            stations: &["A", "M"],
            hops_km: &[2.0],
        },
        LineSegment {
            line: "Y",
            stations: &["M", "C"],
            hops_km: &[2.0],
        },
    ];

    #[test]
    fn time_query_avoids_equal_length_interchange_route() {
        let planner = Planner::new(
            build_network(PARALLEL_ROUTES).unwrap(),
            &TimingConfig::default(),
        );

        let route = planner.shortest_by_time("A", "C").unwrap();
        assert_eq!(route.interchanges(), 0);
        assert_eq!(route.total_weight(), 6.0);
    }
}
