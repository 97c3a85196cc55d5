//! Route types.
//!
//! A `Route` is the raw solver output: the ordered station records visited
//! plus the total weight under whichever graph produced it. An
//! `AnnotatedRoute` is the read-only projection handed to the presentation
//! layer, with interchanges counted and same-label hops collapsed.

use std::fmt;

use serde::Serialize;

use super::StationId;

/// A raw solver route: ordered station records from source to destination
/// inclusive, plus the total weight (distance or time, depending on which
/// graph was solved).
///
/// Adjacent entries always correspond to an edge of the graph that produced
/// the route. An unreachable destination yields the empty route with weight
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stations: Vec<StationId>,
    total_weight: f64,
}

impl Route {
    /// Create a route from an ordered station sequence and its total weight.
    pub fn new(stations: Vec<StationId>, total_weight: f64) -> Self {
        Self {
            stations,
            total_weight,
        }
    }

    /// The well-defined "no path" result: no stations, weight zero.
    pub fn empty() -> Self {
        Self {
            stations: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Returns true if this route is the "no path" result.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The ordered station records, source first.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Total weight of the route under the graph that produced it.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The source record, if the route is non-empty.
    pub fn source(&self) -> Option<&StationId> {
        self.stations.first()
    }

    /// The destination record, if the route is non-empty.
    pub fn destination(&self) -> Option<&StationId> {
        self.stations.last()
    }
}

/// An interchange-annotated route, ready for display.
///
/// `stops` is the full ordered path with same-label interchange hops
/// collapsed into a single entry, so every physical station appears exactly
/// once. The interchange count is one per line-code transition in the
/// underlying raw route and does not depend on the collapse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRoute {
    stops: Vec<StationId>,
    interchanges: usize,
    total_weight: f64,
}

impl AnnotatedRoute {
    /// Create an annotated route. Prefer [`crate::planner::annotate`] over
    /// constructing one by hand.
    pub fn new(stops: Vec<StationId>, interchanges: usize, total_weight: f64) -> Self {
        Self {
            stops,
            interchanges,
            total_weight,
        }
    }

    /// The ordered stops, one entry per physical station.
    pub fn stops(&self) -> &[StationId] {
        &self.stops
    }

    /// Number of line interchanges along the route.
    pub fn interchanges(&self) -> usize {
        self.interchanges
    }

    /// Total weight, carried through unchanged from the raw route.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The source stop, if the route is non-empty.
    pub fn source(&self) -> Option<&StationId> {
        self.stops.first()
    }

    /// The destination stop, if the route is non-empty.
    pub fn destination(&self) -> Option<&StationId> {
        self.stops.last()
    }

    /// Returns true if this annotates the "no path" result.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl fmt::Display for AnnotatedRoute {
    /// Formats the route block the way the original metro display did.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(source) = self.source() else {
            return writeln!(f, "No route.");
        };
        // Non-empty, so destination exists too.
        let destination = self.stops.last().unwrap_or(source);

        writeln!(f, "SOURCE STATION : {}", source.label())?;
        writeln!(f, "DESTINATION STATION : {}", destination.label())?;
        writeln!(f, "NUMBER OF INTERCHANGES : {}", self.interchanges)?;
        writeln!(f, "~~~~~~~~~~~~~")?;

        if self.stops.len() == 1 {
            writeln!(f, "START  ==>  {}   ==>    END", source.label())?;
        } else {
            writeln!(f, "START  ==>  {}", source.label())?;
            for stop in &self.stops[1..self.stops.len() - 1] {
                writeln!(f, "{}", stop.label())?;
            }
            writeln!(f, "{}   ==>    END", destination.label())?;
        }

        writeln!(f, "~~~~~~~~~~~~~")?;
        writeln!(f, "Distance/Time: {}", self.total_weight)
    }
}
