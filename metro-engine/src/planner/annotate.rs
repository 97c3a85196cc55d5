//! Interchange annotation.
//!
//! Turns a raw solver route into the projection the presentation layer
//! displays. Each adjacent pair of records with differing line codes counts
//! as one interchange. Same-label hops (the zero-distance edge between a
//! multi-line station's records) are collapsed into a single displayed
//! stop; the count is computed on the raw sequence, so the collapse never
//! changes it.

use crate::domain::{AnnotatedRoute, Route, StationId};

/// Annotate a raw route with its interchange count and collapsed stops.
///
/// The total weight is carried through unchanged. An empty route annotates
/// to an empty result with zero interchanges.
pub fn annotate(route: &Route) -> AnnotatedRoute {
    let interchanges = route
        .stations()
        .windows(2)
        .filter(|pair| pair[0].line() != pair[1].line())
        .count();

    // Keep the first record of each same-label run.
    let mut stops: Vec<StationId> = Vec::with_capacity(route.stations().len());
    for station in route.stations() {
        let duplicate = stops
            .last()
            .is_some_and(|prev| prev.label() == station.label());
        if !duplicate {
            stops.push(station.clone());
        }
    }

    AnnotatedRoute::new(stops, interchanges, route.total_weight())
}
