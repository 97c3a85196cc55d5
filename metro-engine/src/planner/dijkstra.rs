//! Weight-agnostic shortest-path solver.
//!
//! Classic Dijkstra over a `Network`, identical whether the weights are
//! kilometres or minutes. The frontier is keyed by (tentative weight,
//! registry insertion index), so ties resolve in insertion order and every
//! solve is reproducible. The search stops as soon as any destination
//! record is finalized.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use ordered_float::NotNan;
use tracing::{debug, trace};

use crate::domain::{EngineError, Route, StationId};
use crate::network::Network;

/// Shortest path between two station records.
///
/// Fails if either record is absent; an unreachable destination yields the
/// empty route with weight zero.
pub fn shortest_path(
    network: &Network,
    from: &StationId,
    to: &StationId,
) -> Result<Route, EngineError> {
    let source = network
        .index_of(from)
        .ok_or_else(|| EngineError::unknown_station(from))?;
    let target = network
        .index_of(to)
        .ok_or_else(|| EngineError::unknown_station(to))?;
    Ok(shortest_path_multi(network, &[source], &[target]))
}

/// Shortest path from any source index to any target index.
///
/// All sources start at weight zero; the records of a multi-line station
/// are passed together so the solver is free to begin and end on whichever
/// line is cheapest. Returns the empty route if no target is reachable.
pub fn shortest_path_multi(network: &Network, sources: &[usize], targets: &[usize]) -> Route {
    if sources.is_empty() || targets.is_empty() {
        return Route::empty();
    }
    let target_set: HashSet<usize> = targets.iter().copied().collect();

    let mut tentative: Vec<f64> = vec![f64::INFINITY; network.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; network.len()];
    let mut finalized: Vec<bool> = vec![false; network.len()];

    let mut frontier: BinaryHeap<Reverse<(NotNan<f64>, usize)>> = BinaryHeap::new();
    for &source in sources {
        tentative[source] = 0.0;
        frontier.push(Reverse((NotNan::default(), source)));
    }

    let mut reached: Option<usize> = None;
    let mut settled = 0usize;

    while let Some(Reverse((weight, current))) = frontier.pop() {
        if finalized[current] {
            continue; // Stale frontier entry.
        }
        finalized[current] = true;
        settled += 1;

        if target_set.contains(&current) {
            trace!(
                station = %network.station_at(current),
                weight = weight.into_inner(),
                "destination finalized"
            );
            reached = Some(current);
            break;
        }

        for &(neighbor, edge_weight) in network.neighbors_at(current) {
            if finalized[neighbor] {
                continue;
            }
            let candidate = weight.into_inner() + edge_weight;
            if candidate < tentative[neighbor] {
                tentative[neighbor] = candidate;
                predecessor[neighbor] = Some(current);
                if let Ok(key) = NotNan::new(candidate) {
                    frontier.push(Reverse((key, neighbor)));
                }
            }
        }
    }

    let Some(target) = reached else {
        debug!(settled, "destination unreachable, returning empty route");
        return Route::empty();
    };

    let mut stations: Vec<StationId> = Vec::new();
    let mut cursor = Some(target);
    while let Some(idx) = cursor {
        stations.push(network.station_at(idx).clone());
        cursor = predecessor[idx];
    }
    stations.reverse();

    debug!(
        settled,
        hops = stations.len().saturating_sub(1),
        weight = tentative[target],
        "shortest path found"
    );
    Route::new(stations, tentative[target])
}
