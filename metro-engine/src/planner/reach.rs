//! Reachability pre-filter.
//!
//! A plain BFS answering "is there any path at all?" before the solver is
//! asked for a shortest one. The solver stays well-defined without this
//! check (unreachable yields an empty route), so the filter exists only to
//! let callers report "no path" without inspecting route contents.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::domain::{EngineError, StationId};
use crate::network::Network;

/// Breadth-first reachability test between two station records.
///
/// Fails if either record is absent from the network.
pub fn has_path(network: &Network, from: &StationId, to: &StationId) -> Result<bool, EngineError> {
    let source = network
        .index_of(from)
        .ok_or_else(|| EngineError::unknown_station(from))?;
    let target = network
        .index_of(to)
        .ok_or_else(|| EngineError::unknown_station(to))?;
    Ok(any_path(network, &[source], &[target]))
}

/// BFS from every source index, returning true the moment any target index
/// is reached.
pub(crate) fn any_path(network: &Network, sources: &[usize], targets: &[usize]) -> bool {
    let target_set: HashSet<usize> = targets.iter().copied().collect();

    let mut visited: HashSet<usize> = HashSet::new();
    let mut frontier: VecDeque<usize> = VecDeque::new();
    for &source in sources {
        if visited.insert(source) {
            frontier.push_back(source);
        }
    }

    while let Some(current) = frontier.pop_front() {
        if target_set.contains(&current) {
            return true;
        }
        for &(neighbor, _) in network.neighbors_at(current) {
            if visited.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    trace!(
        visited = visited.len(),
        "reachability search exhausted without hitting target"
    );
    false
}
