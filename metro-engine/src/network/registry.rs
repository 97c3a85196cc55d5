//! The station registry: an insertion-ordered, undirected weighted graph.
//!
//! Vertices keep their insertion order (dense indices plus a key lookup),
//! so every iteration, and therefore every tie-break downstream, is
//! deterministic. Edges are symmetric: inserting A-B also inserts B-A with
//! the same weight.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{EngineError, StationId};

/// The transit network: station records and the weighted adjacency
/// relation between them.
///
/// Built once at startup and treated as immutable afterwards; queries are
/// pure reads, so a built `Network` is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<StationId>,
    index: HashMap<StationId, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of station records.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Insert a station record if absent. Idempotent.
    ///
    /// Returns the record's dense index either way.
    pub fn add_station(&mut self, id: StationId) -> usize {
        if let Some(&existing) = self.index.get(&id) {
            return existing;
        }
        let idx = self.stations.len();
        self.index.insert(id.clone(), idx);
        self.stations.push(id);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Insert a symmetric edge between two known stations.
    ///
    /// Fails if either endpoint is absent. Re-inserting an existing pair
    /// overwrites the weight rather than adding a parallel edge. A
    /// self-edge request is ignored.
    pub fn add_edge(&mut self, a: &StationId, b: &StationId, weight: f64) -> Result<(), EngineError> {
        let ia = self.index_of(a).ok_or_else(|| EngineError::unknown_station(a))?;
        let ib = self.index_of(b).ok_or_else(|| EngineError::unknown_station(b))?;
        debug_assert!(weight.is_finite() && weight >= 0.0);

        if ia == ib {
            debug!(station = %a, "ignoring self-edge");
            return Ok(());
        }

        Self::link(&mut self.adjacency, ia, ib, weight);
        Self::link(&mut self.adjacency, ib, ia, weight);
        Ok(())
    }

    fn link(adjacency: &mut [Vec<(usize, f64)>], from: usize, to: usize, weight: f64) {
        if let Some(entry) = adjacency[from].iter_mut().find(|(n, _)| *n == to) {
            entry.1 = weight;
        } else {
            adjacency[from].push((to, weight));
        }
    }

    /// Pure lookup: is this station record present?
    pub fn contains(&self, id: &StationId) -> bool {
        self.index.contains_key(id)
    }

    /// The neighbors of a station as (record, weight) pairs, in edge
    /// insertion order. Fails if the station is absent.
    pub fn neighbors(&self, id: &StationId) -> Result<Vec<(StationId, f64)>, EngineError> {
        let idx = self.index_of(id).ok_or_else(|| EngineError::unknown_station(id))?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&(n, w)| (self.stations[n].clone(), w))
            .collect())
    }

    /// All station records, in insertion order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Dense index of a station record, if present.
    pub fn index_of(&self, id: &StationId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The station record at a dense index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds; indices come from
    /// [`Network::index_of`] or iteration and are always valid for the
    /// network that produced them.
    pub fn station_at(&self, idx: usize) -> &StationId {
        &self.stations[idx]
    }

    /// Neighbor list at a dense index, as (index, weight) pairs.
    pub fn neighbors_at(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }

    /// Dense indices of every record sharing the given label, in insertion
    /// order. Empty if the label is unknown.
    pub fn indices_with_label(&self, label: &str) -> Vec<usize> {
        self.stations
            .iter()
            .enumerate()
            .filter(|(_, s)| s.label() == label)
            .map(|(i, _)| i)
            .collect()
    }

    /// The full adjacency relation, for diagnostic display: each station in
    /// insertion order with its (neighbor, weight) pairs.
    pub fn adjacency(&self) -> Vec<(StationId, Vec<(StationId, f64)>)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let neighbors = self.adjacency[i]
                    .iter()
                    .map(|&(n, w)| (self.stations[n].clone(), w))
                    .collect();
                (s.clone(), neighbors)
            })
            .collect()
    }

    /// Produce a new network with the same vertex set and edge topology but
    /// with every weight recomputed by `f`, which receives both endpoint
    /// records and the current weight.
    ///
    /// This is a pure transform: `self` is not mutated.
    pub fn map_weights(&self, f: impl Fn(&StationId, &StationId, f64) -> f64) -> Network {
        let adjacency = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(i, nbrs)| {
                nbrs.iter()
                    .map(|&(n, w)| (n, f(&self.stations[i], &self.stations[n], w)))
                    .collect()
            })
            .collect();

        Network {
            stations: self.stations.clone(),
            index: self.index.clone(),
            adjacency,
        }
    }
}
