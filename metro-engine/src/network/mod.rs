//! The station registry and the graphs built over it.
//!
//! `Network` is the insertion-ordered weighted graph; `dataset` holds the
//! fixed line-segment table and the one-time population routine; `time`
//! derives the travel-time graph used by minimum-time queries.

mod dataset;
mod registry;
mod time;

pub use dataset::{DatasetError, LineSegment, build_network, delhi_metro};
pub use registry::Network;
pub use time::{TimingConfig, travel_time_graph};
