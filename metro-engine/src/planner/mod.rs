//! Route planning over the station registry.
//!
//! `reach` answers the cheap "is there any path?" pre-filter, `dijkstra`
//! computes shortest routes under either weight model, `annotate` turns a
//! raw route into the displayed projection, and `Planner` ties the pieces
//! together behind the label-addressed query surface.

mod annotate;
mod dijkstra;
mod facade;
mod reach;

pub use annotate::annotate;
pub use dijkstra::{shortest_path, shortest_path_multi};
pub use facade::Planner;
pub use reach::has_path;
