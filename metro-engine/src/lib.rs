//! Metro route engine.
//!
//! Computes shortest routes through a fixed metro network between two
//! named stations, by minimum distance or minimum travel time, and
//! annotates each route with the line interchanges it requires.

pub mod domain;
pub mod network;
pub mod planner;
