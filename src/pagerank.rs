//! PageRank over a directed link/citation graph.
//!
//! The graph loads from a two-column edge file into a fixed-size adjacency
//! list; the engine then runs power iteration with damping and uniform
//! redistribution of dangling-node mass until the L1 difference between
//! successive score vectors drops to the configured tolerance.

pub mod engine;
pub mod graph;

pub use engine::{PageRankConfig, PageRankEngine};
pub use graph::LinkGraph;
