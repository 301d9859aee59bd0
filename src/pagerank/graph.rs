//! Directed link graph loaded from a delimited edge file.
//!
//! Node ids are zero-based and bounded by a node count fixed at load time;
//! the adjacency list is allocated once and never resized. A node with no
//! outbound edges is dangling — its rank mass is redistributed by the
//! engine, not lost.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::Result;

/// A fixed-size directed adjacency list.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    adjacency: Vec<Vec<u32>>,
}

impl LinkGraph {
    /// Create an empty graph with the given node count.
    pub fn with_node_count(node_count: usize) -> Self {
        LinkGraph {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Load a graph from a delimited edge file.
    ///
    /// The first line is a header and is discarded; every following line is
    /// `<from>,<to>`. Malformed lines and out-of-range node ids are logged
    /// and skipped.
    pub fn load<P: AsRef<Path>>(path: P, node_count: usize) -> Result<LinkGraph> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut graph = LinkGraph::with_node_count(node_count);

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line_no == 0 || line.trim().is_empty() {
                continue;
            }
            match parse_edge(&line) {
                Some((from, to)) if (from as usize) < node_count && (to as usize) < node_count => {
                    graph.add_edge(from, to);
                }
                Some(_) => warn!("line {}: node id out of range, skipped", line_no + 1),
                None => warn!("line {}: malformed edge {line:?}, skipped", line_no + 1),
            }
        }
        Ok(graph)
    }

    /// Add a directed edge. Panics if either endpoint is out of range, so
    /// callers must bounds-check untrusted input first (as [`load`] does).
    ///
    /// [`load`]: LinkGraph::load
    pub fn add_edge(&mut self, from: u32, to: u32) {
        self.adjacency[from as usize].push(to);
    }

    /// Number of nodes, fixed at construction.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outbound neighbors of a node.
    pub fn neighbors(&self, node: u32) -> &[u32] {
        &self.adjacency[node as usize]
    }

    /// Outbound degree of a node.
    pub fn out_degree(&self, node: u32) -> usize {
        self.adjacency[node as usize].len()
    }

    /// Check whether a node has no outbound edges.
    pub fn is_dangling(&self, node: u32) -> bool {
        self.adjacency[node as usize].is_empty()
    }
}

fn parse_edge(line: &str) -> Option<(u32, u32)> {
    let (from, to) = line.split_once(',')?;
    let from = from.trim().parse().ok()?;
    let to = to.trim().parse().ok()?;
    Some((from, to))
}
