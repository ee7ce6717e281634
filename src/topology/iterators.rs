// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over vertices and lines in a `Topology`.

use petgraph::graph::UnGraph;

use super::{LineRecord, LineState};

/// An iterator over the vertex ids in a `Topology`.
pub struct Vertices<'a> {
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<u64>>,
}

impl Iterator for Vertices<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| n.weight)
    }
}

/// An iterator over the lines in a `Topology`.
pub struct Lines<'a> {
    pub(crate) graph: &'a UnGraph<u64, LineState>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<LineState>>,
}

impl Iterator for Lines<'_> {
    type Item = LineRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| LineRecord {
            edge_id: e.weight.edge_id,
            from_vertex: self.graph[e.source()],
            to_vertex: self.graph[e.target()],
            enabled: e.weight.enabled,
        })
    }
}
