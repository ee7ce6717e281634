// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the vertices of a radial network and the lines
//! between them.

mod alternatives;
mod creation;
mod downstream;
mod retrieval;
mod validation;

pub mod iterators;
mod traversal;

#[cfg(test)]
mod test_utils;

use crate::TopologyConfig;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use std::collections::HashMap;

pub use retrieval::LineRecord;

/// Vertices stored in the `UnGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `VertexIndexMap` stores the corresponding `NodeIndex` for every vertex id.
pub(crate) type VertexIndexMap = HashMap<u64, NodeIndex>;

/// `EdgeIndexMap` stores the corresponding `EdgeIndex` for every edge id.
pub(crate) type EdgeIndexMap = HashMap<u64, EdgeIndex>;

/// The weight of an edge in the underlying graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LineState {
    pub(crate) edge_id: u64,
    pub(crate) enabled: bool,
}

/// A radial network whose enabled lines form a spanning tree over all its
/// vertices.
#[derive(Clone, Debug)]
pub struct Topology {
    graph: UnGraph<u64, LineState>,
    vertex_indices: VertexIndexMap,
    edge_indices: EdgeIndexMap,
    source: NodeIndex,
    config: TopologyConfig,
}
