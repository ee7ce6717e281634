// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving vertices and lines from a [`Topology`].

use crate::iterators::{Lines, Vertices};
use crate::{Error, Line, Topology};

/// A snapshot of a line in a [`Topology`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRecord {
    pub edge_id: u64,
    pub from_vertex: u64,
    pub to_vertex: u64,
    pub enabled: bool,
}

impl Line for LineRecord {
    fn edge_id(&self) -> u64 {
        self.edge_id
    }

    fn from_vertex(&self) -> u64 {
        self.from_vertex
    }

    fn to_vertex(&self) -> u64 {
        self.to_vertex
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Vertex and line retrieval.
impl Topology {
    /// Returns the id of the source vertex.
    pub fn source_vertex_id(&self) -> u64 {
        self.graph[self.source]
    }

    /// Returns true if a vertex with the given `vertex_id` exists.
    pub fn contains_vertex(&self, vertex_id: u64) -> bool {
        self.vertex_indices.contains_key(&vertex_id)
    }

    /// Returns an iterator over the vertex ids, in the order they were given.
    pub fn vertices(&self) -> Vertices {
        Vertices {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the lines, in the order they were given.
    pub fn lines(&self) -> Lines {
        Lines {
            graph: &self.graph,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns the line with the given `edge_id`, if it exists.
    pub fn line(&self, edge_id: u64) -> Result<LineRecord, Error> {
        let index = self.edge_index(edge_id)?;
        let (u, v) = self.endpoints(index)?;
        Ok(LineRecord {
            edge_id,
            from_vertex: self.graph[u],
            to_vertex: self.graph[v],
            enabled: self.graph[index].enabled,
        })
    }
}
