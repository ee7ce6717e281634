// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating the connectedness and acyclicity of a
//! [`Topology`].

use std::collections::BTreeSet;

use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::Error;

use super::TopologyValidator;

impl TopologyValidator<'_> {
    /// Validates that all vertices are connected into a single tree.
    ///
    /// It does so by ensuring that all the vertices are reachable by
    /// traversing the enabled lines from the source vertex.
    pub(super) fn validate_connected_graph(&self) -> Result<(), Error> {
        let graph = &self.topology.graph;
        let visited = self
            .topology
            .live_component(self.topology.source, None)
            .into_iter()
            .collect::<BTreeSet<_>>();

        let unvisited = graph
            .node_indices()
            .filter(|index| !visited.contains(index))
            .map(|index| graph[index])
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            return Ok(());
        }

        if !self.topology.config.allow_unconnected_vertices {
            return Err(Error::not_connected(format!(
                "Vertices {:?} are not connected to the source.",
                unvisited
            )));
        }

        tracing::warn!(
            "Vertices {:?} are not connected to source vertex {}.",
            unvisited,
            graph[self.topology.source]
        );
        Ok(())
    }

    /// Validates that there are no cycles among the enabled lines.
    ///
    /// Lines are merged one by one into a union-find forest; the first line
    /// whose endpoints are already joined closes a cycle and is reported.
    pub(super) fn validate_acyclicity(&self) -> Result<(), Error> {
        let graph = &self.topology.graph;
        let mut forest = UnionFind::<usize>::new(graph.node_count());

        for edge in graph.edge_references().filter(|e| e.weight().enabled) {
            if !forest.union(edge.source().index(), edge.target().index()) {
                return Err(Error::cycle(format!(
                    "Cycle detected: edge {} closes a loop between vertices {} and {}.",
                    edge.weight().edge_id,
                    graph[edge.source()],
                    graph[edge.target()]
                )));
            }
        }

        Ok(())
    }
}
