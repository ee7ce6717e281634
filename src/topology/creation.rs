// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`Topology`] instances from given vertices and lines.

use std::collections::HashSet;

use petgraph::graph::UnGraph;

use crate::{Error, Line, TopologyConfig};

use super::{EdgeIndexMap, LineState, Topology, VertexIndexMap};

/// `Topology` instantiation.
impl Topology {
    /// Creates a new [`Topology`] from parallel collections of edge ids,
    /// vertex id pairs and enabled flags.
    ///
    /// The i-th edge id belongs to the i-th vertex id pair and the i-th
    /// enabled flag.
    ///
    /// Returns an error if the input is malformed, or if the enabled edges
    /// don't form a spanning tree over all vertices.
    pub fn try_new<V, L, P, S>(
        vertex_ids: V,
        edge_ids: L,
        edge_vertex_id_pairs: P,
        edge_enabled: S,
        source_vertex_id: u64,
        config: TopologyConfig,
    ) -> Result<Self, Error>
    where
        V: IntoIterator<Item = u64>,
        L: IntoIterator<Item = u64>,
        P: IntoIterator<Item = (u64, u64)>,
        S: IntoIterator<Item = bool>,
    {
        let edge_ids = edge_ids.into_iter().collect::<Vec<_>>();
        let (mut graph, vertex_indices) = Self::create_graph(vertex_ids, &edge_ids)?;

        let pairs = edge_vertex_id_pairs.into_iter().collect::<Vec<_>>();
        if pairs.len() != edge_ids.len() {
            return Err(Error::length_mismatch(format!(
                "Found {} edge IDs but {} vertex ID pairs.",
                edge_ids.len(),
                pairs.len()
            )));
        }
        let enabled = edge_enabled.into_iter().collect::<Vec<_>>();
        if enabled.len() != edge_ids.len() {
            return Err(Error::length_mismatch(format!(
                "Found {} edge IDs but {} enabled flags.",
                edge_ids.len(),
                enabled.len()
            )));
        }

        let edge_indices = Self::add_lines(
            &mut graph,
            &vertex_indices,
            edge_ids.into_iter().zip(pairs).zip(enabled),
        )?;

        let Some(&source) = vertex_indices.get(&source_vertex_id) else {
            return Err(Error::unknown_vertex(format!(
                "Source vertex with id {source_vertex_id} not found."
            )));
        };

        let topology = Self {
            graph,
            vertex_indices,
            edge_indices,
            source,
            config,
        };
        topology.validate()?;

        tracing::debug!(
            "Created topology with {} vertices and {} lines, {} of them enabled.",
            topology.graph.node_count(),
            topology.graph.edge_count(),
            topology.lines().filter(|l| l.enabled).count()
        );

        Ok(topology)
    }

    /// Creates a new [`Topology`] from the given vertex ids and lines.
    ///
    /// Returns an error if the graph is invalid.
    pub fn from_lines<V, I, L>(
        vertex_ids: V,
        lines: I,
        source_vertex_id: u64,
        config: TopologyConfig,
    ) -> Result<Self, Error>
    where
        V: IntoIterator<Item = u64>,
        I: IntoIterator<Item = L>,
        L: Line,
    {
        let mut edge_ids = vec![];
        let mut pairs = vec![];
        let mut enabled = vec![];
        for line in lines {
            edge_ids.push(line.edge_id());
            pairs.push((line.from_vertex(), line.to_vertex()));
            enabled.push(line.is_enabled());
        }
        Self::try_new(
            vertex_ids,
            edge_ids,
            pairs,
            enabled,
            source_vertex_id,
            config,
        )
    }

    fn create_graph(
        vertex_ids: impl IntoIterator<Item = u64>,
        edge_ids: &[u64],
    ) -> Result<(UnGraph<u64, LineState>, VertexIndexMap), Error> {
        let mut graph = UnGraph::default();
        let mut indices = VertexIndexMap::new();

        for vid in vertex_ids {
            if indices.contains_key(&vid) {
                return Err(Error::duplicate_id(format!(
                    "Duplicate vertex ID found: {vid}"
                )));
            }
            let idx = graph.add_node(vid);
            indices.insert(vid, idx);
        }

        let mut seen = HashSet::new();
        for &eid in edge_ids {
            if !seen.insert(eid) {
                return Err(Error::duplicate_id(format!("Duplicate edge ID found: {eid}")));
            }
            if indices.contains_key(&eid) {
                return Err(Error::duplicate_id(format!(
                    "ID {eid} is used for both a vertex and an edge."
                )));
            }
        }

        Ok((graph, indices))
    }

    fn add_lines(
        graph: &mut UnGraph<u64, LineState>,
        vertex_indices: &VertexIndexMap,
        lines: impl IntoIterator<Item = ((u64, (u64, u64)), bool)>,
    ) -> Result<EdgeIndexMap, Error> {
        let mut edge_indices = EdgeIndexMap::new();

        for ((eid, (uid, vid)), enabled) in lines {
            if uid == vid {
                return Err(Error::unknown_vertex(format!(
                    "Edge {eid}:({uid}, {vid}) Can't connect a vertex to itself."
                )));
            }
            for id in [uid, vid] {
                if !vertex_indices.contains_key(&id) {
                    return Err(Error::unknown_vertex(format!(
                        "Edge {eid}:({uid}, {vid}) Can't find a vertex with ID {id}"
                    )));
                }
            }

            let idx = graph.add_edge(
                vertex_indices[&uid],
                vertex_indices[&vid],
                LineState {
                    edge_id: eid,
                    enabled,
                },
            );
            edge_indices.insert(eid, idx);
        }

        Ok(edge_indices)
    }
}
