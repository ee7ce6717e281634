// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains methods that help with graph traversal.

use petgraph::graph::{EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::{Dfs, EdgeFiltered, EdgeRef};

use crate::Error;

use super::{LineState, Topology};

/// Traversal methods.
impl Topology {
    /// Returns the vertices reachable from `from` over enabled lines, in
    /// depth-first pre-order, starting with `from` itself.
    ///
    /// When `cut` is given, that line is treated as if it were disabled.
    pub(crate) fn live_component(&self, from: NodeIndex, cut: Option<EdgeIndex>) -> Vec<NodeIndex> {
        let live = EdgeFiltered::from_fn(&self.graph, |edge: EdgeReference<'_, LineState>| {
            edge.weight().enabled && Some(edge.id()) != cut
        });

        let mut dfs = Dfs::new(&live, from);
        let mut found = vec![];
        while let Some(index) = dfs.next(&live) {
            found.push(index);
        }
        found
    }

    /// Returns the edge index for the given `edge_id`.
    pub(crate) fn edge_index(&self, edge_id: u64) -> Result<EdgeIndex, Error> {
        self.edge_indices
            .get(&edge_id)
            .copied()
            .ok_or_else(|| Error::unknown_edge(format!("Edge with id {} not found.", edge_id)))
    }

    /// Returns the two vertex indices the given line connects, in input order.
    pub(crate) fn endpoints(&self, index: EdgeIndex) -> Result<(NodeIndex, NodeIndex), Error> {
        self.graph.edge_endpoints(index).ok_or_else(|| {
            Error::internal(format!("Edge index {} not found.", index.index()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::test_utils::TopologyBuilder;

    #[test]
    fn test_live_component() -> Result<(), Error> {
        let mut builder = TopologyBuilder::new();
        let source = builder.vertex();
        let a = builder.vertex();
        let b = builder.vertex();
        let c = builder.vertex();
        let ab = builder.line(source, a).line(a, b).last_line();
        builder.line(source, c).open_line(b, c);
        let topology = builder.build(source)?;

        let ids = |indices: Vec<NodeIndex>| {
            let mut ids = indices
                .into_iter()
                .map(|i| topology.graph[i])
                .collect::<Vec<_>>();
            ids.sort();
            ids
        };

        let from_source = topology.live_component(topology.source, None);
        assert_eq!(from_source.first(), Some(&topology.source));
        assert_eq!(ids(from_source), vec![0, 1, 2, 3]);

        let cut = topology.edge_index(ab)?;
        assert_eq!(ids(topology.live_component(topology.source, Some(cut))), vec![0, 1, 3]);
        let b_index = topology.vertex_indices[&b];
        assert_eq!(ids(topology.live_component(b_index, Some(cut))), vec![2]);

        Ok(())
    }

    #[test]
    fn test_edge_index() -> Result<(), Error> {
        let mut builder = TopologyBuilder::new();
        let source = builder.vertex();
        let a = builder.vertex();
        let line = builder.line(source, a).last_line();
        let topology = builder.build(source)?;

        let index = topology.edge_index(line)?;
        let (u, v) = topology.endpoints(index)?;
        assert_eq!((topology.graph[u], topology.graph[v]), (source, a));

        assert_eq!(
            topology.edge_index(99),
            Err(Error::unknown_edge("Edge with id 99 not found."))
        );

        Ok(())
    }
}
