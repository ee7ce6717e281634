// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Finding the vertices that lose supply when a line is opened.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::{Error, Topology};

impl Topology {
    /// Returns the ids of the vertices that would be cut off from the source
    /// if the line with the given `edge_id` were opened.
    ///
    /// The result starts with the far endpoint of the line, followed by every
    /// vertex reachable from it without crossing the line, in depth-first
    /// order.  The near endpoint is never part of the result.
    ///
    /// Returns an empty list if the line is disabled, and an error if no line
    /// with the given `edge_id` exists.
    pub fn find_downstream_vertices(&self, edge_id: u64) -> Result<Vec<u64>, Error> {
        let cut = self.edge_index(edge_id)?;
        if !self.graph[cut].enabled {
            tracing::trace!("Edge {edge_id} is disabled, nothing is downstream of it.");
            return Ok(vec![]);
        }

        let downstream = self.downstream_side(cut)?;
        tracing::trace!(
            "{} vertices are downstream of edge {edge_id}.",
            downstream.len()
        );

        Ok(downstream.into_iter().map(|i| self.graph[i]).collect())
    }

    /// Returns the side of the enabled line `cut` that doesn't contain the
    /// source, after removing `cut`.
    pub(crate) fn downstream_side(&self, cut: EdgeIndex) -> Result<Vec<NodeIndex>, Error> {
        let (u, v) = self.endpoints(cut)?;
        for end in [u, v] {
            let side = self.live_component(end, Some(cut));
            if !side.contains(&self.source) {
                return Ok(side);
            }
        }

        Err(Error::internal(format!(
            "Both sides of edge {} reach the source vertex.",
            self.graph[cut].edge_id
        )))
    }
}
