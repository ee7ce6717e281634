// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Finding tie lines that can restore supply after a line is opened.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::{Error, Topology};

impl Topology {
    /// Returns the ids of the disabled lines that, if enabled after opening
    /// the line with the given `edge_id`, would turn the enabled lines into a
    /// spanning tree again.
    ///
    /// These are exactly the disabled lines with one endpoint on each side of
    /// the opened line.  They are returned in the order they were given, and
    /// an empty list means no alternative exists.
    ///
    /// Returns an error if no line with the given `edge_id` exists, or if
    /// that line is already disabled.
    pub fn find_alternative_edges(&self, edge_id: u64) -> Result<Vec<u64>, Error> {
        let cut = self.edge_index(edge_id)?;
        if !self.graph[cut].enabled {
            return Err(Error::edge_already_disabled(format!(
                "Edge {edge_id} is already disabled."
            )));
        }

        let (u, v) = self.endpoints(cut)?;
        let near = self
            .live_component(u, Some(cut))
            .into_iter()
            .collect::<HashSet<_>>();
        let far = self
            .live_component(v, Some(cut))
            .into_iter()
            .collect::<HashSet<_>>();

        let bridges = |a: NodeIndex, b: NodeIndex| near.contains(&a) && far.contains(&b);
        let alternatives = self
            .graph
            .edge_references()
            .filter(|e| e.id() != cut && !e.weight().enabled)
            .filter(|e| bridges(e.source(), e.target()) || bridges(e.target(), e.source()))
            .map(|e| e.weight().edge_id)
            .collect::<Vec<_>>();

        tracing::trace!(
            "Found {} alternatives for edge {edge_id}: {:?}",
            alternatives.len(),
            alternatives
        );

        Ok(alternatives)
    }
}
