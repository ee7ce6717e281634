// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating a [`Topology`].

mod validate_tree;

use crate::{Error, Topology};

pub(crate) struct TopologyValidator<'a> {
    topology: &'a Topology,
}

impl Topology {
    /// Checks that the enabled lines form a spanning tree.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let validator = TopologyValidator { topology: self };

        validator.validate_connected_graph()?;
        validator.validate_acyclicity()?;

        Ok(())
    }
}
