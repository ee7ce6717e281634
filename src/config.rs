// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `Topology`.

/// Configuration options for the `Topology`.
#[derive(Clone, Default, Debug)]
pub struct TopologyConfig {
    /// Whether to allow vertices that are not reachable from the source
    /// vertex over enabled lines.
    ///
    /// Cycles are rejected regardless of this setting.
    pub allow_unconnected_vertices: bool,
}
