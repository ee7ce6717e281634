// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `topology` module.
//!
//! - the `TopologyBuilder`, which can declaratively build radial networks for
//!   use in tests.
//! - the `feeder` fixture, a multi-branch network with tie lines.

use crate::{Error, Topology, TopologyConfig};

/// A builder for creating topologies easily, for use in tests.
///
/// Vertices and lines draw their ids from the same counter, so the two id
/// spaces never overlap.
pub(super) struct TopologyBuilder {
    vertex_ids: Vec<u64>,
    edge_ids: Vec<u64>,
    pairs: Vec<(u64, u64)>,
    enabled: Vec<bool>,
    next_id: u64,
}

impl TopologyBuilder {
    /// Creates a new `TopologyBuilder`.
    pub(super) fn new() -> Self {
        TopologyBuilder {
            vertex_ids: Vec::new(),
            edge_ids: Vec::new(),
            pairs: Vec::new(),
            enabled: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds a vertex and returns its id.
    pub(super) fn vertex(&mut self) -> u64 {
        let id = self.next_id();
        self.vertex_ids.push(id);
        id
    }

    fn add_line(&mut self, from: u64, to: u64, enabled: bool) -> &mut Self {
        let id = self.next_id();
        self.edge_ids.push(id);
        self.pairs.push((from, to));
        self.enabled.push(enabled);
        self
    }

    /// Adds an enabled line between two vertices.
    pub(super) fn line(&mut self, from: u64, to: u64) -> &mut Self {
        self.add_line(from, to, true)
    }

    /// Adds a disabled line between two vertices.
    pub(super) fn open_line(&mut self, from: u64, to: u64) -> &mut Self {
        self.add_line(from, to, false)
    }

    /// Returns the id of the most recently added line.
    pub(super) fn last_line(&self) -> u64 {
        self.edge_ids.last().copied().unwrap_or(u64::MAX)
    }

    /// Builds a topology with the default config.
    pub(super) fn build(&self, source: u64) -> Result<Topology, Error> {
        self.build_with(source, TopologyConfig::default())
    }

    /// Builds a topology with the given config.
    pub(super) fn build_with(&self, source: u64, config: TopologyConfig) -> Result<Topology, Error> {
        Topology::try_new(
            self.vertex_ids.clone(),
            self.edge_ids.clone(),
            self.pairs.clone(),
            self.enabled.clone(),
            source,
            config,
        )
    }
}

/// The vertex ids, edge ids, vertex id pairs and enabled flags of a feeder.
pub(super) type Fixture = (Vec<u64>, Vec<u64>, Vec<(u64, u64)>, Vec<bool>);

/// A source with three branches and four tie lines.
///
/// ```text
///            0
///        /   |    \
///      10    11    12        (lines 100, 101, 102)
///     /  \    |      \
///   20    21  22      23     (lines 103, 104, 105, 106)
///   |         |
///   30        31             (lines 107, 108)
///
/// open: 109=(21, 22), 110=(30, 31), 111=(23, 31), 112=(20, 21)
/// ```
pub(super) fn feeder() -> Fixture {
    let vertex_ids = vec![0, 10, 11, 12, 20, 21, 22, 23, 30, 31];
    let lines = [
        (100, (0, 10), true),
        (101, (0, 11), true),
        (102, (0, 12), true),
        (103, (10, 20), true),
        (104, (10, 21), true),
        (105, (11, 22), true),
        (106, (12, 23), true),
        (107, (20, 30), true),
        (108, (22, 31), true),
        (109, (21, 22), false),
        (110, (30, 31), false),
        (111, (23, 31), false),
        (112, (20, 21), false),
    ];
    (
        vertex_ids,
        lines.iter().map(|l| l.0).collect(),
        lines.iter().map(|l| l.1).collect(),
        lines.iter().map(|l| l.2).collect(),
    )
}

/// Builds the `feeder` fixture with vertex `0` as the source.
pub(super) fn feeder_topology() -> Result<Topology, Error> {
    let (vertex_ids, edge_ids, pairs, enabled) = feeder();
    Topology::try_new(vertex_ids, edge_ids, pairs, enabled, 0, TopologyConfig::default())
}
