// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Radial Grid Topology

This is a library for representing the lines of a radial electrical
distribution network and the buses they connect as an undirected graph, whose
in-service lines form a spanning tree rooted at a source vertex (usually the
feeding substation).

The tree representation makes it easy to answer two operational questions
about a line outage:

- which part of the network loses power, and
- which currently open tie lines could be closed to restore supply without
  creating a loop.

## Creating a `Topology`

The main struct is [`Topology`], instances of which can be created by passing
the vertex ids, the edge ids, the vertex id pairs of the edges, their enabled
flags and the source vertex id to the [`try_new`][Topology::try_new] method.

Alternatively, types that implement the [`Line`] trait can be passed to
[`from_lines`][Topology::from_lines].

## Validation

Creating a [`Topology`] checks, in this order, that:

- All vertex ids and edge ids are unique, and no id is used for both.
- The edge ids, vertex id pairs and enabled flags have the same length.
- All edges connect two different existing vertices.
- The source vertex exists.
- All vertices are reachable from the source over enabled edges.
- The enabled edges contain no cycles.

If any of the validation steps fail, an [`Error`] is returned, whose
[`kind`][Error::kind] identifies the failed check.

## Queries

- [`find_downstream_vertices`][Topology::find_downstream_vertices]
- [`find_alternative_edges`][Topology::find_alternative_edges]

Queries never modify the topology, so a single instance can be shared
between threads.
*/

mod config;
pub use config::TopologyConfig;

mod topology;
pub use topology::{iterators, LineRecord, Topology};

mod graph_traits;
pub use graph_traits::Line;

mod error;
pub use error::{Error, ErrorKind};
