// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the trait that needs to be implemented by types that
//! represent a line of the network.

/**
This trait can be implemented by the type that represents a line, so that a
[`Topology`][crate::Topology] can be created directly from a line table with
[`from_lines`][crate::Topology::from_lines].

<details>
<summary>Example implementation for a row of a line table:</summary>

```
use radial_grid_topology::Line;

struct LineRow {
    id: u64,
    from_node: u64,
    to_node: u64,
    to_status: i8,
}

impl Line for LineRow {
    fn edge_id(&self) -> u64 {
        self.id
    }

    fn from_vertex(&self) -> u64 {
        self.from_node
    }

    fn to_vertex(&self) -> u64 {
        self.to_node
    }

    fn is_enabled(&self) -> bool {
        self.to_status != 0
    }
}
```

</details>
*/
pub trait Line {
    /// Returns the edge id of the line.
    fn edge_id(&self) -> u64;
    /// Returns the id of the vertex at one end of the line.
    fn from_vertex(&self) -> u64;
    /// Returns the id of the vertex at the other end of the line.
    fn to_vertex(&self) -> u64;
    /// Returns true if the line is in service.
    fn is_enabled(&self) -> bool;
}
