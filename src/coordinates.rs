use std::fmt;

/// A cell position inside a grid.
///
/// Every topology addresses its cells with the same two component coordinate.
/// Planar families read it as (column, row). The circular family reads `y` as
/// the ring index and `x` as the cell index within that ring, so the meaning
/// of adjacency always comes from the topology's neighbour function, never
/// from coordinate arithmetic done by callers.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub y: u32,
}

impl GridCoordinate {
    pub fn new(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate { x, y }
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(x_y_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Debug for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
