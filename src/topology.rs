use smallvec::SmallVec;

use crate::coordinates::GridCoordinate;
use crate::dimensions::Dimensions;
use crate::sides::{Side, SideVec};
use crate::units::{RowIndex, RowsCount};

/// The grid families a maze can be built over.
///
/// A closed set of variants rather than a trait hierarchy: neighbour lookup
/// is a `match` on the tag. Geometry lives here; the two *dynamic* families
/// (weaving and diagonal) additionally constrain their neighbour sets by
/// current wall state, which `Maze` applies on top of this module's static
/// geometry.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Topology {
    /// 4-sided orthogonal cells.
    Square,
    /// Triangles alternating point-up/point-down. 3 sides each.
    Triangular,
    /// 6-sided cells in offset columns, odd columns shifted half a cell down.
    Hexagonal,
    /// Octagons on even parity cells, 4-sided diamonds filling the gaps.
    OctagonSquare,
    /// Square cells that may also carve the 4 diagonals, as long as no two
    /// diagonal passages cross.
    DiagonalSquare,
    /// Square cells whose passages may tunnel under a perpendicular corridor.
    Weaving,
    /// Concentric rings around a single hub cell.
    Circular,
}

impl Topology {
    pub fn name(&self) -> &'static str {
        match *self {
            Topology::Square => "square",
            Topology::Triangular => "triangular",
            Topology::Hexagonal => "hexagonal",
            Topology::OctagonSquare => "octagon-square",
            Topology::DiagonalSquare => "diagonal-square",
            Topology::Weaving => "weaving",
            Topology::Circular => "circular",
        }
    }

    /// Dynamic families grow or lose neighbour candidates while carving, so
    /// algorithms needing a neighbour snapshot taken before generation
    /// (Wilson's, Kruskal's) cannot run on them.
    pub fn is_dynamic(&self) -> bool {
        matches!(*self, Topology::Weaving | Topology::DiagonalSquare)
    }

    pub fn is_planar(&self) -> bool {
        !matches!(*self, Topology::Circular)
    }

    /// The sides this topology defines for a cell, including sides that face
    /// off the grid (those have no neighbour and are where boundary openings
    /// get carved).
    pub fn sides_of(&self, coord: GridCoordinate, dimensions: &Dimensions) -> SideVec {
        match *self {
            Topology::Square | Topology::Weaving => {
                SmallVec::from_slice(&[Side::North, Side::South, Side::East, Side::West])
            }
            Topology::Triangular => {
                let vertical = if points_up(coord) {
                    Side::South
                } else {
                    Side::North
                };
                SmallVec::from_slice(&[Side::East, Side::West, vertical])
            }
            Topology::Hexagonal => SmallVec::from_slice(&[Side::North,
                                                          Side::South,
                                                          Side::NorthEast,
                                                          Side::NorthWest,
                                                          Side::SouthEast,
                                                          Side::SouthWest]),
            Topology::OctagonSquare => {
                if is_octagon(coord) {
                    SmallVec::from_slice(&[Side::North,
                                           Side::South,
                                           Side::East,
                                           Side::West,
                                           Side::NorthEast,
                                           Side::NorthWest,
                                           Side::SouthEast,
                                           Side::SouthWest])
                } else {
                    SmallVec::from_slice(&[Side::North, Side::South, Side::East, Side::West])
                }
            }
            Topology::DiagonalSquare => SmallVec::from_slice(&[Side::North,
                                                               Side::South,
                                                               Side::East,
                                                               Side::West,
                                                               Side::NorthEast,
                                                               Side::NorthWest,
                                                               Side::SouthEast,
                                                               Side::SouthWest]),
            Topology::Circular => {
                let mut sides: SideVec = SmallVec::new();
                let y = coord.y as usize;
                let RowsCount(rings) = dimensions.rows();
                let ring_len = dimensions
                    .row_length(RowIndex(y))
                    .map(|l| l.0)
                    .unwrap_or(0);

                if y > 0 {
                    sides.push(Side::Inward);
                }
                if ring_len > 1 {
                    sides.push(Side::Clockwise);
                    sides.push(Side::CounterClockwise);
                }
                if y + 1 < rings {
                    let next_len = dimensions
                        .row_length(RowIndex(y + 1))
                        .expect("ring inside the grid")
                        .0;
                    let ratio = next_len / ring_len.max(1);
                    for k in 0..ratio {
                        sides.push(Side::Outward(k as u8));
                    }
                } else {
                    // The outer rim: one outward side facing off the grid.
                    sides.push(Side::Outward(0));
                }
                sides
            }
        }
    }

    /// The coordinate one step away through `side`, or None when the side is
    /// not defined for this cell or leaves the grid. Purely geometric: the
    /// dynamic families' state-dependent restrictions are applied by `Maze`.
    pub fn offset(&self,
                  coord: GridCoordinate,
                  side: Side,
                  dimensions: &Dimensions)
                  -> Option<GridCoordinate> {
        match *self {
            Topology::Square | Topology::Weaving => {
                compass_offset(coord, side, false).and_then(|c| in_grid(c, dimensions))
            }
            Topology::Triangular => {
                let allowed = match side {
                    Side::East | Side::West => true,
                    Side::South => points_up(coord),
                    Side::North => !points_up(coord),
                    _ => false,
                };
                if allowed {
                    compass_offset(coord, side, false).and_then(|c| in_grid(c, dimensions))
                } else {
                    None
                }
            }
            Topology::Hexagonal => {
                hexagonal_offset(coord, side).and_then(|c| in_grid(c, dimensions))
            }
            Topology::OctagonSquare => {
                if !is_octagon(coord) && is_diagonal(side) {
                    return None;
                }
                compass_offset(coord, side, true).and_then(|c| in_grid(c, dimensions))
            }
            Topology::DiagonalSquare => {
                compass_offset(coord, side, true).and_then(|c| in_grid(c, dimensions))
            }
            Topology::Circular => circular_offset(coord, side, dimensions),
        }
    }

    /// A planar embedding of the cell's centre, for distance heuristics and
    /// for renderers that want real positions.
    pub fn centre_point(&self, coord: GridCoordinate, dimensions: &Dimensions) -> (f32, f32) {
        let (x, y) = (coord.x as f32, coord.y as f32);
        match *self {
            Topology::Square
            | Topology::Weaving
            | Topology::DiagonalSquare
            | Topology::OctagonSquare => (x + 0.5, y + 0.5),
            Topology::Triangular => ((x + 1.0) * 0.5, y + 0.5),
            Topology::Hexagonal => {
                let shift = if coord.x % 2 == 1 { 0.5 } else { 0.0 };
                (0.75 * x + 0.5, y + 0.5 + shift)
            }
            Topology::Circular => {
                if coord.y == 0 {
                    return (0.0, 0.0);
                }
                let ring_len = dimensions
                    .row_length(RowIndex(coord.y as usize))
                    .map(|l| l.0)
                    .unwrap_or(1) as f32;
                let theta = 2.0 * std::f32::consts::PI * (x + 0.5) / ring_len;
                let radius = y + 0.5;
                (radius * theta.cos(), radius * theta.sin())
            }
        }
    }

    /// Scales the Euclidean heuristic so it never exceeds the true hop count:
    /// the reciprocal of the longest single-step distance in the embedding.
    pub fn heuristic_scale(&self) -> f32 {
        match *self {
            Topology::Square | Topology::Triangular | Topology::Hexagonal => 1.0,
            Topology::OctagonSquare | Topology::DiagonalSquare => std::f32::consts::FRAC_1_SQRT_2,
            // Tunnel hops jump two cells in one step; circular chords can
            // also span close to two ring heights.
            Topology::Weaving | Topology::Circular => 0.5,
        }
    }
}

/// Upward pointing triangle in the triangular family.
pub fn points_up(coord: GridCoordinate) -> bool {
    (coord.x + coord.y) % 2 == 0
}

/// Octagon cell in the octagon+square family (diamonds on odd parity).
pub fn is_octagon(coord: GridCoordinate) -> bool {
    (coord.x + coord.y) % 2 == 0
}

fn is_diagonal(side: Side) -> bool {
    matches!(side,
             Side::NorthEast | Side::NorthWest | Side::SouthEast | Side::SouthWest)
}

fn in_grid(coord: GridCoordinate, dimensions: &Dimensions) -> Option<GridCoordinate> {
    if dimensions.is_valid_coordinate(coord) {
        Some(coord)
    } else {
        None
    }
}

fn shifted(coord: GridCoordinate, dx: i64, dy: i64) -> Option<GridCoordinate> {
    let x = i64::from(coord.x) + dx;
    let y = i64::from(coord.y) + dy;
    if x >= 0 && y >= 0 {
        Some(GridCoordinate::new(x as u32, y as u32))
    } else {
        None
    }
}

fn compass_offset(coord: GridCoordinate, side: Side, with_diagonals: bool) -> Option<GridCoordinate> {
    match side {
        Side::North => shifted(coord, 0, -1),
        Side::South => shifted(coord, 0, 1),
        Side::East => shifted(coord, 1, 0),
        Side::West => shifted(coord, -1, 0),
        Side::NorthEast if with_diagonals => shifted(coord, 1, -1),
        Side::NorthWest if with_diagonals => shifted(coord, -1, -1),
        Side::SouthEast if with_diagonals => shifted(coord, 1, 1),
        Side::SouthWest if with_diagonals => shifted(coord, -1, 1),
        _ => None,
    }
}

fn hexagonal_offset(coord: GridCoordinate, side: Side) -> Option<GridCoordinate> {
    // Odd columns sit half a cell lower, so the row component of the four
    // diagonal sides depends on column parity.
    let odd_column = coord.x % 2 == 1;
    match side {
        Side::North => shifted(coord, 0, -1),
        Side::South => shifted(coord, 0, 1),
        Side::NorthEast => shifted(coord, 1, if odd_column { 0 } else { -1 }),
        Side::SouthEast => shifted(coord, 1, if odd_column { 1 } else { 0 }),
        Side::NorthWest => shifted(coord, -1, if odd_column { 0 } else { -1 }),
        Side::SouthWest => shifted(coord, -1, if odd_column { 1 } else { 0 }),
        _ => None,
    }
}

fn circular_offset(coord: GridCoordinate,
                   side: Side,
                   dimensions: &Dimensions)
                   -> Option<GridCoordinate> {
    let y = coord.y as usize;
    let RowsCount(rings) = dimensions.rows();
    let ring_len = dimensions.row_length(RowIndex(y))?.0;

    match side {
        Side::Clockwise if ring_len > 1 => {
            Some(GridCoordinate::new(((coord.x as usize + 1) % ring_len) as u32, coord.y))
        }
        Side::CounterClockwise if ring_len > 1 => {
            Some(GridCoordinate::new(((coord.x as usize + ring_len - 1) % ring_len) as u32,
                                     coord.y))
        }
        Side::Inward if y > 0 => {
            let inner_len = dimensions.row_length(RowIndex(y - 1))?.0;
            let ratio = ring_len / inner_len;
            Some(GridCoordinate::new(coord.x / ratio as u32, coord.y - 1))
        }
        Side::Outward(k) if y + 1 < rings => {
            let outer_len = dimensions.row_length(RowIndex(y + 1))?.0;
            let ratio = outer_len / ring_len;
            if (k as usize) < ratio {
                Some(GridCoordinate::new(coord.x * ratio as u32 + u32::from(k), coord.y + 1))
            } else {
                None
            }
        }
        _ => None,
    }
}
