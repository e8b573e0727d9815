//! Entrance and exit carving.
//!
//! Callers name openings symbolically or by absolute coordinate; each
//! resolves to a boundary cell plus the side of that cell facing off the
//! grid. The whole request list is validated before any wall is touched, so
//! a failed call leaves the maze unchanged.

use error_chain::bail;

use crate::coordinates::GridCoordinate;
use crate::dimensions::Dimensions;
use crate::errors::{ErrorKind, Result};
use crate::maze::Maze;
use crate::sides::{Side, SideVec};
use crate::topology::Topology;

/// Where to carve an opening through the outer boundary.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Opening {
    /// The first cell: top-left for planar grids, the outer ring's first
    /// cell for circular ones (the hub has no boundary to open).
    Start,
    /// The middle of the southern (or outer) boundary.
    Centre,
    /// The last cell: bottom-right, or the outer ring's midpoint.
    End,
    /// A specific boundary cell.
    Absolute(GridCoordinate),
}

/// Carve every requested opening, returning the cells they resolved to in
/// request order. Duplicate cells, interior cells and out-of-grid
/// coordinates are all `InvalidOpening` and nothing is carved.
pub fn carve_openings(maze: &mut Maze, requests: &[Opening]) -> Result<Vec<GridCoordinate>> {
    let mut resolved: Vec<(GridCoordinate, Side)> = Vec::with_capacity(requests.len());
    for request in requests {
        let (coord, side) = resolve(maze, *request)?;
        if resolved.iter().any(|&(taken, _)| taken == coord) {
            bail!(ErrorKind::InvalidOpening(format!("duplicate opening at cell {}", coord)));
        }
        resolved.push((coord, side));
    }

    let mut carved = Vec::with_capacity(resolved.len());
    for (coord, side) in resolved {
        maze.open_boundary(coord, side)?;
        carved.push(coord);
    }
    Ok(carved)
}

fn resolve(maze: &Maze, request: Opening) -> Result<(GridCoordinate, Side)> {
    match request {
        Opening::Start => {
            let coord = start_cell(maze);
            boundary_side(maze, coord, Some(Side::West))
        }
        Opening::Centre => {
            let coord = centre_cell(maze);
            boundary_side(maze, coord, Some(Side::South))
        }
        Opening::End => {
            let coord = end_cell(maze);
            boundary_side(maze, coord, Some(Side::East))
        }
        Opening::Absolute(coord) => {
            if !maze.is_valid_coordinate(coord) {
                bail!(ErrorKind::InvalidOpening(format!("cell {} is outside the grid", coord)));
            }
            boundary_side(maze, coord, None)
        }
    }
}

fn start_cell(maze: &Maze) -> GridCoordinate {
    match *maze.dimensions() {
        Dimensions::Rect { .. } => GridCoordinate::new(0, 0),
        Dimensions::Polar { ref ring_lengths, .. } => {
            GridCoordinate::new(0, outer_ring(ring_lengths))
        }
    }
}

fn centre_cell(maze: &Maze) -> GridCoordinate {
    match *maze.dimensions() {
        Dimensions::Rect {
            row_width,
            column_height,
        } => GridCoordinate::new((row_width.0 / 2) as u32, (column_height.0 - 1) as u32),
        // A quarter of the way round, keeping clear of Start and End.
        Dimensions::Polar { ref ring_lengths, .. } => {
            let ring = outer_ring(ring_lengths);
            GridCoordinate::new((ring_lengths[ring as usize] / 4) as u32, ring)
        }
    }
}

fn end_cell(maze: &Maze) -> GridCoordinate {
    match *maze.dimensions() {
        Dimensions::Rect {
            row_width,
            column_height,
        } => GridCoordinate::new((row_width.0 - 1) as u32, (column_height.0 - 1) as u32),
        Dimensions::Polar { ref ring_lengths, .. } => {
            let ring = outer_ring(ring_lengths);
            GridCoordinate::new((ring_lengths[ring as usize] / 2) as u32, ring)
        }
    }
}

fn outer_ring(ring_lengths: &[usize]) -> u32 {
    (ring_lengths.len().saturating_sub(1)) as u32
}

/// The preferred boundary side of the cell if it has one, otherwise any
/// boundary side, otherwise `InvalidOpening` (the cell is interior).
fn boundary_side(maze: &Maze,
                 coord: GridCoordinate,
                 preferred: Option<Side>)
                 -> Result<(GridCoordinate, Side)> {
    let topology: Topology = maze.topology();
    let facing_out: SideVec = maze.sides_of(coord)
        .into_iter()
        .filter(|side| topology.offset(coord, *side, maze.dimensions()).is_none())
        .collect();

    if let Some(side) = preferred {
        if facing_out.contains(&side) {
            return Ok((coord, side));
        }
    }
    match facing_out.first() {
        Some(side) => Ok((coord, *side)),
        None => bail!(ErrorKind::InvalidOpening(format!("cell {} is not on the boundary",
                                                        coord))),
    }
}

#[cfg(test)]
mod tests {

    use crate::sides::Side;
    use crate::units::{Height, RingsCount, Width};

    use super::*;

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn symbolic_openings_on_a_square_grid() {
        let mut maze = Maze::new(Topology::Square, Width(5), Height(4));
        let carved = carve_openings(&mut maze,
                                    &[Opening::Start, Opening::Centre, Opening::End])
            .expect("openings");
        assert_eq!(carved, vec![gc(0, 0), gc(2, 3), gc(4, 3)]);
        assert!(maze.cell(gc(0, 0)).is_open(Side::West));
        assert!(maze.cell(gc(2, 3)).is_open(Side::South));
        assert!(maze.cell(gc(4, 3)).is_open(Side::East));
        assert_eq!(maze.openings(), carved.as_slice());
    }

    #[test]
    fn circular_openings_sit_on_the_outer_rim() {
        let mut maze = Maze::circular(RingsCount(4));
        let carved = carve_openings(&mut maze, &[Opening::Start, Opening::End])
            .expect("openings");
        let rim = (maze.rows().0 - 1) as u32;
        assert_eq!(carved[0], gc(0, rim));
        assert_eq!(carved[1].y, rim);
        assert_ne!(carved[0], carved[1]);
        for coord in carved {
            assert!(maze.cell(coord).is_open(Side::Outward(0)));
        }
    }

    #[test]
    fn interior_and_out_of_range_cells_are_rejected() {
        let mut maze = Maze::new(Topology::Square, Width(5), Height(5));
        for bad in [Opening::Absolute(gc(2, 2)), Opening::Absolute(gc(9, 0))].iter() {
            let err = carve_openings(&mut maze, &[*bad]).expect_err("invalid opening");
            match *err.kind() {
                ErrorKind::InvalidOpening(_) => {}
                ref other => panic!("unexpected error: {}", other),
            }
        }
        assert!(maze.openings().is_empty());
    }

    #[test]
    fn duplicate_openings_carve_nothing() {
        let mut maze = Maze::new(Topology::Square, Width(5), Height(4));
        let requests = [Opening::End, Opening::Absolute(gc(4, 3))];
        assert!(carve_openings(&mut maze, &requests).is_err());
        // Validation ran before mutation: the End opening was not carved.
        assert!(maze.openings().is_empty());
        assert!(maze.cell(gc(4, 3)).is_sealed());
    }

    #[test]
    fn every_topology_resolves_the_symbolic_trio() {
        let mazes = vec![Maze::new(Topology::Triangular, Width(6), Height(4)),
                         Maze::new(Topology::Hexagonal, Width(5), Height(4)),
                         Maze::new(Topology::OctagonSquare, Width(5), Height(4)),
                         Maze::new(Topology::DiagonalSquare, Width(5), Height(4)),
                         Maze::new(Topology::Weaving, Width(5), Height(4)),
                         Maze::circular(RingsCount(5))];
        for mut maze in mazes {
            let carved = carve_openings(&mut maze,
                                        &[Opening::Start, Opening::Centre, Opening::End])
                .unwrap_or_else(|e| panic!("{}: {}", maze.topology().name(), e));
            assert_eq!(carved.len(), 3);
            for coord in carved {
                assert!(!maze.cell(coord).is_sealed());
            }
        }
    }
}
