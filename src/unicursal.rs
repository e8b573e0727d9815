//! The unicursal (single path) transform.
//!
//! Bisecting every passage of a perfect square maze yields a maze with no
//! junctions at all: each source cell becomes a 2x2 block whose sub-cells
//! are joined around the block's rim except where a passage mouth opens, and
//! each source passage becomes two parallel lanes. Every sub-cell then has
//! exactly two open passages, which over a connected source forms one closed
//! loop through the whole grid. Severing a single wall pair at the entrance
//! turns the loop into one long corridor, a labyrinth rather than a maze.

use error_chain::bail;

use crate::coordinates::GridCoordinate;
use crate::dimensions::Dimensions;
use crate::errors::{ErrorKind, Result};
use crate::maze::Maze;
use crate::sides::Side;
use crate::topology::Topology;
use crate::units::{Height, Width};

/// Build the doubled-size unicursal maze from a perfect square maze. The
/// result carries two openings on its northern boundary, the two ends of the
/// single corridor.
pub fn bisect(source: &Maze) -> Result<Maze> {
    if source.topology() != Topology::Square {
        bail!(ErrorKind::UnsupportedTopology("unicursal", source.topology().name().to_string()));
    }
    if !source.is_perfect() {
        bail!(ErrorKind::NotPerfect);
    }

    let (width, height) = match *source.dimensions() {
        Dimensions::Rect {
            row_width,
            column_height,
        } => (row_width.0, column_height.0),
        Dimensions::Polar { .. } => unreachable!("square mazes have rectangular dimensions"),
    };

    let mut doubled = Maze::new(Topology::Square, Width(width * 2), Height(height * 2));
    let gc = |x: u32, y: u32| GridCoordinate::new(x, y);

    for coord in source.iter() {
        // Passage checks go through the neighbour, so a boundary opening on
        // the source does not read as a passage.
        let carved = |side: Side| {
            source.neighbour(coord, side)
                  .map_or(false, |neighbour| source.is_linked(coord, neighbour))
        };
        let (north, south, east, west) =
            (carved(Side::North), carved(Side::South), carved(Side::East), carved(Side::West));

        let (bx, by) = (coord.x * 2, coord.y * 2);
        let a = gc(bx, by);
        let b = gc(bx + 1, by);
        let c = gc(bx, by + 1);
        let d = gc(bx + 1, by + 1);

        // Ring edges inside the block, interrupted at each passage mouth.
        if !north {
            doubled.link(a, b)?;
        }
        if !south {
            doubled.link(c, d)?;
        }
        if !west {
            doubled.link(a, c)?;
        }
        if !east {
            doubled.link(b, d)?;
        }

        // Each passage becomes two parallel lanes; carving east and south
        // only covers every passage exactly once.
        if east {
            doubled.link(b, gc(bx + 2, by))?;
            doubled.link(d, gc(bx + 2, by + 1))?;
        }
        if south {
            doubled.link(c, gc(bx, by + 2))?;
            doubled.link(d, gc(bx + 1, by + 2))?;
        }
    }

    // Break the loop at the top-left block and let the two corridor ends out
    // through the northern boundary.
    doubled.unlink(gc(0, 0), gc(1, 0))?;
    doubled.open_boundary(gc(0, 0), Side::North)?;
    doubled.open_boundary(gc(1, 0), Side::North)?;
    Ok(doubled)
}
