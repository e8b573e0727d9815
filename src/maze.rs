use bit_set::BitSet;
use error_chain::bail;
use rand::{Rng, XorShiftRng};
use smallvec::SmallVec;
use std::fmt;

use crate::cell::Cell;
use crate::coordinates::GridCoordinate;
use crate::dimensions::Dimensions;
use crate::errors::{ErrorKind, Result};
use crate::sides::{Side, SideVec, UnderMarker};
use crate::topology::Topology;
use crate::units::{Height, RingsCount, RowsCount, ColumnLength, RowLength, Width};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 8]>;

/// A carveable connection from one cell to another.
///
/// Almost always a `Door`: an open side shared with a topology-adjacent
/// neighbour. The weaving family additionally offers `Tunnel`s that dive
/// under an already carved perpendicular corridor to reach the cell beyond
/// it.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Passage {
    Door {
        side: Side,
        to: GridCoordinate,
    },
    Tunnel {
        under: GridCoordinate,
        to: GridCoordinate,
    },
}

impl Passage {
    pub fn to(&self) -> GridCoordinate {
        match *self {
            Passage::Door { to, .. } | Passage::Tunnel { to, .. } => to,
        }
    }
}

pub type PassageVec = SmallVec<[Passage; 8]>;

/// A maze: fixed shape, mutable wall state.
///
/// The maze owns a flat row-major array of cells; algorithms borrow it
/// exclusively for the duration of a run. Opening a passage between two
/// adjacent cells always sets the paired side bits on both cells in one call,
/// so the two state words can never disagree about a shared wall.
pub struct Maze {
    topology: Topology,
    dimensions: Dimensions,
    cells: Vec<Cell>,
    // Weave under-passages between non-adjacent cells, as sorted index pairs.
    tunnels: Vec<(u32, u32)>,
    openings: Vec<GridCoordinate>,
}

impl Maze {
    /// A fully walled maze over one of the planar families.
    pub fn new(topology: Topology, width: Width, height: Height) -> Maze {
        assert!(topology.is_planar(),
                "circular mazes are built with Maze::circular");
        let dimensions = Dimensions::rect(RowLength(width.0), ColumnLength(height.0));
        Maze::with_dimensions(topology, dimensions)
    }

    /// A fully walled circular maze with the given number of rings.
    pub fn circular(rings: RingsCount) -> Maze {
        Maze::with_dimensions(Topology::Circular, Dimensions::polar(rings))
    }

    fn with_dimensions(topology: Topology, dimensions: Dimensions) -> Maze {
        let size = dimensions.size().0;
        Maze {
            topology,
            dimensions,
            cells: vec![Cell::new(); size],
            tunnels: Vec::new(),
            openings: Vec::new(),
        }
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    #[inline]
    pub fn index_of(&self, coord: GridCoordinate) -> Option<usize> {
        self.dimensions.index_of(coord)
    }

    /// Panics on an out-of-grid coordinate; use `is_valid_coordinate` first
    /// when the coordinate came from untrusted input.
    pub fn cell(&self, coord: GridCoordinate) -> &Cell {
        let index = self.index_of(coord).expect("coordinate outside the grid");
        &self.cells[index]
    }

    pub fn cell_mut(&mut self, coord: GridCoordinate) -> &mut Cell {
        let index = self.index_of(coord).expect("coordinate outside the grid");
        &mut self.cells[index]
    }

    pub fn random_cell(&self, rng: &mut XorShiftRng) -> GridCoordinate {
        let index = rng.gen::<usize>() % self.size();
        self.dimensions.coordinate_of(index)
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            dimensions: &self.dimensions,
            current: 0,
            count: self.size(),
        }
    }

    /// Every wall back in place, all scratch state cleared.
    pub fn reset_walls(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
        self.tunnels.clear();
        self.openings.clear();
    }

    pub fn sides_of(&self, coord: GridCoordinate) -> SideVec {
        self.topology.sides_of(coord, &self.dimensions)
    }

    /// The neighbour through `side`, respecting the diagonal family's
    /// crossing rule: a diagonal neighbour is unreachable while the
    /// complementary diagonal passage of the adjacent cell pair is open.
    pub fn neighbour(&self, coord: GridCoordinate, side: Side) -> Option<GridCoordinate> {
        let target = self.topology.offset(coord, side, &self.dimensions)?;
        if self.topology == Topology::DiagonalSquare && self.is_crossing_blocked(coord, side) {
            return None;
        }
        Some(target)
    }

    /// All topology-adjacent cells, whatever the wall state. Tunnel
    /// candidates are not neighbours; see `passages_from`.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.sides_of(coord)
            .iter()
            .filter_map(|side| self.neighbour(coord, *side))
            .collect()
    }

    /// Every connection that could be carved from `coord` right now: doors to
    /// adjacent cells, plus weave tunnels under perpendicular corridors.
    pub fn passages_from(&self, coord: GridCoordinate) -> PassageVec {
        let mut passages: PassageVec = self.sides_of(coord)
            .iter()
            .filter_map(|side| {
                self.neighbour(coord, *side).map(|to| Passage::Door { side: *side, to })
            })
            .collect();

        if self.topology == Topology::Weaving {
            for side in [Side::North, Side::South, Side::East, Side::West].iter() {
                if let Some((under, to)) = self.tunnel_target(coord, *side) {
                    passages.push(Passage::Tunnel { under, to });
                }
            }
        }

        passages
    }

    fn tunnel_target(&self,
                     coord: GridCoordinate,
                     side: Side)
                     -> Option<(GridCoordinate, GridCoordinate)> {
        let mid = self.topology.offset(coord, side, &self.dimensions)?;
        let far = self.topology.offset(mid, side, &self.dimensions)?;

        let mid_cell = self.cell(mid);
        if mid_cell.has_any_under() {
            return None;
        }
        // Only a straight corridor perpendicular to the travel direction can
        // be tunnelled under.
        let straight_across = match side {
            Side::North | Side::South => {
                mid_cell.is_open(Side::East) && mid_cell.is_open(Side::West)
                && !mid_cell.is_open(Side::North) && !mid_cell.is_open(Side::South)
            }
            Side::East | Side::West => {
                mid_cell.is_open(Side::North) && mid_cell.is_open(Side::South)
                && !mid_cell.is_open(Side::East) && !mid_cell.is_open(Side::West)
            }
            _ => false,
        };
        if straight_across && !self.is_linked(coord, far) {
            Some((mid, far))
        } else {
            None
        }
    }

    fn is_crossing_blocked(&self, coord: GridCoordinate, side: Side) -> bool {
        // The two cells flanking a diagonal passage; if they are joined by
        // the complementary diagonal then ours would cross it.
        let flank_open = |x: i64, y: i64, s: Side| -> bool {
            if x < 0 || y < 0 {
                return false;
            }
            let flank = GridCoordinate::new(x as u32, y as u32);
            self.is_valid_coordinate(flank) && self.cell(flank).is_open(s)
        };
        let (x, y) = (i64::from(coord.x), i64::from(coord.y));
        match side {
            Side::NorthEast => flank_open(x, y - 1, Side::SouthEast),
            Side::NorthWest => flank_open(x - 1, y, Side::NorthEast),
            Side::SouthEast => flank_open(x + 1, y, Side::SouthWest),
            Side::SouthWest => flank_open(x - 1, y, Side::SouthEast),
            _ => false,
        }
    }

    /// Open the mutual pair of sides joining two adjacent cells.
    pub fn link(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        if a == b {
            bail!(ErrorKind::SelfLink(a.x, a.y));
        }
        for coord in [a, b].iter() {
            if !self.is_valid_coordinate(*coord) {
                bail!(ErrorKind::InvalidCoordinate(coord.x, coord.y));
            }
        }

        let side_a_to_b = self.joining_side(a, b);
        let side_b_to_a = self.joining_side(b, a);
        match (side_a_to_b, side_b_to_a) {
            (Some(ab), Some(ba)) => {
                self.cell_mut(a).open_side(ab);
                self.cell_mut(b).open_side(ba);
                Ok(())
            }
            _ => bail!(ErrorKind::NotAdjacent(a.x, a.y, b.x, b.y)),
        }
    }

    /// Close the wall between two adjacent cells, if a passage exists.
    pub fn unlink(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        let side_a_to_b = self.joining_side(a, b);
        let side_b_to_a = self.joining_side(b, a);
        match (side_a_to_b, side_b_to_a) {
            (Some(ab), Some(ba)) => {
                self.cell_mut(a).close_side(ab);
                self.cell_mut(b).close_side(ba);
                Ok(())
            }
            _ => bail!(ErrorKind::NotAdjacent(a.x, a.y, b.x, b.y)),
        }
    }

    /// Carve a weave tunnel from `a` to `b` under the corridor cell between
    /// them. The endpoints are not adjacent, so the connection is recorded as
    /// an explicit edge and the corridor cell is marked as passed-under.
    pub fn link_under(&mut self,
                      a: GridCoordinate,
                      under: GridCoordinate,
                      b: GridCoordinate)
                      -> Result<()> {
        let valid = [Side::North, Side::South, Side::East, Side::West]
            .iter()
            .find(|side| {
                self.topology.offset(a, **side, &self.dimensions) == Some(under)
                && self.topology.offset(under, **side, &self.dimensions) == Some(b)
            })
            .cloned();

        match valid {
            Some(side) if self.topology == Topology::Weaving => {
                let marker = match side {
                    Side::North | Side::South => UnderMarker::NorthSouth,
                    _ => UnderMarker::EastWest,
                };
                let ia = self.index_of(a).expect("validated") as u32;
                let ib = self.index_of(b).expect("validated") as u32;
                let pair = (ia.min(ib), ia.max(ib));
                if !self.tunnels.contains(&pair) {
                    self.tunnels.push(pair);
                }
                self.cell_mut(under).mark_under(marker);
                Ok(())
            }
            _ => bail!(ErrorKind::NotAdjacent(a.x, a.y, b.x, b.y)),
        }
    }

    /// Carve a passage previously offered by `passages_from`.
    pub fn carve(&mut self, from: GridCoordinate, passage: Passage) -> Result<()> {
        match passage {
            Passage::Door { to, .. } => self.link(from, to),
            Passage::Tunnel { under, to } => self.link_under(from, under, to),
        }
    }

    /// Are two cells joined by an open passage (door or tunnel)?
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        let door = self.sides_of(a)
            .iter()
            .any(|side| {
                self.cell(a).is_open(*side)
                && self.topology.offset(a, *side, &self.dimensions) == Some(b)
            });
        if door {
            return true;
        }
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => {
                let pair = ((ia as u32).min(ib as u32), (ia as u32).max(ib as u32));
                self.tunnels.contains(&pair)
            }
            _ => false,
        }
    }

    /// Cells reachable from `coord` through open passages.
    pub fn open_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        let cell = self.cell(coord);
        let mut linked: CoordinateSmallVec = cell.open_sides()
            .iter()
            .filter_map(|side| self.topology.offset(coord, *side, &self.dimensions))
            .collect();

        if !self.tunnels.is_empty() {
            let index = self.index_of(coord).expect("coordinate outside the grid") as u32;
            for &(ia, ib) in &self.tunnels {
                if ia == index {
                    linked.push(self.dimensions.coordinate_of(ib as usize));
                } else if ib == index {
                    linked.push(self.dimensions.coordinate_of(ia as usize));
                }
            }
        }
        linked
    }

    /// Degree of the cell in the cell-to-cell passage graph. Boundary
    /// openings lead off the grid and do not count.
    pub fn degree(&self, coord: GridCoordinate) -> usize {
        self.open_neighbours(coord).len()
    }

    /// Number of open passages between cell pairs, tunnels included,
    /// boundary openings excluded. A perfect maze has `size() - 1`.
    pub fn links_count(&self) -> usize {
        let mut doors = 0;
        for coord in self.iter() {
            let index = self.index_of(coord).expect("iterated coordinate");
            for side in self.cell(coord).open_sides() {
                if let Some(other) = self.topology.offset(coord, side, &self.dimensions) {
                    if self.index_of(other).map_or(false, |other_index| other_index > index) {
                        doors += 1;
                    }
                }
            }
        }
        doors + self.tunnels.len()
    }

    /// Cells with exactly one open passage.
    pub fn dead_ends(&self) -> Vec<GridCoordinate> {
        self.iter().filter(|coord| self.degree(*coord) == 1).collect()
    }

    pub fn is_fully_connected(&self) -> bool {
        if self.size() == 0 {
            return true;
        }
        let mut reached = BitSet::with_capacity(self.size());
        let mut frontier = vec![self.dimensions.coordinate_of(0)];
        reached.insert(0);
        while let Some(coord) = frontier.pop() {
            for next in self.open_neighbours(coord) {
                let index = self.index_of(next).expect("linked coordinate");
                if reached.insert(index) {
                    frontier.push(next);
                }
            }
        }
        reached.len() == self.size()
    }

    /// Connected with exactly `size - 1` passages: a spanning tree.
    pub fn is_perfect(&self) -> bool {
        self.links_count() == self.size().saturating_sub(1) && self.is_fully_connected()
    }

    /// Open a side that faces off the grid (an entrance or exit). There is no
    /// partner bit to keep in sync, by construction.
    pub fn open_boundary(&mut self, coord: GridCoordinate, side: Side) -> Result<()> {
        if !self.is_valid_coordinate(coord) {
            bail!(ErrorKind::InvalidCoordinate(coord.x, coord.y));
        }
        let is_boundary_side = self.sides_of(coord).contains(&side)
                               && self.topology.offset(coord, side, &self.dimensions).is_none();
        if !is_boundary_side {
            bail!(ErrorKind::InvalidOpening(format!("side {} of cell {} does not face off the \
                                                     grid",
                                                    side,
                                                    coord)));
        }
        self.cell_mut(coord).open_side(side);
        self.openings.push(coord);
        Ok(())
    }

    pub fn openings(&self) -> &[GridCoordinate] {
        &self.openings
    }

    pub fn tunnels(&self) -> &[(u32, u32)] {
        &self.tunnels
    }

    /// Flag the given cells as the solution route for renderers.
    pub fn mark_path(&mut self, path: &[GridCoordinate]) {
        for coord in path {
            self.cell_mut(*coord).on_path = true;
        }
    }

    pub fn clear_path_marks(&mut self) {
        for cell in &mut self.cells {
            cell.on_path = false;
        }
    }

    fn joining_side(&self, from: GridCoordinate, to: GridCoordinate) -> Option<Side> {
        self.sides_of(from)
            .iter()
            .find(|side| self.neighbour(from, **side) == Some(to))
            .cloned()
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Maze :: topology: {}, cells: {}, links: {}",
               self.topology.name(),
               self.size(),
               self.links_count())
    }
}

/// Textual rendering: proper walls-and-passages for the square rows/columns
/// families, a summary line for the others. A debugging aid, not a stable
/// format; real rendering reads the cell states directly.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let printable = matches!(self.topology,
                                 Topology::Square | Topology::Weaving | Topology::DiagonalSquare);
        let (width, height) = match self.dimensions {
            Dimensions::Rect {
                row_width,
                column_height,
            } => (row_width.0, column_height.0),
            _ => (0, 0),
        };
        if !printable || width == 0 {
            return writeln!(f, "[{} maze, {} cells, {} links]",
                            self.topology.name(),
                            self.size(),
                            self.links_count());
        }

        let gc = |x: usize, y: usize| GridCoordinate::new(x as u32, y as u32);

        for x in 0..width {
            let top_open = self.cell(gc(x, 0)).is_open(Side::North);
            write!(f, "+{}", if top_open { "   " } else { "---" })?;
        }
        writeln!(f, "+")?;

        for y in 0..height {
            let west_open = self.cell(gc(0, y)).is_open(Side::West);
            let mut body = String::from(if west_open { " " } else { "|" });
            let mut floor = String::from("+");
            for x in 0..width {
                let cell = self.cell(gc(x, y));
                body.push_str(if cell.on_path { " . " } else { "   " });
                body.push_str(if cell.is_open(Side::East) { " " } else { "|" });
                floor.push_str(if cell.is_open(Side::South) { "   " } else { "---" });
                floor.push('+');
            }
            writeln!(f, "{}", body)?;
            writeln!(f, "{}", floor)?;
        }
        Ok(())
    }
}

pub struct CellIter<'a> {
    dimensions: &'a Dimensions,
    current: usize,
    count: usize,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<GridCoordinate> {
        if self.current < self.count {
            let coord = self.dimensions.coordinate_of(self.current);
            self.current += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for CellIter<'a> {}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use crate::units::RingsCount;

    use super::*;

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    fn square(w: usize, h: usize) -> Maze {
        Maze::new(Topology::Square, Width(w), Height(h))
    }

    #[test]
    fn linking_cells_is_mutual() {
        let mut m = square(4, 4);
        let a = gc(0, 1);
        let b = gc(0, 2);
        let c = gc(0, 3);

        assert!(!m.is_linked(a, b));
        m.link(a, b).expect("link failed");
        assert!(m.is_linked(a, b));
        assert!(m.is_linked(b, a));
        assert!(m.cell(a).is_open(Side::South));
        assert!(m.cell(b).is_open(Side::North));

        m.link(b, c).expect("link failed");
        let linked = m.open_neighbours(b).iter().cloned().sorted();
        assert_eq!(linked, vec![a, c]);

        m.unlink(a, b).expect("unlink failed");
        assert!(!m.is_linked(a, b));
        assert!(m.is_linked(b, c));
        assert!(!m.cell(a).is_open(Side::South));
        assert!(!m.cell(b).is_open(Side::North));
    }

    #[test]
    fn self_links_and_far_links_are_rejected() {
        let mut m = square(4, 4);
        assert!(m.link(gc(0, 0), gc(0, 0)).is_err());
        assert!(m.link(gc(0, 0), gc(2, 0)).is_err());
        assert!(m.link(gc(0, 0), gc(1, 1)).is_err());
        assert!(m.link(gc(0, 0), gc(9, 9)).is_err());
        // Nothing was mutated by the failed calls.
        assert!(m.cell(gc(0, 0)).is_sealed());
    }

    #[test]
    fn mutual_consistency_across_every_topology() {
        let mazes = vec![square(4, 3),
                         Maze::new(Topology::Triangular, Width(5), Height(3)),
                         Maze::new(Topology::Hexagonal, Width(4), Height(4)),
                         Maze::new(Topology::OctagonSquare, Width(4), Height(4)),
                         Maze::new(Topology::DiagonalSquare, Width(4), Height(4)),
                         Maze::new(Topology::Weaving, Width(4), Height(4)),
                         Maze::circular(RingsCount(4))];

        for mut maze in mazes {
            // Link everything pairwise, then check both cells agree about
            // every shared wall.
            let coords: Vec<GridCoordinate> = maze.iter().collect();
            for coord in &coords {
                for neighbour in maze.neighbours(*coord) {
                    maze.link(*coord, neighbour).expect("adjacent link");
                }
            }
            for coord in &coords {
                for side in maze.sides_of(*coord) {
                    if let Some(neighbour) = maze.neighbour(*coord, side) {
                        let ours = maze.cell(*coord).is_open(side);
                        let theirs = maze.open_neighbours(neighbour).contains(coord);
                        assert_eq!(ours, theirs,
                                   "{}: {:?} side {:?} desynchronised",
                                   maze.topology().name(),
                                   coord,
                                   side);
                    }
                }
            }
        }
    }

    #[test]
    fn diagonal_passages_cannot_cross() {
        let mut m = Maze::new(Topology::DiagonalSquare, Width(3), Height(3));
        // Carve the NE diagonal of (0, 1): joins (0, 1) and (1, 0).
        m.link(gc(0, 1), gc(1, 0)).expect("diagonal link");
        // The complementary NW diagonal of (1, 1) would cross it.
        assert_eq!(m.neighbour(gc(1, 1), Side::NorthWest), None);
        assert!(m.link(gc(1, 1), gc(0, 0)).is_err());
        // An uncontested diagonal elsewhere still works.
        m.link(gc(1, 1), gc(2, 0)).expect("diagonal link");
    }

    #[test]
    fn weave_tunnels_connect_under_corridors() {
        let mut m = Maze::new(Topology::Weaving, Width(3), Height(3));
        // An east-west corridor through the middle cell.
        m.link(gc(0, 1), gc(1, 1)).expect("link");
        m.link(gc(1, 1), gc(2, 1)).expect("link");

        // From above the corridor a tunnel to below is offered.
        let passages = m.passages_from(gc(1, 0));
        let tunnel = passages
            .iter()
            .find(|p| matches!(p, Passage::Tunnel { .. }))
            .cloned()
            .expect("tunnel candidate");
        assert_eq!(tunnel.to(), gc(1, 2));

        m.carve(gc(1, 0), tunnel).expect("tunnel carve");
        assert!(m.is_linked(gc(1, 0), gc(1, 2)));
        assert!(m.cell(gc(1, 1)).has_under(UnderMarker::NorthSouth));
        assert_eq!(m.tunnels().len(), 1);
        assert_eq!(m.degree(gc(1, 0)), 1);
        assert_eq!(m.links_count(), 3);

        // A second tunnel under the same cell is not offered.
        let again = m.passages_from(gc(1, 0));
        assert!(again.iter().all(|p| matches!(p, Passage::Door { .. })));
    }

    #[test]
    fn links_count_and_dead_ends() {
        let mut m = square(2, 2);
        m.link(gc(0, 0), gc(1, 0)).unwrap();
        m.link(gc(0, 0), gc(0, 1)).unwrap();
        m.link(gc(0, 1), gc(1, 1)).unwrap();
        assert_eq!(m.links_count(), 3);
        assert!(m.is_perfect());
        let dead_ends = m.dead_ends().into_iter().sorted();
        assert_eq!(dead_ends, vec![gc(1, 0), gc(1, 1)]);

        m.link(gc(1, 0), gc(1, 1)).unwrap();
        assert_eq!(m.links_count(), 4);
        assert!(m.is_fully_connected());
        assert!(!m.is_perfect());
        assert!(m.dead_ends().is_empty());
    }

    #[test]
    fn boundary_openings_do_not_count_as_links() {
        let mut m = square(2, 1);
        m.link(gc(0, 0), gc(1, 0)).unwrap();
        m.open_boundary(gc(0, 0), Side::West).expect("boundary opening");
        m.open_boundary(gc(1, 0), Side::East).expect("boundary opening");
        assert!(m.open_boundary(gc(0, 0), Side::East).is_err());
        assert_eq!(m.links_count(), 1);
        assert_eq!(m.degree(gc(0, 0)), 1);
        assert_eq!(m.openings(), &[gc(0, 0), gc(1, 0)]);
    }

    #[test]
    fn reset_walls_restores_the_fresh_state() {
        let mut m = square(3, 3);
        m.link(gc(0, 0), gc(1, 0)).unwrap();
        m.open_boundary(gc(0, 0), Side::North).unwrap();
        m.cell_mut(gc(1, 1)).visited = true;
        m.reset_walls();
        assert_eq!(m.links_count(), 0);
        assert!(m.openings().is_empty());
        assert!(m.iter().all(|c| m.cell(c).is_sealed() && !m.cell(c).visited));
    }

    #[test]
    fn display_draws_walls_and_passages() {
        let mut m = square(2, 1);
        m.link(gc(0, 0), gc(1, 0)).unwrap();
        let text = format!("{}", m);
        assert_eq!(text, "+---+---+\n|       |\n+---+---+\n");
    }

    #[test]
    fn random_cell_is_always_in_the_grid() {
        use rand::SeedableRng;
        let m = Maze::circular(RingsCount(4));
        let mut rng = XorShiftRng::from_seed([1, 2, 3, 4]);
        for _ in 0..500 {
            let coord = m.random_cell(&mut rng);
            assert!(m.is_valid_coordinate(coord));
        }
    }
}
