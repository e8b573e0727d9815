//! Maze generation algorithms.
//!
//! Every algorithm takes a freshly walled maze and a caller supplied rng and
//! carves a spanning tree of passages over the cells: the result is fully
//! connected with exactly `cells - 1` passages and no loops. Algorithms
//! differ in the texture of maze they produce (river-like long corridors,
//! uniformly random trees, strong diagonal bias) and in which grid families
//! they can run on; `Generator::supports` reports the latter and every entry
//! point returns `UnsupportedTopology` rather than carving nonsense.

use error_chain::bail;
use petgraph::unionfind::UnionFind;
use rand::{Rng, XorShiftRng};
use tracing::debug;

use crate::coordinates::GridCoordinate;
use crate::dimensions::Dimensions;
use crate::errors::{ErrorKind, Result};
use crate::maze::{Maze, Passage, PassageVec};
use crate::sides::Side;
use crate::topology::Topology;
use crate::utils;

/// Cell selection weights for the growing tree algorithm.
///
/// Each step picks the active cell by a weighted three way choice: a random
/// active cell (Prim-like texture), the newest (backtracker-like) or the
/// oldest. At least one weight must be non-zero.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GrowingTreeWeights {
    random: u32,
    newest: u32,
    oldest: u32,
}

impl GrowingTreeWeights {
    pub fn new(random: u32, newest: u32, oldest: u32) -> Result<GrowingTreeWeights> {
        if random == 0 && newest == 0 && oldest == 0 {
            bail!(ErrorKind::InvalidWeights);
        }
        Ok(GrowingTreeWeights {
            random,
            newest,
            oldest,
        })
    }

    fn select(&self, rng: &mut XorShiftRng, active_count: usize) -> usize {
        // Summed as u64 so weights near u32::MAX cannot wrap.
        let (random, newest, oldest) =
            (u64::from(self.random), u64::from(self.newest), u64::from(self.oldest));
        let pick = rng.gen::<u64>() % (random + newest + oldest);
        if pick < random {
            rng.gen::<usize>() % active_count
        } else if pick < random + newest {
            active_count - 1
        } else {
            0
        }
    }
}

/// Carving probabilities for Eller's algorithm, both in the half open
/// range (0, 1].
///
/// `horizontal` is the chance of merging two horizontally adjacent runs,
/// `vertical` the chance each extra member of a run also carves downward
/// (one member always does).
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct EllersBiases {
    horizontal: f64,
    vertical: f64,
}

impl EllersBiases {
    pub fn new(horizontal: f64, vertical: f64) -> Result<EllersBiases> {
        if !(horizontal > 0.0 && horizontal <= 1.0) {
            bail!(ErrorKind::InvalidBias("horizontal", horizontal));
        }
        if !(vertical > 0.0 && vertical <= 1.0) {
            bail!(ErrorKind::InvalidBias("vertical", vertical));
        }
        Ok(EllersBiases {
            horizontal,
            vertical,
        })
    }
}

/// The selection of generation algorithm, dispatched by `generate`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Generator {
    AldousBroder,
    Wilsons,
    RecursiveBacktracker,
    HuntAndKill,
    Prims,
    GrowingTree(GrowingTreeWeights),
    Kruskals,
    BinaryTree,
    Sidewinder,
    Ellers(EllersBiases),
    RecursiveDivision,
}

impl Generator {
    pub fn name(&self) -> &'static str {
        match *self {
            Generator::AldousBroder => "aldous-broder",
            Generator::Wilsons => "wilsons",
            Generator::RecursiveBacktracker => "recursive-backtracker",
            Generator::HuntAndKill => "hunt-and-kill",
            Generator::Prims => "prims",
            Generator::GrowingTree(_) => "growing-tree",
            Generator::Kruskals => "kruskals",
            Generator::BinaryTree => "binary-tree",
            Generator::Sidewinder => "sidewinder",
            Generator::Ellers(_) => "ellers",
            Generator::RecursiveDivision => "recursive-division",
        }
    }

    /// Whether the algorithm can run on the given grid family.
    ///
    /// The row based and wall adding algorithms assume square rows and
    /// columns. Wilson's and Kruskal's need the full passage set up front, so
    /// the families whose adjacency shifts as carving proceeds (weaving,
    /// diagonal) are out.
    pub fn supports(&self, topology: Topology) -> bool {
        match *self {
            Generator::BinaryTree
            | Generator::Sidewinder
            | Generator::Ellers(_)
            | Generator::RecursiveDivision => topology == Topology::Square,
            Generator::Wilsons | Generator::Kruskals => !topology.is_dynamic(),
            _ => true,
        }
    }

    pub fn generate(&self, maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
        ensure_supported(self.name(), self.supports(maze.topology()), maze)?;
        debug!(algorithm = self.name(),
               topology = maze.topology().name(),
               cells = maze.size(),
               "generating maze");
        // The algorithms assume an uncarved grid.
        maze.reset_walls();
        match *self {
            Generator::AldousBroder => aldous_broder(maze, rng),
            Generator::Wilsons => wilsons(maze, rng),
            Generator::RecursiveBacktracker => recursive_backtracker(maze, rng),
            Generator::HuntAndKill => hunt_and_kill(maze, rng),
            Generator::Prims => prims(maze, rng),
            Generator::GrowingTree(weights) => growing_tree(maze, rng, weights),
            Generator::Kruskals => kruskals(maze, rng),
            Generator::BinaryTree => binary_tree(maze, rng),
            Generator::Sidewinder => sidewinder(maze, rng),
            Generator::Ellers(biases) => ellers(maze, rng, biases),
            Generator::RecursiveDivision => recursive_division(maze, rng),
        }
    }
}

fn ensure_supported(name: &'static str, supported: bool, maze: &Maze) -> Result<()> {
    if supported {
        Ok(())
    } else {
        bail!(ErrorKind::UnsupportedTopology(name, maze.topology().name().to_string()))
    }
}

fn clear_visited(maze: &mut Maze) {
    for index in 0..maze.size() {
        let coord = maze.dimensions().coordinate_of(index);
        maze.cell_mut(coord).visited = false;
    }
}

fn unvisited_passages(maze: &Maze, coord: GridCoordinate) -> PassageVec {
    maze.passages_from(coord)
        .into_iter()
        .filter(|p| !maze.cell(p.to()).visited)
        .collect()
}

fn visited_passages(maze: &Maze, coord: GridCoordinate) -> PassageVec {
    maze.passages_from(coord)
        .into_iter()
        .filter(|p| maze.cell(p.to()).visited)
        .collect()
}

fn rect_bounds(maze: &Maze) -> (usize, usize) {
    match *maze.dimensions() {
        Dimensions::Rect {
            row_width,
            column_height,
        } => (row_width.0, column_height.0),
        Dimensions::Polar { .. } => (0, 0),
    }
}

/// An unbiased random walk that carves into each cell on first visit. The
/// only algorithm here that samples uniformly from all spanning trees on the
/// static families, at the cost of a long tail of wasted steps.
pub fn aldous_broder(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    clear_visited(maze);
    if maze.size() == 0 {
        return Ok(());
    }

    let mut current = maze.random_cell(rng);
    maze.cell_mut(current).visited = true;
    let mut remaining = maze.size() - 1;

    while remaining > 0 {
        let passages = maze.passages_from(current);
        let step = passages[utils::rand_index(rng, &passages)];
        let next = step.to();
        if !maze.cell(next).visited {
            maze.carve(current, step)?;
            maze.cell_mut(next).visited = true;
            remaining -= 1;
        }
        current = next;
    }
    Ok(())
}

/// Loop-erased random walks from unvisited cells into the grown tree. Also
/// uniform over spanning trees, and much faster than Aldous-Broder once most
/// of the grid is carved.
pub fn wilsons(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    ensure_supported("wilsons", !maze.topology().is_dynamic(), maze)?;
    clear_visited(maze);
    if maze.size() == 0 {
        return Ok(());
    }

    let first = maze.random_cell(rng);
    maze.cell_mut(first).visited = true;
    let mut unvisited: Vec<GridCoordinate> =
        maze.iter().filter(|c| *c != first).collect();

    while !unvisited.is_empty() {
        let start = unvisited[utils::rand_index(rng, &unvisited)];

        // Walk until the tree is hit, erasing any loop as soon as it forms.
        let mut path = vec![start];
        let mut position = utils::fnv_hashmap::<GridCoordinate, usize>(32);
        position.insert(start, 0);
        let mut current = start;

        while !maze.cell(current).visited {
            let neighbours = maze.neighbours(current);
            let next = neighbours[utils::rand_index(rng, &neighbours)];
            if let Some(&seen_at) = position.get(&next) {
                for erased in path.drain(seen_at + 1..) {
                    position.remove(&erased);
                }
            } else {
                position.insert(next, path.len());
                path.push(next);
            }
            current = next;
        }

        for pair in path.windows(2) {
            maze.link(pair[0], pair[1])?;
            maze.cell_mut(pair[0]).visited = true;
        }
        if let Some(last) = path.last() {
            maze.cell_mut(*last).visited = true;
        }
        unvisited.retain(|c| !maze.cell(*c).visited);
    }
    Ok(())
}

/// Depth first carving with an explicit stack. Long winding corridors, few
/// but deep dead ends.
pub fn recursive_backtracker(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    clear_visited(maze);
    if maze.size() == 0 {
        return Ok(());
    }

    let start = maze.random_cell(rng);
    maze.cell_mut(start).visited = true;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let candidates = unvisited_passages(maze, current);
        if candidates.is_empty() {
            stack.pop();
        } else {
            let step = candidates[utils::rand_index(rng, &candidates)];
            maze.carve(current, step)?;
            let next = step.to();
            maze.cell_mut(next).visited = true;
            stack.push(next);
        }
    }
    Ok(())
}

/// Random walk into unvisited cells until boxed in, then hunt in scan order
/// for an unvisited cell bordering the carved region and resume from there.
pub fn hunt_and_kill(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    clear_visited(maze);
    if maze.size() == 0 {
        return Ok(());
    }

    let coords: Vec<GridCoordinate> = maze.iter().collect();
    let mut current = maze.random_cell(rng);
    maze.cell_mut(current).visited = true;

    loop {
        // Kill: carve forward while an unvisited target exists.
        loop {
            let candidates = unvisited_passages(maze, current);
            if candidates.is_empty() {
                break;
            }
            let step = candidates[utils::rand_index(rng, &candidates)];
            maze.carve(current, step)?;
            current = step.to();
            maze.cell_mut(current).visited = true;
        }

        // Hunt: first unvisited cell that can join the carved region.
        let mut found = None;
        for coord in &coords {
            if maze.cell(*coord).visited {
                continue;
            }
            let into_tree = visited_passages(maze, *coord);
            if !into_tree.is_empty() {
                found = Some((*coord, into_tree[utils::rand_index(rng, &into_tree)]));
                break;
            }
        }
        match found {
            Some((coord, step)) => {
                maze.carve(coord, step)?;
                maze.cell_mut(coord).visited = true;
                current = coord;
            }
            None => break,
        }
    }
    Ok(())
}

/// Simplified Prim's: grow the tree by attaching a random frontier cell to a
/// random already carved neighbour. Short twisty passages radiating from the
/// start.
pub fn prims(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    clear_visited(maze);
    if maze.size() == 0 {
        return Ok(());
    }

    let start = maze.random_cell(rng);
    maze.cell_mut(start).visited = true;
    let mut frontier: Vec<GridCoordinate> = Vec::new();
    let mut queued = utils::fnv_hashset::<GridCoordinate>(maze.size());

    let enqueue_around = |maze: &Maze,
                              frontier: &mut Vec<GridCoordinate>,
                              queued: &mut crate::utils::FnvHashSet<GridCoordinate>,
                              coord: GridCoordinate| {
        for passage in maze.passages_from(coord) {
            let target = passage.to();
            if !maze.cell(target).visited && queued.insert(target) {
                frontier.push(target);
            }
        }
    };
    enqueue_around(maze, &mut frontier, &mut queued, start);

    while !frontier.is_empty() {
        let cell = utils::swap_remove_random(rng, &mut frontier);
        queued.remove(&cell);
        if maze.cell(cell).visited {
            continue;
        }
        let into_tree = visited_passages(maze, cell);
        if into_tree.is_empty() {
            // A tunnel offer was withdrawn since queueing; the cell comes
            // back once a door neighbour is carved.
            continue;
        }
        let step = into_tree[utils::rand_index(rng, &into_tree)];
        maze.carve(cell, step)?;
        maze.cell_mut(cell).visited = true;
        enqueue_around(maze, &mut frontier, &mut queued, cell);
    }
    Ok(())
}

/// The growing tree algorithm: keep a list of active cells and carve from a
/// weighted choice of random/newest/oldest each step. Newest-only behaves
/// like the backtracker, random-only like simplified Prim's.
pub fn growing_tree(maze: &mut Maze,
                    rng: &mut XorShiftRng,
                    weights: GrowingTreeWeights)
                    -> Result<()> {
    clear_visited(maze);
    if maze.size() == 0 {
        return Ok(());
    }

    let start = maze.random_cell(rng);
    maze.cell_mut(start).visited = true;
    let mut active = vec![start];

    while !active.is_empty() {
        let index = weights.select(rng, active.len());
        let current = active[index];
        let candidates = unvisited_passages(maze, current);
        if candidates.is_empty() {
            // Order matters to the newest/oldest policies, so no swap trick.
            active.remove(index);
        } else {
            let step = candidates[utils::rand_index(rng, &candidates)];
            maze.carve(current, step)?;
            let next = step.to();
            maze.cell_mut(next).visited = true;
            active.push(next);
        }
    }
    Ok(())
}

/// Kruskal's: shuffle every wall and knock down each one that still joins
/// two different trees, tracked by a union-find over the cell indices.
pub fn kruskals(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    ensure_supported("kruskals", !maze.topology().is_dynamic(), maze)?;

    let mut edges: Vec<(GridCoordinate, GridCoordinate)> = Vec::new();
    for coord in maze.iter() {
        let index = maze.index_of(coord).expect("iterated coordinate");
        for neighbour in maze.neighbours(coord) {
            let other = maze.index_of(neighbour).expect("adjacent coordinate");
            if other > index {
                edges.push((coord, neighbour));
            }
        }
    }
    rng.shuffle(&mut edges);

    let mut forest = UnionFind::<u32>::new(maze.size());
    for (a, b) in edges {
        let ia = maze.index_of(a).expect("edge endpoint") as u32;
        let ib = maze.index_of(b).expect("edge endpoint") as u32;
        if forest.union(ia, ib) {
            maze.link(a, b)?;
        }
    }
    Ok(())
}

/// For every cell, carve north or east at random (north at the east edge,
/// east at the north edge). Trivially fast, with unbroken corridors along
/// the northern and eastern boundaries.
pub fn binary_tree(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    ensure_supported("binary-tree", maze.topology() == Topology::Square, maze)?;

    let coords: Vec<GridCoordinate> = maze.iter().collect();
    for coord in coords {
        let mut targets: PassageVec = PassageVec::new();
        for side in [Side::North, Side::East].iter() {
            if let Some(to) = maze.neighbour(coord, *side) {
                targets.push(Passage::Door { side: *side, to });
            }
        }
        if !targets.is_empty() {
            let step = targets[utils::rand_index(rng, &targets)];
            maze.link(coord, step.to())?;
        }
    }
    Ok(())
}

/// Row by row runs of eastward passages, each run closed by a single
/// northward link from a random member. The top row is one long corridor.
pub fn sidewinder(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    ensure_supported("sidewinder", maze.topology() == Topology::Square, maze)?;
    let (width, height) = rect_bounds(maze);

    for y in 0..height {
        let mut run: Vec<GridCoordinate> = Vec::new();
        for x in 0..width {
            let coord = GridCoordinate::new(x as u32, y as u32);
            run.push(coord);
            let at_east_edge = x + 1 == width;
            let at_north_edge = y == 0;
            let close_run = at_east_edge || (!at_north_edge && rng.gen::<bool>());

            if close_run && !at_north_edge {
                let member = run[utils::rand_index(rng, &run)];
                let above = GridCoordinate::new(member.x, member.y - 1);
                maze.link(member, above)?;
                run.clear();
            } else if !at_east_edge {
                let east = GridCoordinate::new(coord.x + 1, coord.y);
                maze.link(coord, east)?;
            }
        }
    }
    Ok(())
}

/// Eller's algorithm: carve one row at a time, tracking connectivity with a
/// union-find so the maze streams in bounded state per row. The final row
/// joins every remaining pair of distinct runs.
pub fn ellers(maze: &mut Maze, rng: &mut XorShiftRng, biases: EllersBiases) -> Result<()> {
    ensure_supported("ellers", maze.topology() == Topology::Square, maze)?;
    let (width, height) = rect_bounds(maze);
    if width == 0 || height == 0 {
        return Ok(());
    }

    let mut forest = UnionFind::<u32>::new(maze.size());
    let flat = |c: GridCoordinate, maze: &Maze| {
        maze.index_of(c).expect("row coordinate") as u32
    };

    for y in 0..height {
        let last_row = y + 1 == height;

        for x in 0..width.saturating_sub(1) {
            let a = GridCoordinate::new(x as u32, y as u32);
            let b = GridCoordinate::new(x as u32 + 1, y as u32);
            let (ia, ib) = (flat(a, maze), flat(b, maze));
            if forest.find(ia) != forest.find(ib)
                && (last_row || rng.gen::<f64>() < biases.horizontal)
            {
                forest.union(ia, ib);
                maze.link(a, b)?;
            }
        }

        if last_row {
            break;
        }

        // Group the row by run, then drop at least one passage from each run
        // into the next row.
        let mut runs = utils::fnv_hashmap::<u32, Vec<GridCoordinate>>(width);
        for x in 0..width {
            let coord = GridCoordinate::new(x as u32, y as u32);
            let root = forest.find(flat(coord, maze));
            runs.entry(root).or_insert_with(Vec::new).push(coord);
        }

        for (_, mut members) in runs {
            rng.shuffle(&mut members);
            for (position, member) in members.iter().enumerate() {
                if position == 0 || rng.gen::<f64>() < biases.vertical {
                    let below = GridCoordinate::new(member.x, member.y + 1);
                    forest.union(flat(*member, maze), flat(below, maze));
                    maze.link(*member, below)?;
                }
            }
        }
    }
    Ok(())
}

/// Wall adding: open the whole grid, then recursively split each region with
/// a wall pierced by a single passage. Produces long straight walls and a
/// boxy, room-like texture.
pub fn recursive_division(maze: &mut Maze, rng: &mut XorShiftRng) -> Result<()> {
    ensure_supported("recursive-division", maze.topology() == Topology::Square, maze)?;
    let (width, height) = rect_bounds(maze);

    // Open every internal wall.
    let coords: Vec<GridCoordinate> = maze.iter().collect();
    for coord in &coords {
        let index = maze.index_of(*coord).expect("iterated coordinate");
        for neighbour in maze.neighbours(*coord) {
            if maze.index_of(neighbour).map_or(false, |other| other > index) {
                maze.link(*coord, neighbour)?;
            }
        }
    }

    // (x, y, width, height) regions still to divide.
    let mut regions = vec![(0usize, 0usize, width, height)];
    while let Some((x, y, w, h)) = regions.pop() {
        if w < 2 || h < 2 {
            continue;
        }
        let horizontal = if w == h {
            rng.gen::<bool>()
        } else {
            w < h
        };

        if horizontal {
            let wall_y = y + 1 + rng.gen::<usize>() % (h - 1);
            let passage_x = x + rng.gen::<usize>() % w;
            for cx in x..x + w {
                if cx == passage_x {
                    continue;
                }
                let above = GridCoordinate::new(cx as u32, (wall_y - 1) as u32);
                let below = GridCoordinate::new(cx as u32, wall_y as u32);
                maze.unlink(above, below)?;
            }
            regions.push((x, y, w, wall_y - y));
            regions.push((x, wall_y, w, y + h - wall_y));
        } else {
            let wall_x = x + 1 + rng.gen::<usize>() % (w - 1);
            let passage_y = y + rng.gen::<usize>() % h;
            for cy in y..y + h {
                if cy == passage_y {
                    continue;
                }
                let left = GridCoordinate::new((wall_x - 1) as u32, cy as u32);
                let right = GridCoordinate::new(wall_x as u32, cy as u32);
                maze.unlink(left, right)?;
            }
            regions.push((x, y, wall_x - x, h));
            regions.push((wall_x, y, x + w - wall_x, h));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use rand::SeedableRng;

    use crate::units::{Height, RingsCount, Width};

    use super::*;

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed([0x243f_6a88, 0x85a3_08d3, 0x1319_8a2e, 0x0370_7344])
    }

    fn all_generators() -> Vec<Generator> {
        vec![Generator::AldousBroder,
             Generator::Wilsons,
             Generator::RecursiveBacktracker,
             Generator::HuntAndKill,
             Generator::Prims,
             Generator::GrowingTree(GrowingTreeWeights::new(1, 2, 1).unwrap()),
             Generator::Kruskals,
             Generator::BinaryTree,
             Generator::Sidewinder,
             Generator::Ellers(EllersBiases::new(0.5, 0.3).unwrap()),
             Generator::RecursiveDivision]
    }

    fn all_mazes() -> Vec<Maze> {
        vec![Maze::new(Topology::Square, Width(6), Height(5)),
             Maze::new(Topology::Triangular, Width(7), Height(4)),
             Maze::new(Topology::Hexagonal, Width(5), Height(5)),
             Maze::new(Topology::OctagonSquare, Width(5), Height(5)),
             Maze::new(Topology::DiagonalSquare, Width(5), Height(5)),
             Maze::new(Topology::Weaving, Width(6), Height(6)),
             Maze::circular(RingsCount(5))]
    }

    #[test]
    fn every_algorithm_spans_every_supported_topology() {
        let mut rng = rng();
        for generator in all_generators() {
            for mut maze in all_mazes() {
                if !generator.supports(maze.topology()) {
                    continue;
                }
                generator.generate(&mut maze, &mut rng)
                         .unwrap_or_else(|e| {
                             panic!("{} on {}: {}", generator.name(), maze.topology().name(), e)
                         });
                assert!(maze.is_perfect(),
                        "{} on {} carved {} links over {} cells",
                        generator.name(),
                        maze.topology().name(),
                        maze.links_count(),
                        maze.size());
            }
        }
    }

    #[test]
    fn backtracker_carves_ninety_nine_links_on_ten_by_ten() {
        let mut maze = Maze::new(Topology::Square, Width(10), Height(10));
        recursive_backtracker(&mut maze, &mut rng()).unwrap();
        assert_eq!(maze.links_count(), 99);
        assert!(maze.is_perfect());
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_seed() {
        let render = |seed: [u32; 4]| {
            let mut maze = Maze::new(Topology::Square, Width(8), Height(8));
            let mut rng = XorShiftRng::from_seed(seed);
            hunt_and_kill(&mut maze, &mut rng).unwrap();
            format!("{}", maze)
        };
        let seed = [11, 22, 33, 44];
        assert_eq!(render(seed), render(seed));
        assert_ne!(render(seed), render([44, 33, 22, 11]));
    }

    #[test]
    fn unsupported_pairings_are_rejected() {
        let mut rng = rng();
        let mut expect_unsupported = |generator: Generator, mut maze: Maze| {
            assert!(!generator.supports(maze.topology()));
            let err = generator.generate(&mut maze, &mut rng)
                               .expect_err("generation should be refused");
            match *err.kind() {
                ErrorKind::UnsupportedTopology(..) => {}
                ref other => panic!("unexpected error: {}", other),
            }
            assert_eq!(maze.links_count(), 0);
        };

        expect_unsupported(Generator::Kruskals,
                           Maze::new(Topology::Weaving, Width(4), Height(4)));
        expect_unsupported(Generator::Wilsons,
                           Maze::new(Topology::DiagonalSquare, Width(4), Height(4)));
        expect_unsupported(Generator::Sidewinder,
                           Maze::new(Topology::Hexagonal, Width(4), Height(4)));
        expect_unsupported(Generator::BinaryTree, Maze::circular(RingsCount(4)));
        expect_unsupported(Generator::RecursiveDivision,
                           Maze::new(Topology::Triangular, Width(4), Height(4)));
        expect_unsupported(Generator::Ellers(EllersBiases::new(0.5, 0.5).unwrap()),
                           Maze::new(Topology::OctagonSquare, Width(4), Height(4)));
    }

    #[test]
    fn generate_resets_a_partially_carved_grid() {
        let mut maze = Maze::new(Topology::Square, Width(6), Height(6));
        maze.link(GridCoordinate::new(0, 0), GridCoordinate::new(1, 0)).unwrap();
        maze.link(GridCoordinate::new(3, 3), GridCoordinate::new(3, 4)).unwrap();
        Generator::RecursiveBacktracker.generate(&mut maze, &mut rng()).unwrap();
        assert!(maze.is_perfect());
        assert_eq!(maze.links_count(), 35);
    }

    #[test]
    fn growing_tree_handles_near_maximal_weights() {
        let max = u32::max_value();
        let weights = GrowingTreeWeights::new(max, max, max).unwrap();
        let mut maze = Maze::new(Topology::Square, Width(6), Height(6));
        growing_tree(&mut maze, &mut rng(), weights).unwrap();
        assert!(maze.is_perfect());
    }

    #[test]
    fn growing_tree_rejects_all_zero_weights() {
        assert!(GrowingTreeWeights::new(0, 0, 0).is_err());
        assert!(GrowingTreeWeights::new(0, 1, 0).is_ok());
    }

    #[test]
    fn ellers_rejects_out_of_range_biases() {
        for bad in [0.0, -0.25, 1.5, ::std::f64::NAN].iter() {
            let err = EllersBiases::new(*bad, 0.5).expect_err("horizontal bias");
            match *err.kind() {
                ErrorKind::InvalidBias("horizontal", _) => {}
                ref other => panic!("unexpected error: {}", other),
            }
            assert!(EllersBiases::new(0.5, *bad).is_err());
        }
        assert!(EllersBiases::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn growing_tree_newest_only_matches_backtracker_texture() {
        // Newest-only growing tree is the backtracker with a different
        // stack; both should yield deep, sparse dead ends.
        let mut maze = Maze::new(Topology::Square, Width(10), Height(10));
        let weights = GrowingTreeWeights::new(0, 1, 0).unwrap();
        growing_tree(&mut maze, &mut rng(), weights).unwrap();
        assert!(maze.is_perfect());
        assert!(maze.dead_ends().len() < 30);
    }

    #[test]
    fn weaving_generation_uses_tunnels() {
        // With enough cells the backtracker reliably finds at least one
        // corridor worth diving under.
        let mut maze = Maze::new(Topology::Weaving, Width(12), Height(12));
        recursive_backtracker(&mut maze, &mut rng()).unwrap();
        assert!(maze.is_perfect());
        assert!(!maze.tunnels().is_empty());
    }

    #[test]
    fn any_seed_yields_a_perfect_maze() {
        fn prop(seed: (u32, u32, u32, u32), w: u8, h: u8) -> bool {
            let width = usize::from(w % 8) + 2;
            let height = usize::from(h % 8) + 2;
            let mut rng = XorShiftRng::from_seed([seed.0, seed.1, seed.2, seed.3]);
            let checks = vec![(Generator::RecursiveBacktracker, Topology::Weaving),
                              (Generator::Wilsons, Topology::Hexagonal),
                              (Generator::Kruskals, Topology::Square),
                              (Generator::Ellers(EllersBiases::new(0.4, 0.4).unwrap()),
                               Topology::Square)];
            checks.into_iter().all(|(generator, topology)| {
                let mut maze = Maze::new(topology, Width(width), Height(height));
                generator.generate(&mut maze, &mut rng).is_ok() && maze.is_perfect()
            })
        }
        ::quickcheck::quickcheck(prop as fn((u32, u32, u32, u32), u8, u8) -> bool);
    }
}
