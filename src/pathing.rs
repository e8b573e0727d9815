//! Distance mapping and path solving over the open-passage graph.
//!
//! `Distances` is a single-source BFS flood (every passage costs one hop)
//! used for gradient rendering and for picking far-apart endpoints.
//! `shortest_path` is A* over the same graph with a Euclidean heuristic on
//! the topology's planar embedding, scaled per family so it stays
//! admissible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use error_chain::bail;
use itertools::Itertools;
use num::traits::{Bounded, One, ToPrimitive, Unsigned, Zero};
use rand::XorShiftRng;
use tracing::debug;

use crate::coordinates::GridCoordinate;
use crate::errors::{ErrorKind, Result};
use crate::maze::Maze;
use crate::utils::{self, FnvHashMap};

// Trait used purely as a generic type parameter alias; generic parameter
// type aliases are not in the language.
pub trait MaxDistance
    : Zero + One + Bounded + Unsigned + ToPrimitive + Copy + Ord
    {
}
impl<T: Zero + One + Bounded + Unsigned + ToPrimitive + Copy + Ord> MaxDistance for T {}

/// Shortest hop-counts from one start cell to every cell reachable from it.
/// Cells absent from the map are unreachable.
#[derive(Debug, Clone)]
pub struct Distances<MaxDistanceT = u32> {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, MaxDistanceT>,
    max_distance: MaxDistanceT,
}

impl<MaxDistanceT> Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    /// Flood the maze from `start`. None if the start is outside the grid.
    pub fn new(maze: &Maze, start: GridCoordinate) -> Option<Distances<MaxDistanceT>> {
        if !maze.is_valid_coordinate(start) {
            return None;
        }

        let mut max = Zero::zero();
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start, Zero::zero());

        // No edge weights, so a cell's first recorded distance is final and
        // the map doubles as the visited set.
        let mut frontier = vec![start];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            for coord in &frontier {
                let distance_to_cell: MaxDistanceT = distances[coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for linked in maze.open_neighbours(*coord) {
                    if !distances.contains_key(&linked) {
                        distances.insert(linked, distance_to_cell + One::one());
                        new_frontier.push(linked);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate: start,
            distances,
            max_distance: max,
        })
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    /// The largest hop-count reached by the flood.
    #[inline]
    pub fn max(&self) -> MaxDistanceT {
        self.max_distance
    }

    #[inline]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<MaxDistanceT> {
        self.distances.get(&coord).cloned()
    }

    pub fn furthest_points_on_grid(&self) -> Vec<GridCoordinate> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted()
    }
}

impl Maze {
    /// Copy a distance flood into the cells' scratch fields for rendering.
    /// Unreached cells keep `None`.
    pub fn apply_distances<MaxDistanceT: MaxDistance>(&mut self,
                                                      distances: &Distances<MaxDistanceT>) {
        for index in 0..self.size() {
            let coord = self.dimensions().coordinate_of(index);
            self.cell_mut(coord).distance = distances.distance_from_start_to(coord)
                .map(|d| d.to_u32().unwrap_or(u32::max_value()));
        }
    }
}

// Integer-scaled costs keep the heap entries totally ordered without
// touching floating point comparisons.
const EDGE_SCALE: u64 = 1000;

#[derive(Eq, PartialEq)]
struct HeapEntry {
    f: u64,
    tie: u64,
    g: u64,
    coord: GridCoordinate,
}

// BinaryHeap is a max-heap: reverse on f, then FIFO among equal f via the
// monotonic tie counter.
impl Ord for HeapEntry {
    fn cmp(&self, other: &HeapEntry) -> Ordering {
        other.f
            .cmp(&self.f)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &HeapEntry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* between two cells over open passages. Every passage costs one hop;
/// the returned path includes both endpoints.
pub fn shortest_path(maze: &Maze,
                     start: GridCoordinate,
                     goal: GridCoordinate)
                     -> Result<Vec<GridCoordinate>> {
    for coord in [start, goal].iter() {
        if !maze.is_valid_coordinate(*coord) {
            bail!(ErrorKind::InvalidCoordinate(coord.x, coord.y));
        }
    }

    let scale = maze.topology().heuristic_scale();
    let heuristic = |coord: GridCoordinate| -> u64 {
        let (ax, ay) = maze.topology().centre_point(coord, maze.dimensions());
        let (bx, by) = maze.topology().centre_point(goal, maze.dimensions());
        let euclidean = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt() * scale;
        (f64::from(euclidean) * EDGE_SCALE as f64) as u64
    };

    let mut best_g: FnvHashMap<GridCoordinate, u64> = utils::fnv_hashmap(maze.size());
    let mut came_from: FnvHashMap<GridCoordinate, GridCoordinate> =
        utils::fnv_hashmap(maze.size());
    let mut open = BinaryHeap::new();
    let mut tie = 0u64;

    best_g.insert(start, 0);
    open.push(HeapEntry {
        f: heuristic(start),
        tie,
        g: 0,
        coord: start,
    });

    while let Some(entry) = open.pop() {
        if entry.coord == goal {
            let mut path = vec![goal];
            let mut current = goal;
            while current != start {
                current = came_from[&current];
                path.push(current);
            }
            path.reverse();
            debug!(hops = path.len() - 1, "shortest path found");
            return Ok(path);
        }
        // Stale entry superseded by a cheaper route.
        if best_g.get(&entry.coord).map_or(true, |&g| entry.g > g) {
            continue;
        }

        for next in maze.open_neighbours(entry.coord) {
            let tentative = entry.g + EDGE_SCALE;
            if best_g.get(&next).map_or(true, |&g| tentative < g) {
                best_g.insert(next, tentative);
                came_from.insert(next, entry.coord);
                tie += 1;
                open.push(HeapEntry {
                    f: tentative + heuristic(next),
                    tie,
                    g: tentative,
                    coord: next,
                });
            }
        }
    }
    bail!(ErrorKind::NoPath)
}

/// Solve between the first two carved openings and flag the route on the
/// cells for rendering.
pub fn solve(maze: &mut Maze) -> Result<Vec<GridCoordinate>> {
    let (start, goal) = {
        let openings = maze.openings();
        if openings.len() < 2 {
            bail!(ErrorKind::TooFewOpenings(openings.len()));
        }
        (openings[0], openings[1])
    };
    let path = shortest_path(maze, start, goal)?;
    maze.mark_path(&path);
    Ok(path)
}

/// An approximate longest path via the double flood trick: flood from
/// anywhere, flood again from the furthest cell found, connect the two
/// extremes. Exact on perfect mazes (tree diameter), arbitrary once braiding
/// has added loops.
pub fn longest_path(maze: &Maze, rng: &mut XorShiftRng) -> Result<Vec<GridCoordinate>> {
    let anywhere = maze.random_cell(rng);
    let first: Distances<u32> = Distances::new(maze, anywhere)
        .expect("random cell is a valid start");
    let start = first.furthest_points_on_grid()[0];

    let from_start: Distances<u32> = Distances::new(maze, start)
        .expect("flooded cell is a valid start");
    let end = from_start.furthest_points_on_grid()[0];

    shortest_path(maze, start, end)
}
