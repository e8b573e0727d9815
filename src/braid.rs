//! Dead-end removal.
//!
//! Braiding turns a perfect maze into a partially looped one by opening one
//! extra wall per chosen dead-end. Adding passages can never disconnect
//! anything, so connectivity is preserved by construction.

use error_chain::bail;
use rand::{Rng, XorShiftRng};
use tracing::debug;

use crate::errors::{ErrorKind, Result};
use crate::maze::{Maze, PassageVec};
use crate::utils;

/// How many dead-ends to remove.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum BraidTarget {
    /// An absolute number; more than exist means all of them.
    Count(usize),
    /// A fraction in [0, 1] of the dead-ends present when braiding starts.
    Fraction(f32),
}

/// Remove dead-ends until the target is met or none are left, returning the
/// number actually removed.
///
/// Each chosen dead-end opens one wall to a random still-walled neighbour,
/// preferring neighbours that are not themselves dead-ends so the count drops
/// by exactly one per carve. When only dead-end neighbours remain the carve
/// removes two at once and counts as two.
pub fn braid(maze: &mut Maze, rng: &mut XorShiftRng, target: BraidTarget) -> Result<usize> {
    let initial = maze.dead_ends().len();
    let goal = match target {
        BraidTarget::Count(count) => count.min(initial),
        BraidTarget::Fraction(fraction) => {
            if !(fraction >= 0.0 && fraction <= 1.0) {
                bail!(ErrorKind::InvalidBias("braid fraction", f64::from(fraction)));
            }
            (fraction * initial as f32).round() as usize
        }
    };

    let mut removed = 0;
    while removed < goal {
        let mut dead_ends = maze.dead_ends();
        rng.shuffle(&mut dead_ends);
        let before_pass = removed;

        for coord in dead_ends {
            if removed >= goal {
                break;
            }
            // An earlier carve this pass may have fixed it already.
            if maze.degree(coord) != 1 {
                continue;
            }
            let walled: PassageVec = maze.passages_from(coord)
                .into_iter()
                .filter(|p| !maze.is_linked(coord, p.to()))
                .collect();
            let (spur, joins_dead_end) = {
                let through: PassageVec = walled.iter()
                    .filter(|p| maze.degree(p.to()) != 1)
                    .cloned()
                    .collect();
                if !through.is_empty() {
                    (Some(through[utils::rand_index(rng, &through)]), false)
                } else if !walled.is_empty() && removed + 2 <= goal {
                    (Some(walled[utils::rand_index(rng, &walled)]), true)
                } else {
                    (None, false)
                }
            };
            if let Some(passage) = spur {
                maze.carve(coord, passage)?;
                removed += if joins_dead_end { 2 } else { 1 };
            }
        }

        if removed == before_pass {
            break;
        }
    }

    debug!(requested = goal, removed, initial, "braided dead-ends");
    Ok(removed)
}
