//! **topomaze** is a maze generation and route finding library covering
//! square, triangular, hexagonal, octagon+square, diagonal, weaving and
//! circular grids, with dead-end braiding and a unicursal labyrinth
//! transform on top.

pub mod braid;
pub mod cell;
pub mod coordinates;
pub mod dimensions;
pub mod errors;
pub mod generators;
pub mod maze;
pub mod openings;
pub mod pathing;
pub mod sides;
pub mod topology;
pub mod unicursal;
pub mod units;
mod utils;

pub use crate::errors::{Error, ErrorKind, Result};
