use std::f32::consts::PI;

use crate::coordinates::GridCoordinate;
use crate::sides::MAX_OUTWARD;
use crate::units::{CellsCount, ColumnLength, RingsCount, RowIndex, RowLength, RowsCount};

/// The cell layout of a grid: how many cells exist, how a coordinate maps to
/// a flat row-major index and back.
///
/// Rectangular covers every planar family (square, triangular, hexagonal,
/// octagon+square, diagonal, weaving): they all address cells as (column,
/// row) over a fixed width. Polar is the circular family where each ring can
/// hold a different cell count.
#[derive(Debug, Clone)]
pub enum Dimensions {
    Rect {
        row_width: RowLength,
        column_height: ColumnLength,
    },
    Polar {
        ring_lengths: Vec<usize>,
        // Prefix sums of ring_lengths so coordinate <-> index mapping is O(1)/O(log n).
        ring_offsets: Vec<usize>,
    },
}

impl Dimensions {
    pub fn rect(row_width: RowLength, column_height: ColumnLength) -> Dimensions {
        Dimensions::Rect {
            row_width,
            column_height,
        }
    }

    /// Ring sizes grow so cells keep a roughly square aspect: whenever a
    /// cell's arc would stretch wider than the ring height the ring doubles
    /// its cell count. The hub is a single cell fanning out to the whole
    /// first ring.
    pub fn polar(rings: RingsCount) -> Dimensions {
        let rows = rings.0;
        let mut ring_lengths = Vec::with_capacity(rows);

        if rows > 0 {
            ring_lengths.push(1);
            for y in 1..rows {
                let radius = y as f32;
                let circumference = 2.0 * PI * radius;
                let previous_count = ring_lengths[y - 1];

                // Cell width if this ring reused the inner ring's cell count.
                let cell_width = circumference / previous_count as f32;
                let ratio = (cell_width.round() as usize)
                    .max(1)
                    .min(MAX_OUTWARD as usize);
                ring_lengths.push(previous_count * ratio);
            }
        }

        let mut ring_offsets = Vec::with_capacity(rows);
        let mut offset = 0;
        for length in &ring_lengths {
            ring_offsets.push(offset);
            offset += length;
        }

        Dimensions::Polar {
            ring_lengths,
            ring_offsets,
        }
    }

    pub fn size(&self) -> CellsCount {
        match *self {
            Dimensions::Rect {
                row_width,
                column_height,
            } => CellsCount(row_width.0 * column_height.0),
            Dimensions::Polar {
                ref ring_lengths,
                ref ring_offsets,
            } => CellsCount(ring_offsets.last().map_or(0, |last| {
                last + ring_lengths.last().copied().unwrap_or(0)
            })),
        }
    }

    pub fn rows(&self) -> RowsCount {
        match *self {
            Dimensions::Rect { column_height, .. } => RowsCount(column_height.0),
            Dimensions::Polar {
                ref ring_lengths, ..
            } => RowsCount(ring_lengths.len()),
        }
    }

    pub fn row_length(&self, row: RowIndex) -> Option<RowLength> {
        match *self {
            Dimensions::Rect {
                row_width,
                column_height,
            } => {
                if row.0 < column_height.0 {
                    Some(row_width)
                } else {
                    None
                }
            }
            Dimensions::Polar {
                ref ring_lengths, ..
            } => ring_lengths.get(row.0).map(|len| RowLength(*len)),
        }
    }

    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.index_of(coord).is_some()
    }

    /// Row-major flat index of a coordinate, None when out of the grid.
    pub fn index_of(&self, coord: GridCoordinate) -> Option<usize> {
        match *self {
            Dimensions::Rect {
                row_width,
                column_height,
            } => {
                let (x, y) = (coord.x as usize, coord.y as usize);
                if x < row_width.0 && y < column_height.0 {
                    Some(y * row_width.0 + x)
                } else {
                    None
                }
            }
            Dimensions::Polar {
                ref ring_lengths,
                ref ring_offsets,
            } => {
                let (x, y) = (coord.x as usize, coord.y as usize);
                if y < ring_lengths.len() && x < ring_lengths[y] {
                    Some(ring_offsets[y] + x)
                } else {
                    None
                }
            }
        }
    }

    /// Inverse of `index_of` for indices in 0..size.
    pub fn coordinate_of(&self, index: usize) -> GridCoordinate {
        debug_assert!(index < self.size().0);
        match *self {
            Dimensions::Rect { row_width, .. } => {
                let x = index % row_width.0;
                let y = index / row_width.0;
                GridCoordinate::new(x as u32, y as u32)
            }
            Dimensions::Polar {
                ref ring_offsets, ..
            } => {
                let y = match ring_offsets.binary_search(&index) {
                    Ok(row) => row,
                    Err(insertion) => insertion - 1,
                };
                let x = index - ring_offsets[y];
                GridCoordinate::new(x as u32, y as u32)
            }
        }
    }
}
