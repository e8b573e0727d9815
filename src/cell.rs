use crate::sides::{Side, SideSet, SideVec, UnderMarker};

/// One cell of a maze: which of its sides are open, whether generation has
/// visited it, and the scratch annotations the pathing passes fill in for
/// renderers.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    open: SideSet,
    pub visited: bool,
    pub distance: Option<u32>,
    pub on_path: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            open: SideSet::empty(),
            visited: false,
            distance: None,
            on_path: false,
        }
    }

    #[inline]
    pub fn is_open(&self, side: Side) -> bool {
        self.open.contains(side)
    }

    #[inline]
    pub fn open_side(&mut self, side: Side) {
        self.open.insert(side);
    }

    #[inline]
    pub fn close_side(&mut self, side: Side) {
        self.open.remove(side);
    }

    pub fn toggle_side(&mut self, side: Side) {
        self.open.toggle(side);
    }

    /// Open sides through walls; under-passage markers do not count.
    #[inline]
    pub fn open_count(&self) -> u32 {
        self.open.open_count()
    }

    pub fn open_sides(&self) -> SideVec {
        self.open.sides()
    }

    pub fn is_sealed(&self) -> bool {
        self.open.is_empty()
    }

    pub fn mark_under(&mut self, marker: UnderMarker) {
        self.open.set_under(marker);
    }

    pub fn has_under(&self, marker: UnderMarker) -> bool {
        self.open.has_under(marker)
    }

    pub fn has_any_under(&self) -> bool {
        self.open.has_any_under()
    }

    /// Back to the freshly walled state.
    pub fn reset(&mut self) {
        *self = Cell::new();
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn freshly_walled_cell_is_sealed() {
        let cell = Cell::new();
        assert!(cell.is_sealed());
        assert!(!cell.visited);
        assert_eq!(cell.distance, None);
        assert!(!cell.on_path);
    }

    #[test]
    fn reset_clears_scratch_fields_and_sides() {
        let mut cell = Cell::new();
        cell.open_side(Side::East);
        cell.visited = true;
        cell.distance = Some(9);
        cell.on_path = true;
        cell.mark_under(UnderMarker::NorthSouth);

        cell.reset();
        assert!(cell.is_sealed());
        assert!(!cell.visited);
        assert_eq!(cell.distance, None);
        assert!(!cell.on_path);
        assert!(!cell.has_any_under());
    }
}
