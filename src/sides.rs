use smallvec::SmallVec;
use std::fmt;

/// A direction by which a cell may join a neighbour.
///
/// One enumeration covers every grid family; each topology exposes only the
/// subset it defines for a given cell. Every side owns a distinct bit in a
/// cell's state word, so a cell's open passages are a plain bitmask.
///
/// `Outward(k)` is the circular family's k-th outward neighbour: a ring may
/// hold more cells than the ring inside it, so a cell can have several
/// children one ring out. The hub (ring zero) fans out to the whole first
/// ring, which bounds k.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Side {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Inward,
    Clockwise,
    CounterClockwise,
    Outward(u8),
}

/// Upper bound on subdivision between adjacent rings. The hub to first ring
/// fan out is round(2*pi) = 6, every later ratio is 1 or 2.
pub const MAX_OUTWARD: u8 = 6;

impl Side {
    /// The unique bit this side occupies in a cell state word.
    pub fn bit(self) -> u32 {
        match self {
            Side::North => 1,
            Side::South => 1 << 1,
            Side::East => 1 << 2,
            Side::West => 1 << 3,
            Side::NorthEast => 1 << 4,
            Side::NorthWest => 1 << 5,
            Side::SouthEast => 1 << 6,
            Side::SouthWest => 1 << 7,
            Side::Inward => 1 << 8,
            Side::Clockwise => 1 << 9,
            Side::CounterClockwise => 1 << 10,
            Side::Outward(k) => {
                debug_assert!(k < MAX_OUTWARD);
                1 << (11 + u32::from(k))
            }
        }
    }

    /// The side a neighbour opens back towards us.
    ///
    /// For `Inward` the exact `Outward(k)` sub-index depends on which child
    /// the inward cell came from; linking resolves that by searching the
    /// neighbour's own sides, so the 0 here is only a nominal partner.
    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
            Side::NorthEast => Side::SouthWest,
            Side::SouthWest => Side::NorthEast,
            Side::NorthWest => Side::SouthEast,
            Side::SouthEast => Side::NorthWest,
            Side::Inward => Side::Outward(0),
            Side::Outward(_) => Side::Inward,
            Side::Clockwise => Side::CounterClockwise,
            Side::CounterClockwise => Side::Clockwise,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub type SideVec = SmallVec<[Side; 8]>;

const ALL_SIDES_MASK: u32 = (1 << (11 + MAX_OUTWARD as u32)) - 1;
const UNDER_NORTH_SOUTH_BIT: u32 = 1 << 17;
const UNDER_EAST_WEST_BIT: u32 = 1 << 18;

/// Marks a weaving cell that has a passage tunnelling beneath it,
/// perpendicular to its own surface corridor.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum UnderMarker {
    NorthSouth,
    EastWest,
}

impl UnderMarker {
    fn bit(self) -> u32 {
        match self {
            UnderMarker::NorthSouth => UNDER_NORTH_SOUTH_BIT,
            UnderMarker::EastWest => UNDER_EAST_WEST_BIT,
        }
    }
}

/// A cell's open/closed state word: one bit per side, plus the weaving
/// under-passage markers which are bookkeeping rather than adjacency.
#[derive(Eq, PartialEq, Copy, Clone, Default)]
pub struct SideSet(u32);

impl SideSet {
    pub fn empty() -> SideSet {
        SideSet(0)
    }

    #[inline]
    pub fn contains(&self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, side: Side) {
        self.0 |= side.bit();
    }

    #[inline]
    pub fn remove(&mut self, side: Side) {
        self.0 &= !side.bit();
    }

    pub fn toggle(&mut self, side: Side) {
        self.0 ^= side.bit();
    }

    /// Number of open sides, ignoring under-passage markers.
    #[inline]
    pub fn open_count(&self) -> u32 {
        (self.0 & ALL_SIDES_MASK).count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 & ALL_SIDES_MASK == 0
    }

    pub fn set_under(&mut self, marker: UnderMarker) {
        self.0 |= marker.bit();
    }

    pub fn has_under(&self, marker: UnderMarker) -> bool {
        self.0 & marker.bit() != 0
    }

    pub fn has_any_under(&self) -> bool {
        self.0 & (UNDER_NORTH_SOUTH_BIT | UNDER_EAST_WEST_BIT) != 0
    }

    /// The open sides as a list, for display and tests.
    pub fn sides(&self) -> SideVec {
        let mut all: SideVec = SmallVec::new();
        all.extend_from_slice(&[Side::North,
                                Side::South,
                                Side::East,
                                Side::West,
                                Side::NorthEast,
                                Side::NorthWest,
                                Side::SouthEast,
                                Side::SouthWest,
                                Side::Inward,
                                Side::Clockwise,
                                Side::CounterClockwise]);
        for k in 0..MAX_OUTWARD {
            all.push(Side::Outward(k));
        }
        all.into_iter().filter(|s| self.contains(*s)).collect()
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SideSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SideSet{:?}", self.sides().as_ref())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn side_bits_are_unique() {
        let mut all: Vec<Side> = vec![Side::North,
                                      Side::South,
                                      Side::East,
                                      Side::West,
                                      Side::NorthEast,
                                      Side::NorthWest,
                                      Side::SouthEast,
                                      Side::SouthWest,
                                      Side::Inward,
                                      Side::Clockwise,
                                      Side::CounterClockwise];
        for k in 0..MAX_OUTWARD {
            all.push(Side::Outward(k));
        }

        let mut seen = 0u32;
        for side in all {
            assert_eq!(seen & side.bit(), 0, "{:?} reuses a bit", side);
            seen |= side.bit();
        }
    }

    #[test]
    fn opposites_are_involutions_for_fixed_sides() {
        let fixed = [Side::North,
                     Side::South,
                     Side::East,
                     Side::West,
                     Side::NorthEast,
                     Side::NorthWest,
                     Side::SouthEast,
                     Side::SouthWest,
                     Side::Clockwise,
                     Side::CounterClockwise];
        for side in fixed.iter() {
            assert_eq!(side.opposite().opposite(), *side);
        }
    }

    #[test]
    fn open_close_toggle() {
        let mut set = SideSet::empty();
        assert!(!set.contains(Side::North));
        set.insert(Side::North);
        set.insert(Side::Outward(3));
        assert!(set.contains(Side::North));
        assert!(set.contains(Side::Outward(3)));
        assert!(!set.contains(Side::Outward(2)));
        assert_eq!(set.open_count(), 2);

        set.toggle(Side::North);
        assert!(!set.contains(Side::North));
        set.remove(Side::Outward(3));
        assert!(set.is_empty());
    }

    #[test]
    fn under_markers_do_not_count_as_open_sides() {
        let mut set = SideSet::empty();
        set.set_under(UnderMarker::EastWest);
        assert!(set.has_under(UnderMarker::EastWest));
        assert!(!set.has_under(UnderMarker::NorthSouth));
        assert_eq!(set.open_count(), 0);
        assert!(set.is_empty());
    }
}
