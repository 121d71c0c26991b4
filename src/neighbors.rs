//! Precomputed jump vectors: every integer offset within the maximum jump
//! radius together with its rounded Euclidean length. Built once at startup
//! and shared read-only by all searches.

use crate::lookup::ceil_sqrt;
use crate::MAX_JUMP;

/// A single jump vector: an integer offset and its rounded Euclidean length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborOffset {
    pub dx: i32,
    pub dy: i32,
    /// `ceil(sqrt(dx * dx + dy * dy))`, the cost of traversing this offset.
    pub distance: i32,
}

/// The disk-shaped candidate set of jump vectors used by
/// [PathSearch](crate::search::PathSearch). Enumeration order is row-major
/// over the bounding square, which keeps searches deterministic; the search
/// itself treats the set as unordered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable {
    offsets: Vec<NeighborOffset>,
    max_jump: i32,
}

impl NeighborTable {
    /// Enumerates all offsets whose rounded length lies in `(0, max_jump]`.
    pub fn new(max_jump: i32) -> NeighborTable {
        let mut offsets = Vec::new();
        for dx in -max_jump..=max_jump {
            for dy in -max_jump..=max_jump {
                let distance = ceil_sqrt(dx * dx + dy * dy);
                if distance > 0 && distance <= max_jump {
                    offsets.push(NeighborOffset { dx, dy, distance });
                }
            }
        }
        NeighborTable { offsets, max_jump }
    }

    pub fn offsets(&self) -> &[NeighborOffset] {
        &self.offsets
    }

    pub fn max_jump(&self) -> i32 {
        self.max_jump
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for NeighborTable {
    fn default() -> NeighborTable {
        NeighborTable::new(MAX_JUMP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The offsets of the default table are exactly the non-zero lattice
    /// points inside the radius-10 disk: 317 - 1 of them.
    #[test]
    fn default_table_is_a_disk() {
        let table = NeighborTable::default();
        assert_eq!(table.len(), 316);
        assert!(table
            .offsets()
            .iter()
            .all(|o| o.distance > 0 && o.distance <= 10));
        assert!(!table.offsets().iter().any(|o| o.dx == 0 && o.dy == 0));
    }

    #[test]
    fn rounded_distances() {
        let table = NeighborTable::default();
        let dist = |dx, dy| {
            table
                .offsets()
                .iter()
                .find(|o| o.dx == dx && o.dy == dy)
                .map(|o| o.distance)
        };
        assert_eq!(dist(1, 0), Some(1));
        assert_eq!(dist(1, 1), Some(2));
        assert_eq!(dist(3, 4), Some(5));
        assert_eq!(dist(-7, -7), Some(10));
        // ceil(sqrt(101)) = 11 exceeds the jump radius.
        assert_eq!(dist(10, 1), None);
        assert_eq!(dist(10, 0), Some(10));
    }

    /// A jump radius of 1 only admits the four cardinal steps; diagonal
    /// steps round up to length 2.
    #[test]
    fn unit_radius_is_cardinal() {
        let table = NeighborTable::new(1);
        assert_eq!(table.len(), 4);
        assert!(table.offsets().iter().all(|o| o.dx.abs() + o.dy.abs() == 1));
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(NeighborTable::new(5), NeighborTable::new(5));
    }
}
