//! # sdf_pathfinding
//!
//! A grid-based pathfinding system driven by a
//! [distance field](https://en.wikipedia.org/wiki/Signed_distance_function):
//! every cell carries an approximate distance to the nearest blocked cell,
//! and a best-first search uses that clearance both to prune cells an agent
//! of a given radius cannot occupy and to take variable-length jumps that
//! are safe at the current clearance. A weight on the clearance term lets
//! agents prefer hugging walls or ignore walls entirely.
//!
//! The crate exposes four pieces that mirror the data flow: an obstacle mask
//! (a [BoolGrid](grid_util::grid::BoolGrid) owned by the caller) feeds a
//! [DistanceField], which together with a precomputed [NeighborTable] feeds
//! [PathSearch], which produces a [ScoreMap] and a [Path] consumed by the
//! length and motion helpers in [path].

mod lookup;

pub mod field;
pub mod neighbors;
pub mod path;
pub mod search;

pub use field::{DistanceField, Metric};
pub use neighbors::{NeighborOffset, NeighborTable};
pub use path::{Path, PathCursor, Position};
pub use search::{PathSearch, ScoreMap, SearchError, SearchNode, SearchParams};

/// Largest jump distance in the default [NeighborTable].
pub const MAX_JUMP: i32 = 10;

/// Default clamp radius for [DistanceField] values. A cell holding this value
/// means "no obstacle within range", not an exact distance.
pub const DEFAULT_CLAMP_RADIUS: u8 = 10;
