//! Pure consumers of a found path: total Euclidean length, and continuous
//! position interpolation along the path for frame-driven animation.

use grid_util::point::Point;

use crate::search::SearchNode;

/// An ordered sequence of [SearchNode] copies produced by one search.
///
/// The nodes run **destination to origin**, the order in which predecessor
/// links are walked. Callers that need origin-to-destination order iterate
/// in reverse, or swap the endpoint roles when invoking the search so the
/// reconstructed sequence already runs in travel order.
#[derive(Clone, Debug, Default)]
pub struct Path {
    nodes: Vec<SearchNode>,
}

impl Path {
    pub(crate) fn new(nodes: Vec<SearchNode>) -> Path {
        Path { nodes }
    }

    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Grid position of the node the sequence starts at.
    pub fn first(&self) -> Option<Point> {
        self.nodes.first().map(SearchNode::position)
    }

    /// Total Euclidean length over consecutive nodes; 0 for an empty or
    /// single-node path.
    pub fn length(&self) -> f32 {
        self.nodes
            .windows(2)
            .map(|pair| segment_length(&pair[0], &pair[1]))
            .sum()
    }
}

fn segment_length(a: &SearchNode, b: &SearchNode) -> f32 {
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// A continuous position in grid space, in cell units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Distance traveled along a path, advanced once per frame. Replaces an
/// explicit per-agent segment index: every call re-walks the path segments
/// until the accumulated distance is reached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathCursor {
    traveled: f32,
}

impl PathCursor {
    pub fn new() -> PathCursor {
        PathCursor::default()
    }

    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    /// Advances by `speed * dt` and returns the interpolated position on the
    /// segment the cursor now lies on. Returns [None] once the end of the
    /// path is passed, resetting the cursor to the path start so the next
    /// call loops. An empty path yields [None] without accumulating.
    pub fn advance(&mut self, path: &Path, speed: f32, dt: f32) -> Option<Position> {
        if path.is_empty() {
            return None;
        }
        self.traveled += speed * dt;
        let mut walked = 0.0_f32;
        for pair in path.nodes().windows(2) {
            let length = segment_length(&pair[0], &pair[1]);
            if walked + length >= self.traveled {
                let t = (self.traveled - walked) / length;
                return Some(Position {
                    x: pair[0].x as f32 + (pair[1].x - pair[0].x) as f32 * t,
                    y: pair[0].y as f32 + (pair[1].y - pair[0].y) as f32 * t,
                });
            }
            walked += length;
        }
        self.traveled = 0.0;
        None
    }
}
