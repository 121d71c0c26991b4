//! Best-first search over the jump-vector graph, gated by the distance
//! field: a step is only taken if it does not exceed the clearance at the
//! current cell minus the agent radius, and only lands on cells whose
//! clearance admits the agent. A Dijkstra variant without an explicit
//! visited set; cells may be re-queued whenever a cheaper route is found.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use grid_util::point::Point;
use itertools::unfold;
use log::warn;
use thiserror::Error;

use crate::field::DistanceField;
use crate::neighbors::NeighborTable;
use crate::path::Path;

/// One cell of the [ScoreMap]: the cell position, the predecessor it was
/// cheapest to arrive from, and the accumulated score. A score of 0 means
/// the cell has not been reached; the origin is seeded with score 1 to keep
/// every reached score positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub x: i32,
    pub y: i32,
    pub from_x: i32,
    pub from_y: i32,
    pub score: i32,
}

impl SearchNode {
    const UNVISITED: SearchNode = SearchNode {
        x: 0,
        y: 0,
        from_x: -1,
        from_y: -1,
        score: 0,
    };

    pub fn visited(&self) -> bool {
        self.score > 0
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Flat `y * width + x` buffer of [SearchNode]s. Written during one search
/// invocation, then frozen for read-only inspection (e.g. visualizing the
/// explored region) until the next search on the same [PathSearch].
#[derive(Clone, Debug)]
pub struct ScoreMap {
    nodes: Vec<SearchNode>,
    width: usize,
    height: usize,
}

impl ScoreMap {
    fn new(width: usize, height: usize) -> ScoreMap {
        ScoreMap {
            nodes: vec![SearchNode::UNVISITED; width * height],
            width,
            height,
        }
    }

    fn reset(&mut self) {
        self.nodes.fill(SearchNode::UNVISITED);
    }

    fn ix(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> SearchNode {
        self.nodes[self.ix(x, y)]
    }

    pub fn score(&self, x: i32, y: i32) -> i32 {
        self.get(x, y).score
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest score reached by the last search; 0 if nothing was reached.
    /// Useful for scaling score-map visualizations.
    pub fn max_score(&self) -> i32 {
        self.nodes.iter().map(|n| n.score).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }
}

/// Per-agent search knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Half-width of the agent in cells. Cells whose clearance is below this
    /// are not entered, and the safe jump distance from a cell is its
    /// clearance minus this radius (floored at one cell).
    pub unit_radius: i32,
    /// Weight of the clearance preference term. Positive values make cheap
    /// paths hug walls; 0 ignores clearance beyond the feasibility gate.
    pub sdf_weight: i32,
    /// When [false], only unit steps are taken and the search degenerates to
    /// cardinal movement.
    pub allow_jumps: bool,
}

impl SearchParams {
    pub fn new(unit_radius: i32, sdf_weight: i32) -> SearchParams {
        SearchParams {
            unit_radius,
            sdf_weight,
            allow_jumps: true,
        }
    }
}

impl Default for SearchParams {
    /// A point-sized agent indifferent to walls, with jumps enabled.
    fn default() -> SearchParams {
        SearchParams::new(0, 0)
    }
}

/// Precondition violations. An infeasible search (no route under the radius
/// and jump constraints) is not an error; it is reported as `Ok(None)`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("point ({x}, {y}) lies outside the {width}x{height} search grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("distance field is {field_width}x{field_height} but the search grid is {width}x{height}")]
    FieldSizeMismatch {
        field_width: usize,
        field_height: usize,
        width: usize,
        height: usize,
    },
}

/// Frontier entry: the score a node had when queued, and its buffer index.
/// Ordered so that the [BinaryHeap] pops the lowest score first, with the
/// buffer index as a deterministic tie-breaker.
#[derive(Clone, Debug)]
struct FrontierEntry {
    score: i32,
    ix: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.ix == other.ix
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.ix.cmp(&self.ix))
    }
}

/// A reusable search over one grid. Owns its [ScoreMap] and frontier, so
/// independent agents each hold their own [PathSearch] and share nothing but
/// the [DistanceField] and [NeighborTable] they read.
#[derive(Clone, Debug)]
pub struct PathSearch {
    scores: ScoreMap,
    frontier: BinaryHeap<FrontierEntry>,
}

impl PathSearch {
    pub fn new(width: usize, height: usize) -> PathSearch {
        PathSearch {
            scores: ScoreMap::new(width, height),
            frontier: BinaryHeap::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.scores.width
    }

    pub fn height(&self) -> usize {
        self.scores.height
    }

    /// The score map written by the most recent [find_path](Self::find_path).
    pub fn score_map(&self) -> &ScoreMap {
        &self.scores
    }

    fn check_bounds(&self, point: Point) -> Result<(), SearchError> {
        if self.scores.in_bounds(point.x, point.y) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.scores.width,
                height: self.scores.height,
            })
        }
    }

    /// Runs a best-first search from `origin` and reconstructs the route to
    /// `destination` if one was found. `Ok(None)` means no route exists
    /// under the given `params`; see [Path] for the node order of a found
    /// route. The score map is fully rewritten on every call.
    pub fn find_path(
        &mut self,
        field: &DistanceField,
        neighbors: &NeighborTable,
        origin: Point,
        destination: Point,
        params: SearchParams,
    ) -> Result<Option<Path>, SearchError> {
        if field.width() != self.scores.width || field.height() != self.scores.height {
            return Err(SearchError::FieldSizeMismatch {
                field_width: field.width(),
                field_height: field.height(),
                width: self.scores.width,
                height: self.scores.height,
            });
        }
        self.check_bounds(origin)?;
        self.check_bounds(destination)?;

        self.scores.reset();
        self.frontier.clear();
        // Safety ceiling: the frontier should never outgrow the grid.
        let capacity = self.scores.width * self.scores.height;

        let origin_ix = self.scores.ix(origin.x, origin.y);
        self.scores.nodes[origin_ix] = SearchNode {
            x: origin.x,
            y: origin.y,
            from_x: -1,
            from_y: -1,
            score: 1,
        };
        self.frontier.push(FrontierEntry {
            score: 1,
            ix: origin_ix,
        });

        while let Some(FrontierEntry { score, ix }) = self.frontier.pop() {
            let node = self.scores.nodes[ix];
            // A cheaper route to this cell was queued after this entry;
            // the live entry has already been (or will be) expanded.
            if score > node.score {
                continue;
            }
            let clearance = field.clearance(node.x, node.y);
            // Floored at one cell so an agent can always take unit steps,
            // even where its radius exceeds the local clearance.
            let max_distance = (clearance - params.unit_radius).max(1);
            for offset in neighbors.offsets() {
                let step = offset.distance;
                if step > max_distance || (!params.allow_jumps && step > 1) {
                    continue;
                }
                let x = node.x + offset.dx;
                let y = node.y + offset.dy;
                if !self.scores.in_bounds(x, y) {
                    continue;
                }
                let target_clearance = field.clearance(x, y);
                // The agent would clip a wall at the landing cell. Cells
                // along the jump are not checked; clearance bounds how far
                // the jump can go in the first place.
                if target_clearance < params.unit_radius {
                    continue;
                }
                // Trapezoidal estimate of the clearance integral along the
                // jump; integer truncation slightly favors longer jumps.
                let integrated = (target_clearance + clearance) * (step + 1) / 2;
                let candidate = node.score + step + integrated * params.sdf_weight / 6;
                let target_ix = self.scores.ix(x, y);
                let target = &mut self.scores.nodes[target_ix];
                if target.score == 0 || candidate < target.score {
                    *target = SearchNode {
                        x,
                        y,
                        from_x: node.x,
                        from_y: node.y,
                        score: candidate,
                    };
                    if self.frontier.len() >= capacity {
                        warn!("frontier exceeded {} entries, dropping one", capacity);
                        continue;
                    }
                    self.frontier.push(FrontierEntry {
                        score: candidate,
                        ix: target_ix,
                    });
                }
            }
        }

        if !self.scores.get(destination.x, destination.y).visited() {
            return Ok(None);
        }
        Ok(Some(self.reconstruct(origin, destination)))
    }

    /// Walks predecessor links from the destination back to the origin,
    /// appending the origin node last. Capped at one node per grid cell.
    fn reconstruct(&self, origin: Point, destination: Point) -> Path {
        let capacity = self.scores.width * self.scores.height;
        let mut nodes: Vec<SearchNode> = unfold(destination, |current| {
            if *current == origin {
                return None;
            }
            let node = self.scores.get(current.x, current.y);
            if !node.visited() {
                return None;
            }
            *current = Point::new(node.from_x, node.from_y);
            Some(node)
        })
        .take(capacity)
        .collect();
        nodes.push(self.scores.get(origin.x, origin.y));
        Path::new(nodes)
    }
}
