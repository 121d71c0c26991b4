//! Distance-to-nearest-obstacle field over a grid. The field is an
//! approximate steering signal: values are rounded to integers and clamped
//! to a small radius, and the computation is a brute-force relaxation of a
//! window around every obstacle rather than an exact transform.

use core::fmt;

use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;

use crate::lookup::ceil_sqrt;
use crate::DEFAULT_CLAMP_RADIUS;

/// Distance metric used when relaxing the cells around an obstacle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Euclidean,
    Chebyshev,
    Manhattan,
}

impl Metric {
    /// Rounded distance of the offset `(dx, dy)` under this metric.
    pub fn distance(self, dx: i32, dy: i32) -> i32 {
        match self {
            Metric::Euclidean => ceil_sqrt(dx * dx + dy * dy),
            Metric::Chebyshev => dx.abs().max(dy.abs()),
            Metric::Manhattan => dx.abs() + dy.abs(),
        }
    }
}

/// Per-cell rounded distance to the nearest blocked cell, clamped to
/// `clamp_radius`. A cell still holding `clamp_radius` after a recompute
/// means "no obstacle within range", not an exact distance, so callers must
/// not treat the clamp value as measured.
///
/// The field is always recomputed in full from the obstacle mask; there is
/// no incremental update.
#[derive(Clone, Debug)]
pub struct DistanceField {
    cells: SimpleGrid<u8>,
    clamp_radius: u8,
}

impl DistanceField {
    /// An uncomputed field where every cell reads `clamp_radius`, which is
    /// also the correct field for a mask without obstacles.
    pub fn new(width: usize, height: usize, clamp_radius: u8) -> DistanceField {
        DistanceField {
            cells: SimpleGrid::new(width, height, clamp_radius),
            clamp_radius,
        }
    }

    /// Computes the field for `mask` in one go. Equivalent to [new](Self::new)
    /// followed by [recompute](Self::recompute).
    pub fn compute(mask: &BoolGrid, metric: Metric, clamp_radius: u8) -> DistanceField {
        let mut field = DistanceField::new(mask.width, mask.height, clamp_radius);
        field.recompute(mask, metric);
        field
    }

    /// Fully recomputes the field from `mask`: every cell resets to the
    /// clamp value, then for every blocked cell the surrounding window of
    /// `clamp_radius` cells (clipped to the grid) relaxes toward the metric
    /// distance to that obstacle. Cost is `O(obstacles * clamp_radius^2)`.
    ///
    /// If the mask dimensions differ from the field's, the field buffer is
    /// reallocated to match.
    pub fn recompute(&mut self, mask: &BoolGrid, metric: Metric) {
        let w = mask.width;
        let h = mask.height;
        if self.cells.width != w || self.cells.height != h {
            self.cells = SimpleGrid::new(w, h, self.clamp_radius);
        } else {
            for y in 0..h {
                for x in 0..w {
                    self.cells.set(x, y, self.clamp_radius);
                }
            }
        }
        info!(
            "Recomputing {}x{} distance field ({:?} metric)",
            w, h, metric
        );
        let clamp = self.clamp_radius as i32;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                if !mask.get(x as usize, y as usize) {
                    continue;
                }
                self.cells.set(x as usize, y as usize, 0);
                let min_x = (x - clamp).max(0);
                let min_y = (y - clamp).max(0);
                let max_x = (x + clamp).min(w as i32 - 1);
                let max_y = (y + clamp).min(h as i32 - 1);
                for j in min_y..=max_y {
                    for i in min_x..=max_x {
                        let d = metric.distance(x - i, y - j);
                        if d < clamp && d < self.cells.get(i as usize, j as usize) as i32 {
                            self.cells.set(i as usize, j as usize, d as u8);
                        }
                    }
                }
            }
        }
    }

    /// The clearance of a cell: its distance-field value as an [i32] for
    /// direct use in search arithmetic. Coordinates must be in bounds.
    pub fn clearance(&self, x: i32, y: i32) -> i32 {
        self.cells.get(x as usize, y as usize) as i32
    }

    pub fn clearance_point(&self, point: Point) -> i32 {
        self.clearance(point.x, point.y)
    }

    pub fn clamp_radius(&self) -> u8 {
        self.clamp_radius
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    /// Read-only view of the underlying buffer, e.g. for visualization.
    pub fn cells(&self) -> &SimpleGrid<u8> {
        &self.cells
    }
}

impl Default for DistanceField {
    fn default() -> DistanceField {
        DistanceField {
            cells: SimpleGrid::default(),
            clamp_radius: DEFAULT_CLAMP_RADIUS,
        }
    }
}

impl fmt::Display for DistanceField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Distance field:")?;
        for y in 0..self.cells.height {
            let values = (0..self.cells.width)
                .map(|x| self.cells.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
