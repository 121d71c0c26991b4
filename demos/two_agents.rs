use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sdf_pathfinding::{
    DistanceField, Metric, NeighborTable, PathCursor, PathSearch, SearchParams,
    DEFAULT_CLAMP_RADIUS,
};

const WIDTH: usize = 80;
const HEIGHT: usize = 45;

// Two agents crossing the same randomized grid: a small one that prefers
// running close to walls, and a wide one that cannot fit through narrow
// passages and takes the short route instead. Both animate a few frames of
// movement along their paths.
fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut mask = BoolGrid::new(WIDTH, HEIGHT, false);
    for _ in 0..40 {
        let x = rng.gen_range(15..WIDTH - 15) as i32;
        let y = rng.gen_range(15..HEIGHT - 15) as i32;
        let s = rng.gen_range(1..=2);
        let blocked = rng.gen_bool(0.5);
        for dy in -s..=s {
            for dx in -s..=s {
                mask.set((x + dx) as usize, (y + dy) as usize, blocked);
            }
        }
    }

    let field = DistanceField::compute(&mask, Metric::Euclidean, DEFAULT_CLAMP_RADIUS);
    let table = NeighborTable::default();

    // Endpoint roles are swapped so each path already runs in travel order.
    let travel_from = Point::new(5, 25);
    let travel_to = Point::new(75, 25);

    let mut agents = [
        ("rat (radius 1, hugs walls)", SearchParams::new(1, 2)),
        ("cat (radius 2, short route)", SearchParams::new(2, 0)),
    ]
    .map(|(name, params)| {
        let mut search = PathSearch::new(WIDTH, HEIGHT);
        let path = search
            .find_path(&field, &table, travel_to, travel_from, params)
            .unwrap();
        (name, path, PathCursor::new())
    });

    for (name, path, _) in &agents {
        match path {
            Some(path) => println!("{name}: path length {:.2}, {} nodes", path.length(), path.len()),
            None => println!("{name}: no path"),
        }
    }

    // Simulate a second of movement at 60 frames per second.
    let dt = 1.0 / 60.0;
    let speed = 3.0;
    for frame in 0..60 {
        for (name, path, cursor) in &mut agents {
            let Some(path) = path else { continue };
            if let Some(pos) = cursor.advance(path, speed, dt) {
                if frame % 15 == 0 {
                    println!("frame {frame:>2} {name}: ({:.2}, {:.2})", pos.x, pos.y);
                }
            }
        }
    }
}
