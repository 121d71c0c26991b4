use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sdf_pathfinding::{DistanceField, Metric, NeighborTable, PathSearch, SearchParams};
use std::hint::black_box;

const WIDTH: usize = 80;
const HEIGHT: usize = 45;

/// Scatters square blocks over the grid, leaving a margin so the endpoints
/// stay open.
fn blocky_mask(rng: &mut StdRng) -> BoolGrid {
    let mut mask = BoolGrid::new(WIDTH, HEIGHT, false);
    for _ in 0..40 {
        let x = rng.gen_range(15..WIDTH - 15) as i32;
        let y = rng.gen_range(15..HEIGHT - 15) as i32;
        let s = rng.gen_range(1..=2);
        for dy in -s..=s {
            for dx in -s..=s {
                mask.set((x + dx) as usize, (y + dy) as usize, true);
            }
        }
    }
    mask
}

fn field_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mask = blocky_mask(&mut rng);
    for metric in [Metric::Euclidean, Metric::Chebyshev, Metric::Manhattan] {
        c.bench_function(format!("field 80x45, {metric:?}").as_str(), |b| {
            b.iter(|| black_box(DistanceField::compute(&mask, metric, 10)))
        });
    }
}

fn search_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mask = blocky_mask(&mut rng);
    let field = DistanceField::compute(&mask, Metric::Euclidean, 10);
    let table = NeighborTable::default();
    let origin = Point::new(5, 25);
    let destination = Point::new(75, 25);
    for (name, params) in [
        ("radius 1, wall affinity", SearchParams::new(1, 2)),
        ("radius 2", SearchParams::new(2, 0)),
        (
            "unit steps",
            SearchParams {
                unit_radius: 1,
                sdf_weight: 0,
                allow_jumps: false,
            },
        ),
    ] {
        let mut search = PathSearch::new(WIDTH, HEIGHT);
        c.bench_function(format!("search 80x45, {name}").as_str(), |b| {
            b.iter(|| {
                black_box(
                    search
                        .find_path(&field, &table, origin, destination, params)
                        .unwrap(),
                )
            })
        });
    }
}

criterion_group!(benches, field_bench, search_bench);
criterion_main!(benches);
