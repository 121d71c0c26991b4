use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use sdf_pathfinding::{DistanceField, Metric, NeighborTable, PathSearch, SearchParams};

// In this example a path is found on a grid with shape
// .....
// .S...
// ..#..
// ...E.
// .....
// S marks the start
// E marks the end
fn main() {
    let mut mask = BoolGrid::new(5, 5, false);
    mask.set(2, 2, true);
    let field = DistanceField::compute(&mask, Metric::Euclidean, 10);
    let table = NeighborTable::default();
    let mut search = PathSearch::new(5, 5);
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    let result = search
        .find_path(&field, &table, start, end, SearchParams::new(1, 0))
        .unwrap();
    if let Some(path) = result {
        println!("A path has been found (end to start):");
        for node in path.nodes() {
            println!("({}, {}) score {}", node.x, node.y, node.score);
        }
        println!("Length: {:.2}", path.length());
    }
}
