//! Integration test: file to path through the facade.

use std::io::Write;

use wayfind::prelude::*;

#[test]
fn csv_file_to_path() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        "0,0,0,0,0\n\
         0,0,0,0,0\n\
         100,100,100,100,0\n\
         0,0,0,0,0\n\
         0,0,0,0,0\n"
    )
    .unwrap();
    f.flush().unwrap();

    let grid = load_occupancy_csv(f.path()).unwrap();
    let start = Cell::from(Point::new(0, 0));
    let goal = Cell::from(Point::new(0, 4));

    let four = plan(&grid, start, goal, &SearchConfig::four_connected()).unwrap();
    assert_eq!(four.stats.cost, 12.0);
    assert!(four.path.contains(&Cell::new(2, 4)));

    let eight = plan(&grid, start, goal, &SearchConfig::eight_connected()).unwrap();
    assert!(eight.stats.cost < four.stats.cost);
    assert!(eight.path.contains(&Cell::new(2, 4)));
}

#[test]
fn metadata_maps_path_to_world() {
    let grid = Grid::free(4, 4)
        .unwrap()
        .with_meta(MapMeta::new(0.5, 10.0, 20.0).unwrap());
    let r = plan(&grid, Cell::new(0, 0), Cell::new(0, 3), &SearchConfig::default()).unwrap();
    let meta = grid.meta().unwrap();
    assert_eq!(meta.origin(), (10.0, 20.0));
    let world: Vec<(f64, f64)> = r.path.iter().map(|&c| meta.cell_to_world(c)).collect();
    assert_eq!(world.first(), Some(&(10.25, 20.25)));
    assert_eq!(world.last(), Some(&(11.75, 20.25)));
}
