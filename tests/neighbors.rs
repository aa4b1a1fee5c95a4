use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trimesh_grid::{BucketIndex, LinearScan, PointGrid, SpatialIndex};

/// Points spread over almost their whole cell, wider than generation allows.
fn jittered_grid(size: usize, seed: u64) -> PointGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            points.push([
                x as f64 + rng.gen_range(0.0..0.99),
                y as f64 + rng.gen_range(0.0..0.99),
                rng.gen_range(0.0..1.0),
            ]);
        }
    }
    PointGrid::from_points(size, points).unwrap()
}

#[test]
fn test_neighbors_are_exactly_the_block() {
    let size = 7;
    let grid = jittered_grid(size, 3);
    let index = BucketIndex::with_points(size, grid.points());

    for cy in -1..=size as isize {
        for cx in -1..=size as isize {
            let mut found = index.neighbors([cx, cy], 1);
            found.sort_unstable();

            let mut expected = Vec::new();
            for (i, _) in grid.points().iter().enumerate() {
                let (ix, iy) = grid.lattice(i);
                if (ix as isize - cx).abs() <= 1 && (iy as isize - cy).abs() <= 1 {
                    expected.push(i);
                }
            }

            assert_eq!(found, expected, "block around ({}, {}) mismatch", cx, cy);
        }
    }
}

#[test]
fn test_neighbors_match_linear_scan_random_queries() {
    let size = 12;
    let grid = jittered_grid(size, 99);
    let bucketed = BucketIndex::with_points(size, grid.points());
    let scanned = LinearScan::with_points(grid.points());

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..400 {
        let cell = [rng.gen_range(-20..32), rng.gen_range(-20..32)];
        let radius = rng.gen_range(1..2 * size);

        let mut a = bucketed.neighbors(cell, radius);
        let mut b = scanned.neighbors(cell, radius);
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b, "cell {:?} radius {}", cell, radius);
    }
}

#[test]
fn test_neighbors_have_no_duplicates() {
    let size = 5;
    let grid = jittered_grid(size, 17);
    let index = BucketIndex::with_points(size, grid.points());

    let mut found = index.neighbors([2, 2], 3);
    let total = found.len();
    found.sort_unstable();
    found.dedup();
    assert_eq!(found.len(), total);
    assert_eq!(total, size * size);
}

#[test]
fn test_neighbors_outside_grid_are_empty() {
    let grid = jittered_grid(4, 1);
    let index = BucketIndex::with_points(4, grid.points());

    assert!(index.neighbors([-2, -2], 1).is_empty());
    assert!(index.neighbors([5, 0], 1).is_empty());
    assert!(index.neighbors([0, 100], 1).is_empty());
}

#[test]
fn test_large_radius_from_outside_reaches_grid() {
    for size in [2, 3, 6] {
        let grid = jittered_grid(size, size as u64);
        let bucketed = BucketIndex::with_points(size, grid.points());
        let scanned = LinearScan::with_points(grid.points());
        let s = size as isize;

        for cell in [[-2, -2], [-s, s / 2], [2 * s, 2 * s], [s + 1, -1]] {
            for radius in [size, size + 1, 2 * size + 2] {
                let mut a = bucketed.neighbors(cell, radius);
                let mut b = scanned.neighbors(cell, radius);
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b, "size {} cell {:?} radius {}", size, cell, radius);
            }
        }

        let mut all = bucketed.neighbors([-2, -2], size + 1);
        all.sort_unstable();
        assert_eq!(all, (0..size * size).collect::<Vec<_>>());
    }
}

#[test]
fn test_border_points_bin_identically() {
    let size = 3;
    let eps = 1e-9;
    let last = size as f64 - eps;
    let points = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [last, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.5, 1.5, 0.0],
        [last, 1.0, 0.0],
        [0.0, last, 0.0],
        [1.0, last, 0.0],
        [last, last, 0.0],
    ];
    let grid = PointGrid::from_points(size, points).unwrap();
    let bucketed = BucketIndex::with_points(size, grid.points());
    let scanned = LinearScan::with_points(grid.points());

    for cy in -2..5 {
        for cx in -2..5 {
            for radius in 0..4 {
                let mut a = bucketed.neighbors([cx, cy], radius);
                let mut b = scanned.neighbors([cx, cy], radius);
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b, "cell ({}, {}) radius {}", cx, cy, radius);
            }
        }
    }

    let mut stray = grid.points().to_vec();
    stray[8] = [size as f64, 0.5, 0.0];
    assert!(PointGrid::from_points(size, stray).is_err());
}
