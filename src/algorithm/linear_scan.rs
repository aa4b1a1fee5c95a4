use crate::algorithm::{cell_of, SpatialIndex};

/// Reference index that checks every point on every query.
///
/// Returns the same points as [`BucketIndex`](crate::BucketIndex) but in O(N) per query.
/// Useful for cross-checking the bucketed lookup and for tiny grids.
#[derive(Default)]
pub struct LinearScan {
    cells: Vec<[isize; 2]>,
}

impl LinearScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: &[[f64; 3]]) -> Self {
        let mut index = Self::new();
        index.set_points(points);
        index
    }
}

impl SpatialIndex for LinearScan {
    fn set_points(&mut self, points: &[[f64; 3]]) {
        self.cells = points.iter().map(|p| cell_of(p[0], p[1])).collect();
    }

    fn visit_neighbors<F>(&self, cell: [isize; 2], radius: usize, mut visitor: F)
    where
        F: FnMut(usize),
    {
        let r = radius as isize;
        for (j, c) in self.cells.iter().enumerate() {
            if (c[0] - cell[0]).abs() <= r && (c[1] - cell[1]).abs() <= r {
                visitor(j);
            }
        }
    }
}
