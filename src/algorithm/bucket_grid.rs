use crate::algorithm::SpatialIndex;

/// A spatial index based on the unit lattice of a point grid.
///
/// Every point is binned into the lattice cell it was jittered inside of, so a query only
/// has to look at the cells of the requested block. Queries cost O(radius^2) regardless of
/// how many points the grid holds.
pub struct BucketIndex {
    /// Number of cells along each axis.
    pub grid_res: usize,
    /// Maximum valid cell coordinate as a float, used to clamp stray points.
    pub grid_limit: f64,
    /// The cell bins, each containing a list of point indices.
    pub grid_bins: Vec<Vec<usize>>,
}

impl BucketIndex {
    /// Creates an empty `BucketIndex` for a `size x size` lattice.
    pub fn new(size: usize) -> Self {
        BucketIndex {
            grid_res: size,
            grid_limit: (size as f64) - 1e-5,
            grid_bins: vec![Vec::new(); size * size],
        }
    }

    /// Creates a `BucketIndex` already filled with `points`.
    pub fn with_points(size: usize, points: &[[f64; 3]]) -> Self {
        let mut index = Self::new(size);
        index.set_points(points);
        index
    }

    /// Calculates the linear index of the bin containing the given coordinates.
    pub fn get_bin_index(&self, x: f64, y: f64) -> usize {
        let ix = x.clamp(0.0, self.grid_limit) as usize;
        let iy = y.clamp(0.0, self.grid_limit) as usize;
        ix + iy * self.grid_res
    }
}

impl SpatialIndex for BucketIndex {
    fn set_points(&mut self, points: &[[f64; 3]]) {
        let total_bins = self.grid_res * self.grid_res;
        self.grid_bins.iter_mut().for_each(|bin| bin.clear());
        if self.grid_bins.len() != total_bins {
            self.grid_bins = vec![Vec::new(); total_bins];
        }

        for (i, p) in points.iter().enumerate() {
            let bin_idx = self.get_bin_index(p[0], p[1]);
            self.grid_bins[bin_idx].push(i);
        }
    }

    fn visit_neighbors<F>(&self, cell: [isize; 2], radius: usize, mut visitor: F)
    where
        F: FnMut(usize),
    {
        // Clip the block to the lattice.
        let r = radius as isize;
        let last = self.grid_res as isize - 1;
        let (x0, x1) = ((cell[0] - r).max(0), (cell[0] + r).min(last));
        let (y0, y1) = ((cell[1] - r).max(0), (cell[1] + r).min(last));

        for iy in y0..=y1 {
            for ix in x0..=x1 {
                for &j in &self.grid_bins[(ix + iy * self.grid_res as isize) as usize] {
                    visitor(j);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::linear_scan::LinearScan;

    fn lattice_points(size: usize) -> Vec<[f64; 3]> {
        let mut points = Vec::new();
        for y in 0..size {
            for x in 0..size {
                points.push([x as f64 + 0.5, y as f64 + 0.5, 0.0]);
            }
        }
        points
    }

    #[test]
    fn test_bucket_indexing() {
        let index = BucketIndex::new(10);

        assert_eq!(index.get_bin_index(0.5, 0.5), 0);
        assert_eq!(index.get_bin_index(1.5, 0.5), 1);
        assert_eq!(index.get_bin_index(0.5, 1.5), 10);
        // Stray points are clamped onto the border cells.
        assert_eq!(index.get_bin_index(-3.0, 12.0), 90);
    }

    #[test]
    fn test_bucket_neighbors_block() {
        let points = lattice_points(5);
        let index = BucketIndex::with_points(5, &points);

        let mut found = index.neighbors([2, 2], 1);
        found.sort_unstable();
        assert_eq!(found, vec![6, 7, 8, 11, 12, 13, 16, 17, 18]);
    }

    #[test]
    fn test_bucket_neighbors_out_of_bounds() {
        let points = lattice_points(3);
        let index = BucketIndex::with_points(3, &points);

        let mut corner = index.neighbors([-1, -1], 1);
        corner.sort_unstable();
        assert_eq!(corner, vec![0]);

        assert!(index.neighbors([10, 10], 1).is_empty());
        assert!(index.neighbors([-5, 1], 2).is_empty());
    }

    #[test]
    fn test_bucket_neighbors_whole_grid() {
        let points = lattice_points(5);
        let index = BucketIndex::with_points(5, &points);

        let mut found = index.neighbors([2, 2], 2);
        found.sort_unstable();
        assert_eq!(found, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_bucket_neighbors_radius_beyond_grid() {
        let points = lattice_points(2);
        let index = BucketIndex::with_points(2, &points);
        let scan = LinearScan::with_points(&points);

        for (cell, radius) in [([-2, -2], 3), ([4, -1], 4), ([-3, 1], 5), ([0, 0], 9)] {
            let mut found = index.neighbors(cell, radius);
            let mut expected = scan.neighbors(cell, radius);
            found.sort_unstable();
            expected.sort_unstable();
            assert_eq!(found, vec![0, 1, 2, 3], "cell {:?} radius {}", cell, radius);
            assert_eq!(found, expected, "cell {:?} radius {}", cell, radius);
        }
        assert!(index.neighbors([-3, -3], 2).is_empty());
    }
}
