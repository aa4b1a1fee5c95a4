pub mod bucket_grid;
pub mod linear_scan;

/// Trait defining a spatial lookup over lattice cells.
/// This allows swapping between the bucketed grid and a linear reference scan.
pub trait SpatialIndex: Send + Sync {
    /// Rebuild the index with new points.
    fn set_points(&mut self, points: &[[f64; 3]]);

    /// Visit every point whose lattice cell lies within Chebyshev `radius` of `cell`.
    ///
    /// # Arguments
    /// * `cell` - The `[x, y]` lattice cell at the center of the query. It may lie outside the
    ///            grid, cells beyond the bounds simply contribute no points.
    /// * `radius` - Chebyshev radius in cells, `1` visits a 3x3 block.
    /// * `visitor` - A closure called once for each point index found.
    fn visit_neighbors<F>(&self, cell: [isize; 2], radius: usize, visitor: F)
    where
        F: FnMut(usize);

    /// Collects the indices visited by [`SpatialIndex::visit_neighbors`].
    fn neighbors(&self, cell: [isize; 2], radius: usize) -> Vec<usize> {
        let mut found = Vec::new();
        self.visit_neighbors(cell, radius, |index| found.push(index));
        found
    }
}

/// Lattice cell containing the planar position `(x, y)`.
pub fn cell_of(x: f64, y: f64) -> [isize; 2] {
    [x.floor() as isize, y.floor() as isize]
}
