use crate::error::{Result, SurfaceError};
use rand::Rng;

/// Smallest grid that still contains an edge.
pub const MIN_GRID_SIZE: usize = 2;

/// Widest accepted in-plane jitter scale.
///
/// Up to this scale every lattice quad stays strictly convex, so each quad splits into exactly
/// two triangles and a 2x2 grid never yields more than two.
pub const MAX_XY_JITTER: f64 = 1.0 / 3.0;

/// Jitter scales applied to lattice points.
///
/// Each coordinate is displaced by a uniform sample in `[0, scale)`. The in-plane scale lies in
/// `[0, MAX_XY_JITTER]`, which also keeps every point inside its lattice cell. The height
/// scale lies in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jitter {
    /// Scale of the in-plane displacement along X and Y.
    pub xy: f64,
    /// Scale of the height displacement along Z.
    pub z: f64,
}

impl Jitter {
    pub fn new(xy: f64, z: f64) -> Self {
        Self { xy, z }
    }

    /// Jitter with no displacement at all, producing a perfectly regular lattice.
    pub fn none() -> Self {
        Self { xy: 0.0, z: 0.0 }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_XY_JITTER).contains(&self.xy) {
            return Err(SurfaceError::InvalidConfig(format!(
                "xy jitter must lie in [0, {}], got {}",
                MAX_XY_JITTER, self.xy
            )));
        }
        if !(0.0..=1.0).contains(&self.z) {
            return Err(SurfaceError::InvalidConfig(format!(
                "z jitter must lie in [0, 1], got {}",
                self.z
            )));
        }
        Ok(())
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self { xy: MAX_XY_JITTER, z: 1.0 }
    }
}

/// A square grid of jittered sample points.
///
/// Points live in a flat arena in row-major order and are referred to by index everywhere
/// else in the crate, so two points with equal coordinates are still distinct samples.
#[derive(Clone, Debug)]
pub struct PointGrid {
    size: usize,
    points: Vec<[f64; 3]>,
}

impl PointGrid {
    /// Generates `size * size` jittered points, `point[y * size + x] = (x + jx, y + jy, jz)`.
    pub fn generate<R: Rng>(size: usize, rng: &mut R, jitter: Jitter) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(SurfaceError::InvalidInput { grid_size: size });
        }
        jitter.validate()?;

        let _span = tracing::debug_span!("generate_grid", size).entered();

        let mut points = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let jx = rng.gen_range(0.0..1.0) * jitter.xy;
                let jy = rng.gen_range(0.0..1.0) * jitter.xy;
                let jz = rng.gen_range(0.0..1.0) * jitter.z;
                points.push([x as f64 + jx, y as f64 + jy, jz]);
            }
        }

        tracing::debug!(points = points.len(), "generated point grid");
        Ok(Self { size, points })
    }

    /// Builds a grid from explicit row-major positions.
    ///
    /// Every point must lie inside the `[0, size)` square in X and Y. Keeping each point in its
    /// own lattice cell is up to the caller.
    pub fn from_points(size: usize, points: Vec<[f64; 3]>) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(SurfaceError::InvalidInput { grid_size: size });
        }
        if points.len() != size * size {
            return Err(SurfaceError::InvalidConfig(format!(
                "expected {} points for a {}x{} grid, got {}",
                size * size,
                size,
                size,
                points.len()
            )));
        }
        let extent = 0.0..size as f64;
        let stray = points
            .iter()
            .position(|p| !extent.contains(&p[0]) || !extent.contains(&p[1]));
        if let Some(i) = stray {
            return Err(SurfaceError::InvalidConfig(format!(
                "point {} at ({}, {}) lies outside the {}x{} grid",
                i, points[i][0], points[i][1], size, size
            )));
        }
        Ok(Self { size, points })
    }

    /// Number of points along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    pub fn point(&self, index: usize) -> [f64; 3] {
        self.points[index]
    }

    /// Linear index of lattice position `(ix, iy)`.
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.size + ix
    }

    /// Lattice position `(ix, iy)` of the point at `index`.
    pub fn lattice(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    /// Positions flattened to `[x0, y0, z0, x1, ...]`.
    pub fn flat_points(&self) -> Vec<f64> {
        self.points.iter().flatten().copied().collect()
    }
}
