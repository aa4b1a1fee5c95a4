use crate::config::SurfaceConfig;
use crate::error::Result;
use crate::grid::PointGrid;
use crate::mesh::MeshBuffers;
use crate::triangulation::{Triangle, Triangulation, Triangulator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// A triangulated surface: the sampled grid together with the triangles connecting it.
#[derive(Clone, Debug)]
pub struct Surface {
    config: SurfaceConfig,
    grid: PointGrid,
    triangulation: Triangulation,
}

impl Surface {
    /// Samples a grid and triangulates it, seeding the RNG from `config.seed` when present.
    pub fn generate(config: SurfaceConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate_with_rng(config, &mut rng)
    }

    /// Like [`Surface::generate`] but draws jitter from `rng`, ignoring `config.seed`.
    pub fn generate_with_rng<R: Rng>(config: SurfaceConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let grid = PointGrid::generate(config.grid_size, rng, config.jitter)?;
        Ok(Self::from_grid(grid, config))
    }

    /// Triangulates an existing grid. The grid's size takes precedence over `config.grid_size`.
    pub fn from_grid(grid: PointGrid, mut config: SurfaceConfig) -> Self {
        config.grid_size = grid.size();
        let triangulation = Triangulator::new(&grid)
            .with_settings(config.probe)
            .with_edge_budget(config.edge_budget)
            .run();

        Self { config, grid, triangulation }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn grid(&self) -> &PointGrid {
        &self.grid
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangulation.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangulation.len()
    }

    /// `false` when the edge budget cut the run short.
    pub fn is_complete(&self) -> bool {
        self.triangulation.is_complete()
    }

    /// Flattens the triangles into position and normal buffers per the configured mesh options.
    pub fn buffers(&self) -> MeshBuffers {
        MeshBuffers::build_for_grid(
            self.grid.points(),
            &self.triangulation.triangles,
            self.grid.size(),
            self.config.mesh,
        )
    }
}

/// Generates independent surfaces in parallel, one result per config.
pub fn generate_surfaces(configs: &[SurfaceConfig]) -> Vec<Result<Surface>> {
    configs
        .par_iter()
        .map(|config| Surface::generate(*config))
        .collect()
}

/// Generates a `grid_size x grid_size` surface and returns its vertex buffers.
pub fn surface_buffers(grid_size: usize, seed: Option<u64>) -> Result<MeshBuffers> {
    let config = SurfaceConfig { seed, ..SurfaceConfig::new(grid_size) };
    Ok(Surface::generate(config)?.buffers())
}
