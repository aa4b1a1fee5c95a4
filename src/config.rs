use crate::error::{Result, SurfaceError};
use crate::grid::{Jitter, MIN_GRID_SIZE};
use crate::mesh::MeshOptions;
use crate::triangulation::probe::ProbeSettings;

/// Grid size used when none is given.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Everything needed to produce one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Number of points along each axis, at least 2.
    pub grid_size: usize,
    pub jitter: Jitter,
    pub probe: ProbeSettings,
    /// Seed for the jitter RNG, fresh entropy when `None`.
    pub seed: Option<u64>,
    /// Maximum number of frontier edges to process, unbounded when `None`.
    pub edge_budget: Option<usize>,
    pub mesh: MeshOptions,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            jitter: Jitter::default(),
            probe: ProbeSettings::default(),
            seed: None,
            edge_budget: None,
            mesh: MeshOptions::default(),
        }
    }
}

impl SurfaceConfig {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_probe(mut self, probe: ProbeSettings) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_edge_budget(mut self, budget: usize) -> Self {
        self.edge_budget = Some(budget);
        self
    }

    pub fn with_mesh(mut self, mesh: MeshOptions) -> Self {
        self.mesh = mesh;
        self
    }

    /// Checks every field, grid size first so bad input fails before anything else.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(SurfaceError::InvalidInput { grid_size: self.grid_size });
        }
        self.jitter.validate()?;
        self.probe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SurfaceConfig::default();
        assert_eq!(config.grid_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_grid_size_first() {
        let config = SurfaceConfig::new(1).with_jitter(Jitter::new(2.0, 0.0));
        assert_eq!(config.validate(), Err(SurfaceError::InvalidInput { grid_size: 1 }));
    }

    #[test]
    fn test_validate_rejects_bad_probe() {
        let probe = ProbeSettings { step: -0.1, ..ProbeSettings::default() };
        let config = SurfaceConfig::new(4).with_probe(probe);
        assert!(matches!(config.validate(), Err(SurfaceError::InvalidConfig(_))));
    }
}
