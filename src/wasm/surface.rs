use crate::config::SurfaceConfig;
use crate::mesh::{MeshBuffers, MeshOptions};
use crate::surface::Surface;
use crate::wasm::utils::to_js_error;
use wasm_bindgen::prelude::*;

// --- Surface ---

#[wasm_bindgen(js_name = Surface)]
pub struct SurfaceWASM {
    inner: Surface,
    buffers: MeshBuffers,
}

#[wasm_bindgen(js_class = Surface)]
impl SurfaceWASM {
    /// Generates a centered surface of `grid_size x grid_size` points.
    #[wasm_bindgen(constructor)]
    pub fn new(grid_size: usize, seed: Option<u64>) -> Result<SurfaceWASM, JsValue> {
        let config = SurfaceConfig {
            seed,
            mesh: MeshOptions { center: true, face_up: false },
            ..SurfaceConfig::new(grid_size)
        };
        Self::from_config(config)
    }

    /// Samples a new grid with the same settings.
    pub fn regenerate(&mut self, seed: Option<u64>) -> Result<(), JsValue> {
        let config = SurfaceConfig { seed, ..*self.inner.config() };
        *self = Self::from_config(config)?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> usize { self.inner.grid().size() }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize { self.inner.triangle_count() }

    #[wasm_bindgen(getter)]
    pub fn complete(&self) -> bool { self.inner.is_complete() }

    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f32> { self.buffers.positions.clone() }

    #[wasm_bindgen(getter)]
    pub fn normals(&self) -> Vec<f32> { self.buffers.normals.clone() }

    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> { self.inner.grid().flat_points() }
}

impl SurfaceWASM {
    fn from_config(config: SurfaceConfig) -> Result<SurfaceWASM, JsValue> {
        let inner = Surface::generate(config).map_err(to_js_error)?;
        let buffers = inner.buffers();
        Ok(SurfaceWASM { inner, buffers })
    }
}
