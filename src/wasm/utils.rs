use crate::error::SurfaceError;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_GRID: &'static str = r#"
export const MIN_GRID_SIZE = 2;
export const DEFAULT_GRID_SIZE = 10;
"#;

pub fn to_js_error(err: SurfaceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
