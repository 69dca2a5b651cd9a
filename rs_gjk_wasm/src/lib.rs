// rs_gjk_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the GJK library.
// Point sets cross the boundary as flat [x0, y0, z0, x1, y1, z1, ...] arrays.

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;
use web_sys::console;
use rs_gjk::apis::easy_gjk::EasyGjk;
use rs_gjk::interactions::{GjkResult, Reduction};
use rs_gjk::models::Simplex;
use rs_gjk::utils::GjkConfig;

fn to_points(flat: &[f64]) -> Result<Vec<(f64, f64, f64)>, JsValue> {
    if flat.len() % 3 != 0 {
        return Err(JsValue::from_str("Point array length must be a multiple of 3"));
    }
    Ok(flat.chunks_exact(3).map(|c| (c[0], c[1], c[2])).collect())
}

fn to_flat(points: &[(f64, f64, f64)]) -> Float64Array {
    let flat: Vec<f64> = points.iter().flat_map(|&(x, y, z)| [x, y, z]).collect();
    Float64Array::from(flat.as_slice())
}

#[wasm_bindgen]
pub struct WasmGjk {
    gjk: EasyGjk,
}

#[wasm_bindgen]
impl WasmGjk {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            gjk: EasyGjk::new(),
        }
    }

    #[wasm_bindgen]
    pub fn with_config(max_iterations: usize, tolerance: f64) -> Result<WasmGjk, JsValue> {
        EasyGjk::with_config(GjkConfig::new(Some(max_iterations), Some(tolerance)))
            .map(|gjk| Self { gjk })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn intersects(&self, points: &[f64]) -> Result<WasmGjkResult, JsValue> {
        let points = to_points(points)?;
        let result = self.gjk.intersects(&points).map_err(|e| JsValue::from_str(&e.to_string()))?;
        if result.is_degenerate() {
            console::warn_1(&JsValue::from_str(&format!("GJK gave up: {:?}", result.status)));
        }
        Ok(WasmGjkResult(result))
    }

    /// Closest feature of `simplex` (1 to 4 flat points) to the query point.
    #[wasm_bindgen]
    pub fn classify(&self, simplex: &[f64], x: f64, y: f64, z: f64) -> Result<WasmReduction, JsValue> {
        let simplex = Simplex::from_points(&to_points(simplex)?).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.gjk.classify(&simplex, (x, y, z))
            .map(WasmReduction)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmGjk {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub struct WasmGjkResult(GjkResult);

#[wasm_bindgen]
impl WasmGjkResult {
    #[wasm_bindgen(getter)]
    pub fn intersecting(&self) -> bool {
        self.0.intersecting
    }

    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> usize {
        self.0.iterations
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        format!("{:?}", self.0.status)
    }

    #[wasm_bindgen(getter)]
    pub fn simplex(&self) -> Float64Array {
        to_flat(self.0.simplex.points())
    }
}

#[wasm_bindgen]
pub struct WasmReduction(Reduction);

#[wasm_bindgen]
impl WasmReduction {
    /// Number of vertices of the closest feature; 4 means the point is enclosed.
    #[wasm_bindgen(getter)]
    pub fn feature_size(&self) -> usize {
        self.0.simplex.size()
    }

    #[wasm_bindgen(getter)]
    pub fn distance(&self) -> f64 {
        self.0.distance
    }

    #[wasm_bindgen(getter)]
    pub fn feature(&self) -> Float64Array {
        to_flat(self.0.simplex.points())
    }

    #[wasm_bindgen(getter)]
    pub fn direction(&self) -> Float64Array {
        let (x, y, z) = self.0.direction;
        Float64Array::from([x, y, z].as_slice())
    }
}
