use sway::{initialize, ChainConfig, ChainKind, Simulation, Vec2};
use wasm_bindgen::prelude::*;

/// Longest frame the demo will simulate; longer gaps (tab switches) are dropped.
const MAX_FRAME_DT: f32 = 1.0 / 30.0;
/// Frames are advanced in slices no longer than this.
const MAX_STEP_DT: f32 = 1.0 / 240.0;

// ---- Grass Demo ----

#[wasm_bindgen]
pub struct GrassDemo {
    sim: Simulation<f32>,
}

#[wasm_bindgen]
impl GrassDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(anchor_x: f32, anchor_y: f32, links: usize, rigid: bool) -> Result<GrassDemo, JsValue> {
        let kind = if rigid { ChainKind::Rigid } else { ChainKind::Particle };
        let config = ChainConfig::new(kind, links)
            .with_anchor(Vec2::new(anchor_x, anchor_y))
            .with_link_length(25.0);
        let sim = initialize(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(GrassDemo { sim })
    }

    pub fn update(&mut self, dt: f32) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_DT);
            self.sim.step(step);
            remaining -= step;
        }
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Orientation of each link in radians; zero for particle chains.
    pub fn angles(&self) -> Vec<f32> {
        self.sim.angles()
    }

    pub fn body_count(&self) -> usize {
        self.sim.body_count()
    }
}
