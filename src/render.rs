// render.rs - Per-frame drawing data
//
// Two layers:
//   sphere = radial gradient, inner color at the center, transparent black
//            from GRADIENT_STOP * radius outward, clipped to the radius
//   noise  = RGBA buffer, cleared every frame, ~1% of pixels opaque white
//
// The browser draws the sphere with a canvas gradient; `shade` reproduces
// that gradient in software for the snapshot tool and tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::color::{color_for_temperature, Color};
use crate::scene::{GRADIENT_STOP, SPHERE_CENTER};
use crate::sim::SimulationState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereFrame {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub inner: Color,
    pub stop: f64,
}

impl SphereFrame {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            cx: SPHERE_CENTER.0,
            cy: SPHERE_CENTER.1,
            radius: state.radius(),
            inner: color_for_temperature(state.temperature()),
            stop: GRADIENT_STOP,
        }
    }

    /// Premultiplied RGBA (0-255 color, 0-1 alpha) at a point, None outside the disc
    pub fn shade(&self, x: f64, y: f64) -> Option<[f64; 4]> {
        let d = ((x - self.cx).powi(2) + (y - self.cy).powi(2)).sqrt();
        if d > self.radius {
            return None;
        }
        let t = (d / (self.radius * self.stop)).min(1.0);
        let a = 1.0 - t;
        Some([self.inner.r * a, self.inner.g * a, self.inner.b * a, a])
    }
}

pub struct NoiseField {
    w: u32,
    h: u32,
    density: f64,
    out: Vec<u8>,
    rng: SmallRng,
}

impl NoiseField {
    /// `density` is clamped to [0, 1]; NaN lights nothing
    pub fn new(w: u32, h: u32, density: f64, seed: u64) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        Self {
            w,
            h,
            density,
            out: vec![0; (w as usize) * (h as usize) * 4],
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.out = vec![0; (w as usize) * (h as usize) * 4];
    }

    /// Fresh, uncorrelated field
    pub fn regenerate(&mut self) {
        self.out.fill(0);
        for px in self.out.chunks_exact_mut(4) {
            if self.rng.gen_bool(self.density) {
                px.fill(0xFF);
            }
        }
    }

    pub fn lit(&self) -> usize {
        self.out.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    pub fn bytes(&self) -> &[u8] { &self.out }
    pub fn ptr(&self) -> *const u8 { self.out.as_ptr() }
    pub fn len(&self) -> usize { self.out.len() }
    pub fn is_empty(&self) -> bool { self.out.is_empty() }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}

/// Noise then sphere, source-over, into an opaque black RGBA buffer of the noise size
pub fn composite(sphere: &SphereFrame, noise: &NoiseField) -> Vec<u8> {
    let (w, h) = (noise.width(), noise.height());
    let mut out = Vec::with_capacity(noise.len());

    for (i, px) in noise.bytes().chunks_exact(4).enumerate() {
        let x = (i as u32 % w.max(1)) as f64 + 0.5;
        let y = (i as u32 / w.max(1)) as f64 + 0.5;

        let na = px[3] as f64 / 255.0;
        let mut rgb = [px[0] as f64 * na, px[1] as f64 * na, px[2] as f64 * na];

        if let Some([r, g, b, a]) = sphere.shade(x, y) {
            rgb = [r + rgb[0] * (1.0 - a), g + rgb[1] * (1.0 - a), b + rgb[2] * (1.0 - a)];
        }

        out.extend(rgb.iter().map(|c| c.round().clamp(0.0, 255.0) as u8));
        out.push(0xFF);
    }

    debug_assert_eq!(out.len(), (w as usize) * (h as usize) * 4);
    out
}
