// canvas.rs - The two drawing surfaces
//
// Sphere: fixed 1000x500, redrawn as a radial gradient every frame.
// Noise:  full viewport at device resolution, blitted from the NoiseField.

use std::f64::consts::TAU;

use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use super::dom;
use crate::error::WebError;
use crate::render::{NoiseField, SphereFrame};
use crate::scene::{SPHERE_HEIGHT, SPHERE_WIDTH};

const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

fn context_2d(canvas: &HtmlCanvasElement, id: &str) -> Result<CanvasRenderingContext2d, WebError> {
    canvas
        .get_context("2d")
        .map_err(WebError::js)?
        .ok_or_else(|| WebError::NoContext(id.to_string()))?
        .dyn_into()
        .map_err(|_| WebError::NoContext(id.to_string()))
}

pub struct SphereCanvas {
    ctx: CanvasRenderingContext2d,
}

impl SphereCanvas {
    pub fn attach(id: &str) -> Result<Self, WebError> {
        let canvas: HtmlCanvasElement = dom::element(id)?;
        canvas.set_width(SPHERE_WIDTH);
        canvas.set_height(SPHERE_HEIGHT);
        Ok(Self { ctx: context_2d(&canvas, id)? })
    }

    pub fn draw(&self, f: &SphereFrame) -> Result<(), WebError> {
        self.ctx.clear_rect(0.0, 0.0, SPHERE_WIDTH as f64, SPHERE_HEIGHT as f64);

        let grd = self
            .ctx
            .create_radial_gradient(f.cx, f.cy, 0.0, f.cx, f.cy, f.radius)
            .map_err(WebError::js)?;
        grd.add_color_stop(0.0, &f.inner.to_css()).map_err(WebError::js)?;
        grd.add_color_stop(f.stop as f32, TRANSPARENT).map_err(WebError::js)?;

        self.ctx.set_fill_style_canvas_gradient(&grd);
        self.ctx.begin_path();
        self.ctx.arc(f.cx, f.cy, f.radius, 0.0, TAU).map_err(WebError::js)?;
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }
}

pub struct NoiseCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl NoiseCanvas {
    pub fn attach(id: &str) -> Result<Self, WebError> {
        let canvas: HtmlCanvasElement = dom::element(id)?;
        let ctx = context_2d(&canvas, id)?;
        Ok(Self { canvas, ctx })
    }

    /// Match the viewport; returns the backing size in device pixels
    pub fn fit_viewport(&self) -> Result<(u32, u32), WebError> {
        let win = dom::window()?;
        let w = win.inner_width().map_err(WebError::js)?.as_f64().unwrap_or(0.0);
        let h = win.inner_height().map_err(WebError::js)?.as_f64().unwrap_or(0.0);
        let dpr = win.device_pixel_ratio();

        let (pw, ph) = ((w * dpr) as u32, (h * dpr) as u32);
        self.canvas.set_width(pw);
        self.canvas.set_height(ph);

        let style = self.canvas.style();
        style.set_property("width", &format!("{w}px")).map_err(WebError::js)?;
        style.set_property("height", &format!("{h}px")).map_err(WebError::js)?;

        log::debug!("noise surface {pw}x{ph} (dpr {dpr})");
        Ok((pw, ph))
    }

    pub fn blit(&self, noise: &NoiseField) -> Result<(), WebError> {
        if noise.is_empty() {
            return Ok(());
        }
        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(noise.bytes()),
            noise.width(),
            noise.height(),
        )
        .map_err(WebError::js)?;
        self.ctx.put_image_data(&data, 0.0, 0.0).map_err(WebError::js)
    }
}
