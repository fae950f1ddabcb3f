// export.rs - Trace rows and PNG output

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use luminary_engine::render::composite;
use luminary_engine::Luminary;

pub fn print_header() {
    println!("{:>7}  {:>14}  {:>10}  {:>12}  {:>14}", "frame", "T (K)", "radius", "loss", "color");
}

pub fn print_row(frame: u64, world: &Luminary) {
    let (r, g, b) = world.sphere().inner.to_rgb();
    println!(
        "{:>7}  {:>14.2}  {:>10.3}  {:>12.4e}  {:>14}",
        frame,
        world.temperature(),
        world.radius(),
        world.loss(),
        format!("#{r:02x}{g:02x}{b:02x}"),
    );
}

pub fn write_png(path: &Path, world: &Luminary) -> Result<()> {
    let noise = world.noise();
    let pixels = composite(world.sphere(), noise);
    let img = RgbaImage::from_raw(noise.width(), noise.height(), pixels)
        .context("frame buffer does not match its dimensions")?;
    img.save(path).with_context(|| format!("failed to write {}", path.display()))
}
