//! Writing rendered frames to disk.

use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{ImageFormat, RgbImage};
use luma_renderer::ImageBuffer;

/// Save `frame` as PNG, BMP or PPM, chosen by the file extension.
pub fn save(frame: &ImageBuffer, path: &Path) -> Result<()> {
    let format = match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Pnm)) => format,
        _ => bail!(
            "Unsupported output format for {} (use .png, .bmp or .ppm)",
            path.display()
        ),
    };

    let image = RgbImage::from_raw(frame.width, frame.height, frame.to_rgb8())
        .context("Frame buffer does not match its dimensions")?;

    image
        .save_with_format(path, format)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {}x{} frame to {}", frame.width, frame.height, path.display());
    Ok(())
}
