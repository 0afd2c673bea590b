//! Raster rendering of the grayscale map and path overlays.

use anyhow::Context;
use image::{Rgb, RgbImage};
use skypath_core::{GrayscaleMap, Point};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Efficient,
    Escape,
}

impl PathKind {
    pub fn color(self) -> Rgb<u8> {
        match self {
            PathKind::Efficient => Rgb([0, 255, 0]),
            PathKind::Escape => Rgb([255, 255, 0]),
        }
    }
}

/// One pixel per cell: column maps to x, row maps to y.
pub fn render_grayscale(map: &GrayscaleMap) -> RgbImage {
    RgbImage::from_fn(map.width() as u32, map.height() as u32, |x, y| {
        let value = map.value(Point::new(x as i32, y as i32)).unwrap_or(0);
        Rgb([value, value, value])
    })
}

pub fn overlay_path(image: &mut RgbImage, path: &[Point], kind: PathKind) {
    let color = kind.color();
    for point in path {
        if point.x < 0 || point.y < 0 {
            continue;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x < image.width() && y < image.height() {
            image.put_pixel(x, y, color);
        }
    }
}

pub fn save_png(image: &RgbImage, path: &Path) -> anyhow::Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write image {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(())
}
