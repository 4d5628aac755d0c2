//! Procedural rendering of the map-pin icon
//!
//! The icon is a solid blue square with a white pin glyph: a round head and a
//! downward pointing tip. Shapes are filled without anti-aliasing so the output
//! is fully opaque and identical across runs.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::fmt;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Background blue (#4285f4)
pub const BACKGROUND: Rgba<u8> = Rgba([66, 133, 244, 255]);

/// Color of the pin glyph
pub const GLYPH: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Error returned when asked to render an icon with no pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSize(pub u32);

impl fmt::Display for InvalidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid icon size {}: size must be positive", self.0)
    }
}

impl std::error::Error for InvalidSize {}

/// Pixel geometry of the pin for a given icon size
///
/// All values are truncated to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinGeometry {
    pub center_x: i64,
    pub center_y: i64,
    pub pin_radius: i64,
    pub pin_height: i64,
    /// Vertical center of the pin head, nudged up by a tenth of the pin height
    pub circle_y: i64,
    pub tip_half_width: i64,
}

impl PinGeometry {
    pub fn for_size(size: u32) -> Self {
        let size = size as i64;
        let center_x = size / 2;
        let center_y = size / 2;
        let pin_radius = (size as f64 * 0.15) as i64;
        let pin_height = (size as f64 * 0.4) as i64;
        let circle_y = center_y - (pin_height as f64 * 0.1) as i64;
        let tip_half_width = (pin_radius as f64 * 0.5) as i64;

        Self {
            center_x,
            center_y,
            pin_radius,
            pin_height,
            circle_y,
            tip_half_width,
        }
    }

    /// Vertices of the tip in pixel indices: apex first, then the left and right corners
    pub fn tip(&self) -> [(i64, i64); 3] {
        [
            (self.center_x, self.circle_y + self.pin_radius),
            (self.center_x - self.tip_half_width, self.circle_y),
            (self.center_x + self.tip_half_width, self.circle_y),
        ]
    }
}

/// Render the pin icon as a `size`x`size` RGBA image
pub fn render(size: u32) -> Result<RgbaImage> {
    if size == 0 {
        return Err(InvalidSize(size).into());
    }

    let mut pixmap = Pixmap::new(size, size)
        .with_context(|| format!("Failed to allocate {size}x{size} canvas"))?;
    pixmap.fill(to_color(BACKGROUND));

    let geometry = PinGeometry::for_size(size);
    fill_head(&mut pixmap, &geometry);
    fill_tip(&mut pixmap, &geometry);

    into_image(pixmap)
}

// Both shapes cover whole pixels: a pixel is painted when its center lies
// inside the path, so pixel index `i` spans `[i, i + 1)` in path space.

/// Fill the disc inscribed in the inclusive pixel box `[cx - r, cy - r, cx + r, cy + r]`
fn fill_head(pixmap: &mut Pixmap, geometry: &PinGeometry) {
    let cx = geometry.center_x as f32 + 0.5;
    let cy = geometry.circle_y as f32 + 0.5;
    let radius = geometry.pin_radius as f32 + 0.5;

    if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
        pixmap.fill_path(&path, &glyph_paint(), FillRule::Winding, Transform::identity(), None);
    }
}

/// Fill the tip so that its apex and both top corner pixels are painted
fn fill_tip(pixmap: &mut Pixmap, geometry: &PinGeometry) {
    let [apex, left, right] = geometry.tip();

    let mut pb = PathBuilder::new();
    pb.move_to(left.0 as f32, left.1 as f32);
    pb.line_to(right.0 as f32 + 1.0, right.1 as f32);
    pb.line_to(apex.0 as f32 + 0.5, apex.1 as f32 + 1.0);
    pb.close();

    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &glyph_paint(), FillRule::Winding, Transform::identity(), None);
    }
}

fn glyph_paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_color(GLYPH));
    paint.anti_alias = false;
    paint
}

fn to_color(Rgba([r, g, b, a]): Rgba<u8>) -> Color {
    Color::from_rgba8(r, g, b, a)
}

// Every pixel is opaque, so the premultiplied pixmap data is plain RGBA.
fn into_image(pixmap: Pixmap) -> Result<RgbaImage> {
    let (width, height) = (pixmap.width(), pixmap.height());
    RgbaImage::from_raw(width, height, pixmap.take())
        .context("Canvas data does not match its dimensions")
}
