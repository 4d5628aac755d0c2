use crate::pin;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Icon sizes shipped with the extension
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// File name of the icon with the given size, e.g. `icon48.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Render every size and write it to `out_dir`, returning the written paths in order
pub fn generate_icons(sizes: &[u32], out_dir: &Path) -> Result<Vec<PathBuf>> {
    create_dir_all(out_dir).with_context(|| {
        format!("Can't create output directory {}", out_dir.display())
    })?;

    println!("Generating icons...");
    let mut written = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let icon = pin::render(size)?;
        let path = out_dir.join(icon_file_name(size));
        save_png(&icon, &path)?;
        println!("✓ Created: {} ({size}x{size})", path.display());
        written.push(path);
    }

    println!("\nAll icons were generated successfully!");
    Ok(written)
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    write_png(image, &mut out_file)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}
