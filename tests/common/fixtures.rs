//! Test fixtures and constants.

use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Seeds used across tests
pub mod seeds {
    pub const DEFAULT: u64 = 42;
    pub const OTHER: u64 = 7;
}

/// YAML for a small, fast configuration with previews enabled
pub fn small_config_yaml(output_dir: &std::path::Path) -> String {
    format!(
        r#"
sizes:
  small:
    canvas: 8
    budget: 16
  medium:
    canvas: 16
    block: 2
    budget: 16
color_limits: [51, 102, 153, 204]
color_weights: [0, 1, 2, 3, 4]
contrast_levels: [20, 40]
save_preview: true
output_dir: {}
"#,
        output_dir.display()
    )
}

/// Horizontal grey ramp from black to white
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let image = RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(image)
}

/// Single-color image
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// Encode an image as PNG bytes
pub fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("PNG encoding should succeed");
    buf.into_inner()
}

/// Encode an image as a browser-style data URL
pub fn data_url(image: &DynamicImage) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(png_bytes(image));
    format!("data:image/png;base64,{payload}")
}
