use std::io::Cursor;
use std::path::{Path, PathBuf};

use mosaic_quantize::{PixelGrid, Variant};

use crate::error::PreviewError;

/// Pixels per grid cell in preview images
pub const DEFAULT_CELL_SIZE: u32 = 16;

/// Render a grid as an 8-bit grayscale PNG, one `cell` x `cell` square per brick.
///
/// Bin 0 is black and the last bin white, with the rest spread evenly.
pub fn render_preview(
    grid: &PixelGrid,
    bin_count: usize,
    cell: u32,
) -> Result<Vec<u8>, PreviewError> {
    let width = grid.width() as u32 * cell;
    let height = grid.height() as u32 * cell;
    if width == 0 || height == 0 {
        return Err(PreviewError::UnsupportedDimensions { width, height });
    }

    let levels = grey_levels(bin_count);
    let mut data = Vec::with_capacity((width * height) as usize);
    for row in grid.rows() {
        let line: Vec<u8> = row
            .iter()
            .flat_map(|&index| {
                let grey = levels.get(index as usize).copied().unwrap_or(0);
                std::iter::repeat(grey).take(cell as usize)
            })
            .collect();
        for _ in 0..cell {
            data.extend_from_slice(&line);
        }
    }

    encode_png(width, height, &data)
}

/// Write one preview PNG per variant into `dir`, creating it if needed.
pub fn write_previews(
    variants: &[Variant],
    bin_count: usize,
    dir: &Path,
) -> Result<Vec<PathBuf>, PreviewError> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(variants.len());
    for (position, variant) in variants.iter().enumerate() {
        let png = render_preview(variant.grid(), bin_count, DEFAULT_CELL_SIZE)?;
        let path = dir.join(preview_file_name(position, variant));
        std::fs::write(&path, png)?;
        tracing::debug!(path = %path.display(), "Wrote preview");
        written.push(path);
    }
    Ok(written)
}

fn preview_file_name(position: usize, variant: &Variant) -> String {
    let suffix = if variant.is_combined() { "_combined" } else { "" };
    format!(
        "variant_{position}_contrast_{}{suffix}.png",
        variant.contrast()
    )
}

/// Grey value per bin, evenly spaced over 0..=255.
fn grey_levels(bin_count: usize) -> Vec<u8> {
    if bin_count <= 1 {
        return vec![0; bin_count];
    }
    let max_level = (bin_count - 1) as u32;
    (0..bin_count as u32)
        .map(|i| ((i * 255 + max_level / 2) / max_level).min(255) as u8)
        .collect()
}

fn encode_png(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>, PreviewError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PreviewError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| PreviewError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_quantize::VariantKind;

    fn decode(png_bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(Cursor::new(png_bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_grey_levels() {
        assert_eq!(grey_levels(5), vec![0, 64, 128, 191, 255]);
        assert_eq!(grey_levels(2), vec![0, 255]);
        assert_eq!(grey_levels(1), vec![0]);
    }

    #[test]
    fn test_render_preview_scales_cells() {
        let grid = PixelGrid::from_flat(vec![0, 4, 2, 1], 2, 2).unwrap();
        let png_bytes = render_preview(&grid, 5, 3).unwrap();

        let (info, pixels) = decode(&png_bytes);
        assert_eq!((info.width, info.height), (6, 6));
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        // first row: three black then three white pixels
        assert_eq!(&pixels[0..6], &[0, 0, 0, 255, 255, 255]);
        // last row belongs to the second grid row
        assert_eq!(&pixels[30..36], &[128, 128, 128, 64, 64, 64]);
    }

    #[test]
    fn test_render_preview_empty_grid() {
        let grid = PixelGrid::from_flat(vec![], 0, 0).unwrap();
        assert!(matches!(
            render_preview(&grid, 5, 4),
            Err(PreviewError::UnsupportedDimensions { .. })
        ));
    }

    #[test]
    fn test_write_previews_names_files() {
        let dir = tempfile::tempdir().unwrap();
        let grid = PixelGrid::filled(2, 2, 1u8);
        let variants = vec![
            Variant::new(VariantKind::Baseline, grid.clone(), vec![0, 4]),
            Variant::new(VariantKind::Combined(-20), grid, vec![0, 4]),
        ];

        let written = write_previews(&variants, 2, &dir.path().join("abc")).unwrap();

        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("variant_0_contrast_0.png"));
        assert!(written[1].ends_with("variant_1_contrast_-20_combined.png"));
        assert!(written.iter().all(|path| path.exists()));
    }
}
