use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, GenericImageView};
use mosaic_quantize::Canvas;
use rand::Rng;

use crate::error::ConvertError;
use crate::models::{AppConfig, MosaicReport, SizeClass, VariantReport};
use crate::rendering::write_previews;
use crate::services::image_source::{decode_base64_image, load_image_file};

/// One conversion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub size: SizeClass,
    /// Variant selector: 0 baseline, -1 all, 1..=2L a single variant
    pub selector: i32,
    /// Write preview PNGs, if the configuration allows it
    pub save_preview: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            size: SizeClass::default(),
            selector: -1,
            save_preview: false,
        }
    }
}

/// Pipeline that orchestrates decode → canvas → quantize → report
pub struct MosaicPipeline {
    config: Arc<AppConfig>,
}

impl MosaicPipeline {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Convert a base64 image, with or without a data-URL prefix
    pub fn convert_base64<R: Rng + ?Sized>(
        &self,
        input: &str,
        options: ConvertOptions,
        rng: &mut R,
    ) -> Result<MosaicReport, ConvertError> {
        let image = decode_base64_image(input)?;
        self.convert(image, options, rng)
    }

    /// Convert an image file
    pub fn convert_file<R: Rng + ?Sized>(
        &self,
        path: &Path,
        options: ConvertOptions,
        rng: &mut R,
    ) -> Result<MosaicReport, ConvertError> {
        let image = load_image_file(path)?;
        self.convert(image, options, rng)
    }

    /// Convert a decoded image.
    ///
    /// The image is consumed and released as soon as the canvas is built.
    /// `rng` drives inventory balancing and the report name.
    pub fn convert<R: Rng + ?Sized>(
        &self,
        image: DynamicImage,
        options: ConvertOptions,
        rng: &mut R,
    ) -> Result<MosaicReport, ConvertError> {
        let spec = *self.config.size(options.size);
        let (width, height) = image.dimensions();
        tracing::info!(
            width,
            height,
            size = %options.size,
            canvas = spec.canvas,
            selector = options.selector,
            "Converting image"
        );

        let canvas = Canvas::from_image(&image, spec.canvas);
        drop(image);

        let quantizer = self.config.quantizer(options.size)?;
        let variants = quantizer.quantize(&canvas, options.selector, rng)?;

        let mut name_bytes = [0u8; 16];
        rng.fill_bytes(&mut name_bytes);
        let name = hex::encode(name_bytes);

        let preview_dir = if options.save_preview && self.config.save_preview {
            let dir = self.config.output_dir.join(&name);
            let written = write_previews(&variants, quantizer.table().bin_count(), &dir)?;
            tracing::info!(dir = %dir.display(), files = written.len(), "Saved previews");
            Some(dir)
        } else {
            if options.save_preview {
                tracing::debug!("Preview requested but disabled by configuration");
            }
            None
        };

        let table = quantizer.table();
        let variants: Vec<VariantReport> = variants
            .iter()
            .map(|variant| VariantReport::from_variant(variant, table))
            .collect();

        tracing::info!(name = %name, variants = variants.len(), "Conversion finished");

        Ok(MosaicReport {
            name,
            size: options.size,
            canvas: spec.canvas,
            variants,
            preview_dir,
        })
    }
}
