pub mod image_source;
pub mod mosaic_pipeline;

pub use image_source::{decode_base64_image, decode_image_bytes, load_image_file, split_data_url};
pub use mosaic_pipeline::{ConvertOptions, MosaicPipeline};
