pub mod config;
pub mod mosaic;
pub mod size_class;

pub use config::{AppConfig, ConfigError, SizeConfig, SizesConfig};
pub use mosaic::{MosaicReport, VariantReport};
pub use size_class::SizeClass;
