pub mod preview;

pub use preview::{render_preview, write_previews, DEFAULT_CELL_SIZE};
