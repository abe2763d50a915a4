pub mod analysis_panel;
pub mod header;
pub mod image_viewer;
pub mod result_panel;
pub mod upload_panel;

pub use analysis_panel::analysis_panel;
pub use header::{header, BackendStatus};
pub use image_viewer::image_panel;
pub use result_panel::result_panel;
pub use upload_panel::upload_panel;
