use iced::widget::image::Handle;
use std::path::PathBuf;
use std::sync::Arc;

/// Largest file accepted for analysis.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct StagedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub size: u64,
    pub bytes: Arc<[u8]>,
    pub preview: Option<Handle>,
    pub dimensions: Option<(u32, u32)>,
}

/// Everything a prediction request needs, detached from the preview.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl StagedImage {
    pub fn upload(&self) -> Upload {
        Upload {
            file_name: self.file_name.clone(),
            mime: self.mime.clone(),
            bytes: Arc::clone(&self.bytes),
        }
    }
}
