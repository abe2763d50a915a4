use super::{StagedImage, MAX_UPLOAD_BYTES};
use crate::error::AppError;
use crate::image_pipeline::{Preview, PreviewPipeline, SNIFF_LEN};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Only the first of several selected or dropped files is staged.
pub fn first_candidate(paths: Vec<PathBuf>) -> Option<PathBuf> {
    paths.into_iter().next()
}

/// Type is checked before size.
pub fn validate(mime: &str, size: u64) -> Result<(), AppError> {
    if !mime.starts_with("image/") {
        return Err(AppError::InvalidType(mime.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::TooLarge(size));
    }
    Ok(())
}

pub async fn load_image(path: PathBuf) -> Result<StagedImage, AppError> {
    log::info!("Loading image: {}", path.display());

    let mut file = File::open(&path)
        .await
        .map_err(|err| unreadable(&path, err))?;
    let size = file
        .metadata()
        .await
        .map_err(|err| unreadable(&path, err))?
        .len();

    let mut bytes = Vec::with_capacity(SNIFF_LEN);
    (&mut file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut bytes)
        .await
        .map_err(|err| unreadable(&path, err))?;

    let mime = PreviewPipeline::sniff_mime(&bytes);
    validate(mime, size).inspect_err(|err| log::warn!("{}: {err}", path.display()))?;

    // The file may have grown since it was measured.
    read_capped(&mut file, &mut bytes)
        .await
        .map_err(|err| unreadable(&path, err))?;
    validate(mime, bytes.len() as u64)?;

    let bytes: Arc<[u8]> = Arc::from(bytes);
    let preview = extract_preview(Arc::clone(&bytes)).await;

    Ok(StagedImage {
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string()),
        path,
        mime: mime.to_string(),
        size: bytes.len() as u64,
        dimensions: preview.as_ref().map(|p| (p.width, p.height)),
        preview: preview.map(|p| p.handle),
        bytes,
    })
}

/// Appends the rest of `reader` to `bytes`, stopping one byte past the upload
/// limit so an oversized stream is never fully buffered.
async fn read_capped<R>(reader: &mut R, bytes: &mut Vec<u8>) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let remaining = (MAX_UPLOAD_BYTES + 1).saturating_sub(bytes.len() as u64);
    reader.take(remaining).read_to_end(bytes).await
}

async fn extract_preview(bytes: Arc<[u8]>) -> Option<Preview> {
    match tokio::task::spawn_blocking(move || PreviewPipeline::render(&bytes)).await {
        Ok(Ok(preview)) => Some(preview),
        Ok(Err(err)) => {
            log::warn!("Unable to build image preview: {err}");
            None
        }
        Err(err) => {
            log::warn!("Preview decoding task failed: {err}");
            None
        }
    }
}

fn unreadable(path: &Path, err: std::io::Error) -> AppError {
    let message = format!("{}: {err}", path.display());
    log::error!("{message}");
    AppError::Unreadable(message)
}
