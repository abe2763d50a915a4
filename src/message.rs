use crate::error::AppError;
use crate::model::{Generation, IntakeToken, PredictionResult, StagedImage};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    PickFile,
    FilesSelected(Vec<PathBuf>),
    DragEntered,
    DragLeft,
    FileDropped(PathBuf),
    ImageStaged(IntakeToken, Result<StagedImage, AppError>),
    Clear,
    Analyze,
    AnalysisFinished(Generation, Result<PredictionResult, AppError>),
    HealthChecked(bool),
    DismissNotification(u64),
}
