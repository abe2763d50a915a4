pub mod display;
pub mod drop_zone;
pub mod loader;
pub mod notification;
pub mod prediction;
pub mod session;
pub mod staged_image;

pub use display::{BarModel, DisplayModel, Emphasis};
pub use drop_zone::DropZone;
pub use notification::{Notification, NotificationLevel, Notifications};
pub use prediction::{ClosenessEntry, PredictionResult, ResultSource};
pub use session::{Completion, Generation, Intake, IntakeToken, RequestState, Session};
pub use staged_image::{StagedImage, Upload, MAX_UPLOAD_BYTES};
