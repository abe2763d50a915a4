//! Upload-analyze state container.
//!
//! Every transition of the staged image, the request state and the published
//! result goes through [`Session`]. Outcomes of asynchronous work are tagged
//! with the [`Generation`] they were issued under and are dropped if the
//! session has moved on since. File intakes carry an [`IntakeToken`] the
//! same way, so a load that finishes after a clear or a newer pick is ignored.

use super::{PredictionResult, ResultSource, StagedImage, Upload};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Identity of one staging. Bumped by every stage and every clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Identity of one file intake. Bumped by every new intake and every clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct IntakeToken(u64);

impl IntakeToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// What applying a finished intake did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Intake {
    Staged(Generation),
    Rejected(AppError),
    /// A newer intake or a clear superseded this one.
    Stale,
}

/// Handed out when a request may be issued.
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub generation: Generation,
    pub upload: Upload,
}

/// What applying an outcome did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Published(ResultSource),
    Failed(AppError),
    /// The outcome belongs to an earlier staging and was discarded.
    Stale,
}

#[derive(Debug, Default)]
pub struct Session {
    staged: Option<StagedImage>,
    result: Option<PredictionResult>,
    request: RequestState,
    generation: Generation,
    intake: IntakeToken,
}

impl Session {
    pub fn staged(&self) -> Option<&StagedImage> {
        self.staged.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn intake(&self) -> IntakeToken {
        self.intake
    }

    /// Starts a new intake, superseding any that is still loading.
    pub fn begin_intake(&mut self) -> IntakeToken {
        self.intake = self.intake.next();
        self.intake
    }

    /// Applies a finished load if it is still the latest intake. A rejected
    /// file leaves the current staging untouched.
    pub fn finish_intake(
        &mut self,
        token: IntakeToken,
        outcome: Result<StagedImage, AppError>,
    ) -> Intake {
        if token != self.intake {
            log::debug!(
                "Discarding intake {:?}, session is at {:?}",
                token,
                self.intake
            );
            return Intake::Stale;
        }

        match outcome {
            Ok(image) => Intake::Staged(self.stage(image)),
            Err(err) => Intake::Rejected(err),
        }
    }

    /// Replaces whatever was staged before and forgets its result.
    pub fn stage(&mut self, image: StagedImage) -> Generation {
        log::info!(
            "Staged {} ({}, {} bytes)",
            image.file_name,
            image.mime,
            image.size
        );
        self.staged = Some(image);
        self.reset()
    }

    pub fn clear(&mut self) -> Generation {
        if let Some(image) = self.staged.take() {
            log::info!("Cleared {}", image.file_name);
        }
        self.intake = self.intake.next();
        self.reset()
    }

    fn reset(&mut self) -> Generation {
        self.result = None;
        self.request = RequestState::Idle;
        self.generation = self.generation.next();
        self.generation
    }

    /// Moves to `InFlight` and returns the request to issue.
    ///
    /// `Ok(None)` means no request must be sent: one is already in flight, or
    /// a result is already published for this image.
    pub fn begin_analysis(&mut self) -> Result<Option<AnalysisTicket>, AppError> {
        let image = self.staged.as_ref().ok_or(AppError::NoImageSelected)?;

        match self.request {
            RequestState::InFlight | RequestState::Succeeded => Ok(None),
            RequestState::Idle | RequestState::Failed => {
                self.request = RequestState::InFlight;
                log::info!("Analyzing {}", image.file_name);
                Ok(Some(AnalysisTicket {
                    generation: self.generation,
                    upload: image.upload(),
                }))
            }
        }
    }

    pub fn complete(
        &mut self,
        generation: Generation,
        outcome: Result<PredictionResult, AppError>,
    ) -> Completion {
        if generation != self.generation || self.request != RequestState::InFlight {
            log::warn!(
                "Discarding outcome for generation {:?}, session is at {:?} ({:?})",
                generation,
                self.generation,
                self.request
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                let source = result.source;
                log::info!("Prediction published: {} ({source:?})", result.label);
                self.result = Some(result);
                self.request = RequestState::Succeeded;
                Completion::Published(source)
            }
            Err(err) => {
                log::error!("Analysis failed: {err}");
                self.request = RequestState::Failed;
                Completion::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::model::ClosenessEntry;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn image(name: &str) -> StagedImage {
        StagedImage {
            path: PathBuf::from(format!("/scans/{name}")),
            file_name: name.to_string(),
            mime: "image/png".to_string(),
            size: 4,
            bytes: Arc::from(vec![1u8, 2, 3, 4]),
            preview: None,
            dimensions: None,
        }
    }

    fn backend_result(label: &str) -> PredictionResult {
        PredictionResult {
            label: label.to_string(),
            closeness: Some(vec![ClosenessEntry {
                class: label.to_string(),
                score: 100.0,
            }]),
            source: ResultSource::Backend,
        }
    }

    fn analyzed(name: &str) -> Session {
        let mut session = Session::default();
        session.stage(image(name));
        let ticket = session.begin_analysis().unwrap().unwrap();
        session.complete(ticket.generation, Ok(backend_result("Mild Dementia")));
        session
    }

    #[test]
    fn analyze_without_image_is_rejected() {
        let mut session = Session::default();
        assert_eq!(
            session.begin_analysis().unwrap_err(),
            AppError::NoImageSelected
        );
        assert_eq!(session.request_state(), RequestState::Idle);
    }

    #[test]
    fn staging_resets_result_and_state() {
        let mut session = analyzed("first.png");
        assert_eq!(session.request_state(), RequestState::Succeeded);
        assert!(session.result().is_some());

        session.stage(image("second.png"));
        assert_eq!(session.request_state(), RequestState::Idle);
        assert!(session.result().is_none());
        assert_eq!(session.staged().unwrap().file_name, "second.png");
    }

    #[test]
    fn staging_after_failure_resets_to_idle() {
        let mut session = Session::default();
        session.stage(image("first.png"));
        let ticket = session.begin_analysis().unwrap().unwrap();
        session.complete(
            ticket.generation,
            Err(AppError::unreachable("connection reset")),
        );
        assert_eq!(session.request_state(), RequestState::Failed);

        session.stage(image("second.png"));
        assert_eq!(session.request_state(), RequestState::Idle);
        assert!(session.result().is_none());
        assert_eq!(session.staged().unwrap().file_name, "second.png");
    }

    #[test]
    fn staging_during_flight_resets_to_idle() {
        let mut session = Session::default();
        session.stage(image("first.png"));
        session.begin_analysis().unwrap().unwrap();
        assert_eq!(session.request_state(), RequestState::InFlight);

        session.stage(image("second.png"));
        assert_eq!(session.request_state(), RequestState::Idle);
    }

    #[test]
    fn second_analyze_while_in_flight_is_noop() {
        let mut session = Session::default();
        session.stage(image("scan.png"));

        assert!(session.begin_analysis().unwrap().is_some());
        assert!(session.begin_analysis().unwrap().is_none());
        assert_eq!(session.request_state(), RequestState::InFlight);
    }

    #[test]
    fn analyze_after_success_is_noop() {
        let mut session = analyzed("scan.png");
        assert!(session.begin_analysis().unwrap().is_none());
        assert_eq!(session.request_state(), RequestState::Succeeded);
    }

    #[test]
    fn failure_keeps_result_empty_and_allows_retry() {
        let mut session = Session::default();
        session.stage(image("scan.png"));
        let ticket = session.begin_analysis().unwrap().unwrap();

        let completion = session.complete(
            ticket.generation,
            Err(AppError::AnalysisFailed(FailureKind::Status(500))),
        );
        assert_eq!(
            completion,
            Completion::Failed(AppError::AnalysisFailed(FailureKind::Status(500)))
        );
        assert_eq!(session.request_state(), RequestState::Failed);
        assert!(session.result().is_none());

        let retry = session.begin_analysis().unwrap().unwrap();
        assert_eq!(retry.generation, ticket.generation);
        assert_eq!(session.request_state(), RequestState::InFlight);
    }

    #[test]
    fn stale_outcome_after_restage_is_discarded() {
        let mut session = Session::default();
        session.stage(image("first.png"));
        let first = session.begin_analysis().unwrap().unwrap();

        session.stage(image("second.png"));
        let completion = session.complete(first.generation, Ok(backend_result("No Dementia")));

        assert_eq!(completion, Completion::Stale);
        assert!(session.result().is_none());
        assert_eq!(session.request_state(), RequestState::Idle);
    }

    #[test]
    fn stale_outcome_does_not_hijack_newer_request() {
        let mut session = Session::default();
        session.stage(image("first.png"));
        let first = session.begin_analysis().unwrap().unwrap();

        session.stage(image("second.png"));
        let second = session.begin_analysis().unwrap().unwrap();

        assert_eq!(
            session.complete(first.generation, Ok(backend_result("No Dementia"))),
            Completion::Stale
        );
        assert_eq!(session.request_state(), RequestState::InFlight);

        assert_eq!(
            session.complete(second.generation, Ok(backend_result("Mild Dementia"))),
            Completion::Published(ResultSource::Backend)
        );
        assert_eq!(session.result().unwrap().label, "Mild Dementia");
    }

    #[test]
    fn clear_discards_everything_and_invalidates_flight() {
        let mut session = Session::default();
        session.stage(image("scan.png"));
        let ticket = session.begin_analysis().unwrap().unwrap();

        session.clear();
        assert!(session.staged().is_none());
        assert_eq!(session.request_state(), RequestState::Idle);
        assert_eq!(
            session.complete(ticket.generation, Ok(backend_result("No Dementia"))),
            Completion::Stale
        );
        assert!(session.result().is_none());
    }

    #[test]
    fn intake_finishing_after_clear_is_discarded() {
        let mut session = Session::default();
        session.stage(image("first.png"));
        let token = session.begin_intake();

        session.clear();
        assert_eq!(
            session.finish_intake(token, Ok(image("second.png"))),
            Intake::Stale
        );
        assert!(session.staged().is_none());
    }

    #[test]
    fn older_intake_cannot_replace_newer_one() {
        let mut session = Session::default();
        let picked = session.begin_intake();
        let dropped = session.begin_intake();

        assert!(matches!(
            session.finish_intake(dropped, Ok(image("dropped.png"))),
            Intake::Staged(_)
        ));
        assert_eq!(
            session.finish_intake(picked, Ok(image("picked.png"))),
            Intake::Stale
        );
        assert_eq!(session.staged().unwrap().file_name, "dropped.png");
    }

    #[test]
    fn rejected_intake_keeps_current_staging() {
        let mut session = analyzed("scan.png");
        let generation = session.generation();
        let token = session.begin_intake();

        assert_eq!(
            session.finish_intake(token, Err(AppError::TooLarge(11 * 1024 * 1024))),
            Intake::Rejected(AppError::TooLarge(11 * 1024 * 1024))
        );
        assert_eq!(session.staged().unwrap().file_name, "scan.png");
        assert_eq!(session.generation(), generation);
        assert_eq!(session.request_state(), RequestState::Succeeded);
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut session = Session::default();
        let a = session.stage(image("a.png"));
        let b = session.clear();
        let c = session.stage(image("c.png"));
        assert!(a < b && b < c);
        assert_eq!(session.generation(), c);
    }

    #[test]
    fn upload_shares_bytes_with_staged_image() {
        let mut session = Session::default();
        session.stage(image("scan.png"));
        let ticket = session.begin_analysis().unwrap().unwrap();

        assert_eq!(ticket.upload.file_name, "scan.png");
        assert_eq!(ticket.upload.mime, "image/png");
        assert!(Arc::ptr_eq(
            &ticket.upload.bytes,
            &session.staged().unwrap().bytes
        ));
    }
}
