//! Prediction service access
//!
//! [`PredictionBackend`] is the seam between the client state machine and the
//! network. [`analyze`] runs one request and applies the demo fallback policy.

mod demo;
mod http;

pub use demo::demo_result;
pub use http::HttpBackend;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::DemoConfig;
use crate::error::AppError;
use crate::model::{PredictionResult, Upload};

#[async_trait]
pub trait PredictionBackend: Send + Sync {
    /// Sends exactly one request carrying the upload.
    async fn predict(&self, upload: Upload) -> Result<PredictionResult, AppError>;

    /// Whether the service answers at all. Informational only.
    async fn health(&self) -> bool {
        true
    }
}

/// When and how to substitute a demo result for an unreachable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    pub enabled: bool,
    pub delay: Duration,
}

impl From<&DemoConfig> for FallbackPolicy {
    fn from(config: &DemoConfig) -> Self {
        Self {
            enabled: config.enabled,
            delay: Duration::from_millis(config.delay_ms),
        }
    }
}

pub async fn analyze(
    backend: Arc<dyn PredictionBackend>,
    upload: Upload,
    fallback: FallbackPolicy,
) -> Result<PredictionResult, AppError> {
    match backend.predict(upload).await {
        Err(err) if fallback.enabled && err.is_unreachable() => {
            log::warn!("{err}; substituting a demo result");
            tokio::time::sleep(fallback.delay).await;
            Ok(demo_result())
        }
        outcome => outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::demo::DEMO_LABELS;
    use crate::error::FailureKind;
    use crate::model::{ClosenessEntry, ResultSource};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedBackend {
        outcome: Result<PredictionResult, AppError>,
        calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn new(outcome: Result<PredictionResult, AppError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl PredictionBackend for ScriptedBackend {
        async fn predict(&self, _upload: Upload) -> Result<PredictionResult, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn upload() -> Upload {
        Upload {
            file_name: "scan.png".into(),
            mime: "image/png".into(),
            bytes: Arc::from(vec![0u8; 8]),
        }
    }

    fn enabled() -> FallbackPolicy {
        FallbackPolicy {
            enabled: true,
            delay: Duration::from_secs(2),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unreachable_service_falls_back_after_delay() {
        let backend = ScriptedBackend::new(Err(AppError::unreachable("connection refused")));
        let started = tokio::time::Instant::now();

        let result = analyze(backend.clone(), upload(), enabled()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert!(DEMO_LABELS.contains(&result.label.as_str()));
        assert!(result.closeness.is_none());
        assert_eq!(result.source, ResultSource::Demo);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn disabled_fallback_reports_failure() {
        let backend = ScriptedBackend::new(Err(AppError::unreachable("timed out")));

        let disabled = FallbackPolicy {
            enabled: false,
            delay: Duration::ZERO,
        };

        let err = analyze(backend, upload(), disabled).await.unwrap_err();
        assert!(err.is_unreachable());
    }

    #[tokio::test]
    async fn error_status_never_falls_back() {
        let backend = ScriptedBackend::new(Err(AppError::AnalysisFailed(FailureKind::Status(500))));

        let err = analyze(backend, upload(), enabled()).await.unwrap_err();
        assert_eq!(err, AppError::AnalysisFailed(FailureKind::Status(500)));
    }

    #[tokio::test]
    async fn malformed_body_never_falls_back() {
        let backend = ScriptedBackend::new(Err(AppError::MalformedResponse("missing field".into())));

        let err = analyze(backend, upload(), enabled()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn success_passes_through() {
        let expected = PredictionResult {
            label: "No Dementia".into(),
            closeness: Some(vec![ClosenessEntry {
                class: "No Dementia".into(),
                score: 91.0,
            }]),
            source: ResultSource::Backend,
        };
        let backend = ScriptedBackend::new(Ok(expected.clone()));

        assert_eq!(analyze(backend, upload(), enabled()).await.unwrap(), expected);
    }

    #[test]
    fn policy_follows_demo_config() {
        let policy = FallbackPolicy::from(&DemoConfig::default());
        assert!(!policy.enabled);
        assert_eq!(policy.delay, Duration::from_secs(2));
    }
}
