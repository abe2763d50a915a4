use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Where a published result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Backend,
    Demo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: String,
    /// Unset for demo results.
    pub closeness: Option<Vec<ClosenessEntry>>,
    pub source: ResultSource,
}

/// One bar of the closeness chart, keyed the way the chart schema names it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosenessEntry {
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "Closeness (%)")]
    pub score: f64,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: String,
    closeness: Vec<ScoredClass>,
}

#[derive(Debug, Deserialize)]
struct ScoredClass {
    class: String,
    score: f64,
}

impl PredictionResult {
    /// Parses a 2xx response body. Nothing is returned unless every field is
    /// present and every score is a percentage.
    pub fn from_response_body(body: &[u8]) -> Result<Self, AppError> {
        let response: PredictResponse = serde_json::from_slice(body)
            .map_err(|err| AppError::MalformedResponse(err.to_string()))?;

        let closeness = response
            .closeness
            .into_iter()
            .map(|entry| {
                if entry.score.is_finite() && (0.0..=100.0).contains(&entry.score) {
                    Ok(ClosenessEntry {
                        class: entry.class,
                        score: entry.score,
                    })
                } else {
                    Err(AppError::MalformedResponse(format!(
                        "score {} for `{}` is outside 0-100",
                        entry.score, entry.class
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            label: response.prediction,
            closeness: Some(closeness),
            source: ResultSource::Backend,
        })
    }
}
