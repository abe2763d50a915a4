use super::PredictionResult;
use crate::utils::{format_precise_percent, format_whole_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Predicted,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarModel {
    pub class: String,
    pub score: f64,
    pub emphasis: Emphasis,
    pub value_label: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub label: String,
    /// `None` when the result carries no closeness data.
    pub bars: Option<Vec<BarModel>>,
    pub is_demo: bool,
}

impl DisplayModel {
    pub fn from_result(result: &PredictionResult) -> Self {
        let bars = result.closeness.as_ref().map(|entries| {
            entries
                .iter()
                .map(|entry| BarModel {
                    class: entry.class.clone(),
                    score: entry.score,
                    emphasis: if entry.class == result.label {
                        Emphasis::Predicted
                    } else {
                        Emphasis::Other
                    },
                    value_label: format_whole_percent(entry.score),
                    tooltip: format_precise_percent(entry.score),
                })
                .collect()
        });

        Self {
            label: result.label.clone(),
            bars,
            is_demo: result.source == super::ResultSource::Demo,
        }
    }
}
