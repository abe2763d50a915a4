use rand::Rng;

use crate::model::{PredictionResult, ResultSource};

pub const DEMO_LABELS: [&str; 4] = [
    "No Dementia",
    "Mild Dementia",
    "Moderate Dementia",
    "Severe Dementia",
];

/// A uniformly chosen label with no closeness data.
pub fn demo_result() -> PredictionResult {
    let index = rand::rng().random_range(0..DEMO_LABELS.len());
    PredictionResult {
        label: DEMO_LABELS[index].to_string(),
        closeness: None,
        source: ResultSource::Demo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draws_every_label_eventually() {
        let seen: HashSet<String> = (0..500).map(|_| demo_result().label).collect();
        assert_eq!(seen.len(), DEMO_LABELS.len());
        assert!(seen.iter().all(|label| DEMO_LABELS.contains(&label.as_str())));
    }
}
