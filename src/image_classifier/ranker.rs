use crate::image_classifier::interface::Classification;
use std::cmp::Ordering;

/// Pairs every probability at or above `threshold` with its label, most
/// confident first. Equal probabilities are ordered by label so the result
/// does not depend on class order. NaN never passes.
pub fn rank(probabilities: &[f32], labels: &[String], threshold: f32) -> Vec<Classification> {
    let mut results: Vec<Classification> = probabilities
        .iter()
        .zip(labels)
        .filter(|(probability, _)| !probability.is_nan() && **probability >= threshold)
        .map(|(probability, label)| Classification {
            label: label.clone(),
            confidence: *probability,
        })
        .collect();

    results.sort_by(by_confidence_then_label);

    results
}

fn by_confidence_then_label(a: &Classification, b: &Classification) -> Ordering {
    b.confidence
        .partial_cmp(&a.confidence)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.label.cmp(&b.label))
}
