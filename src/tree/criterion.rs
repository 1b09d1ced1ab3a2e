//! Weighted entropy and information gain over binary attributes.

use crate::sample::{Label, Observation};


/// Binary entropy of a probability, in bits.
///
/// Degenerate inputs (`p <= 0` or `p >= 1`) yield 0 rather than running
/// into the `log(0)` pole.
pub fn binary_entropy(p: f64) -> f64 {
    if p <= 0f64 || p >= 1f64 {
        return 0f64;
    }
    -p * p.log2() - (1f64 - p) * (1f64 - p).log2()
}


/// Sum of weights over `observations`.
pub(super) fn total_weight(observations: &[&Observation]) -> f64 {
    observations.iter()
        .map(|observation| observation.weight())
        .sum()
}


/// Sum of weights over the English-labeled part of `observations`.
pub(super) fn english_weight(observations: &[&Observation]) -> f64 {
    observations.iter()
        .filter(|observation| observation.label() == Some(Label::English))
        .map(|observation| observation.weight())
        .sum()
}


/// Number of English-labeled observations.
pub(super) fn english_count(observations: &[&Observation]) -> usize {
    observations.iter()
        .filter(|observation| observation.label() == Some(Label::English))
        .count()
}


/// The label holding at least half of the total weight.
/// Equal halves go to English.
pub(super) fn majority_label(observations: &[&Observation]) -> Label {
    if english_weight(observations) >= total_weight(observations) / 2f64 {
        Label::English
    } else {
        Label::Dutch
    }
}


/// Partition `observations` into `(has attribute, lacks attribute)`.
pub(super) fn split_on<'a>(
    attribute: usize,
    observations: &[&'a Observation],
) -> (Vec<&'a Observation>, Vec<&'a Observation>) {
    let mut has = Vec::new();
    let mut lacks = Vec::new();
    for &observation in observations {
        if observation.attributes().has(attribute) {
            has.push(observation);
        } else {
            lacks.push(observation);
        }
    }
    (has, lacks)
}


/// Expected entropy left after splitting on `attribute`: each non-empty
/// side contributes its weight share times the entropy of its English
/// fraction. A side whose weight underflowed to zero contributes
/// nothing either way, so it is skipped with the empty ones.
fn remainder(attribute: usize, observations: &[&Observation]) -> f64 {
    let total = total_weight(observations);
    let (has, lacks) = split_on(attribute, observations);

    let mut remainder = 0f64;
    for side in [has, lacks] {
        let side_weight = total_weight(&side);
        if side.is_empty() || side_weight <= 0f64 {
            continue;
        }
        remainder += (side_weight / total)
            * binary_entropy(english_weight(&side) / side_weight);
    }
    remainder
}


/// Entropy reduction from splitting `observations` on `attribute`.
pub(super) fn information_gain(attribute: usize, observations: &[&Observation]) -> f64 {
    let total = total_weight(observations);
    binary_entropy(english_weight(observations) / total)
        - remainder(attribute, observations)
}


/// The attribute with maximal information gain. Ties keep the earliest
/// entry of `attributes`, which callers hand over in ascending index
/// order, so selection is deterministic.
pub(super) fn best_attribute(attributes: &[usize], observations: &[&Observation]) -> usize {
    let mut candidates = attributes.iter().copied();
    let mut best = candidates.next().expect("no attributes left to split on");
    let mut best_gain = information_gain(best, observations);

    for attribute in candidates {
        let gain = information_gain(attribute, observations);
        if gain > best_gain {
            best = attribute;
            best_gain = gain;
        }
    }
    best
}
