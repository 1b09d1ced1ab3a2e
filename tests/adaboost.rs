use approx::assert_relative_eq;

use taalboost::constants::PERFECT_STUMP_CONFIDENCE;
use taalboost::prelude::*;


// Toy fixture: attribute 0 alone separates the classes.
fn separable_sample() -> Vec<Observation> {
    vec![
        Observation::labeled(Attributes::from_bits([true, false]), Label::English),
        Observation::labeled(Attributes::from_bits([true, true]), Label::English),
        Observation::labeled(Attributes::from_bits([false, false]), Label::Dutch),
        Observation::labeled(Attributes::from_bits([false, true]), Label::Dutch),
    ]
}


// The separable fixture plus one contrary example, so every stump keeps
// a positive weighted error and the weights actually move.
fn noisy_sample() -> Vec<Observation> {
    let mut sample = separable_sample();
    sample.push(Observation::labeled(
        Attributes::from_bits([false, true]),
        Label::English,
    ));
    sample
}


#[test]
fn the_requested_number_of_stumps_is_learned() {
    let mut sample = noisy_sample();
    let mut ensemble = AdaBoost::new();
    ensemble.train(&mut sample, 5).unwrap();

    assert_eq!(ensemble.stumps().len(), 5);
    for stump in ensemble.stumps() {
        assert!(stump.root().is_some());
        assert!(stump.weight() >= 0f64);
        assert!(stump.weight() <= PERFECT_STUMP_CONFIDENCE);
    }
}


#[test]
fn example_weights_sum_to_one_after_training() {
    let mut sample = noisy_sample();
    AdaBoost::new().train(&mut sample, 3).unwrap();

    let total = sample.iter().map(Observation::weight).sum::<f64>();
    assert_relative_eq!(total, 1f64, epsilon = 1e-12);
}


#[test]
fn misclassified_examples_gain_relative_weight() {
    let mut sample = noisy_sample();
    AdaBoost::new().train(&mut sample, 1).unwrap();

    // The contrary example is the only one the first stump misses: its
    // fifth of the mass renormalizes to one half, the rest split the
    // other half evenly.
    let hard = sample[4].weight();
    assert_relative_eq!(hard, 0.5, epsilon = 1e-12);
    for observation in &sample[..4] {
        assert_relative_eq!(observation.weight(), 0.125, epsilon = 1e-12);
        assert!(hard > observation.weight());
    }
}


#[test]
fn a_perfect_stump_receives_the_sentinel_confidence() {
    let mut sample = separable_sample();
    let mut ensemble = AdaBoost::new();
    ensemble.train(&mut sample, 1).unwrap();

    assert_eq!(ensemble.stumps().len(), 1);
    let stump = &ensemble.stumps()[0];
    assert_eq!(stump.weight(), PERFECT_STUMP_CONFIDENCE);

    // A single-stump ensemble votes exactly like its stump.
    for observation in &sample {
        assert_eq!(
            ensemble.predict(observation).unwrap(),
            stump.predict(observation).unwrap(),
        );
    }

    // A perfect round leaves the uniform distribution alone.
    for observation in &sample {
        assert_relative_eq!(observation.weight(), 0.25, epsilon = 1e-12);
    }
}


#[test]
fn the_ensemble_learns_the_separable_sample() {
    let mut sample = separable_sample();
    let mut ensemble = AdaBoost::new();
    ensemble.train(&mut sample, 7).unwrap();

    for observation in &sample {
        assert_eq!(
            ensemble.predict(observation).unwrap(),
            observation.label().unwrap(),
        );
    }
}


#[test]
fn an_empty_sample_leaves_the_ensemble_untrained() {
    let mut sample = Vec::new();
    let mut ensemble = AdaBoost::new();
    ensemble.train(&mut sample, 10).unwrap();

    assert!(ensemble.stumps().is_empty());

    let observation = Observation::unlabeled(Attributes::from_bits([true]));
    assert!(matches!(
        ensemble.predict(&observation),
        Err(TaalboostError::ModelNotTrained),
    ));
}


#[test]
fn a_vote_tie_goes_to_english() {
    // Two single-leaf stumps of equal confidence voting opposite ways.
    let text = concat!(
        r#"[{"weight":1.0,"tree":{"value":"en","children":{}}},"#,
        r#"{"weight":1.0,"tree":{"value":"nl","children":{}}}]"#,
    );
    let ensemble = AdaBoost::from_json(text).unwrap();

    let observation = Observation::unlabeled(Attributes::from_bits([true]));
    assert_eq!(ensemble.predict(&observation).unwrap(), Label::English);
}
