//! Evaluation report: accuracy, precision, and recall per label.

use std::fmt;

use colored::{ColoredString, Colorize};

use crate::classifier::Classifier;
use crate::error::{Result, TaalboostError};
use crate::sample::{Label, Observation};


/// Confusion counts of a model against a labeled sample.
///
/// `false_english` counts observations predicted English that are Dutch;
/// `false_dutch` the converse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    true_english: usize,
    true_dutch: usize,
    false_english: usize,
    false_dutch: usize,
}


impl Evaluation {
    /// Tally `(truth, prediction)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
        where I: IntoIterator<Item = (Label, Label)>,
    {
        let mut counts = Self::default();
        for (truth, prediction) in pairs {
            match (truth, prediction) {
                (Label::English, Label::English) => counts.true_english += 1,
                (Label::Dutch, Label::Dutch) => counts.true_dutch += 1,
                (Label::Dutch, Label::English) => counts.false_english += 1,
                (Label::English, Label::Dutch) => counts.false_dutch += 1,
            }
        }
        counts
    }


    /// Run `model` over a labeled sample and tally the outcomes.
    ///
    /// # Errors
    /// [`TaalboostError::UnlabeledObservation`] if an observation has no
    /// ground truth; prediction errors pass through.
    pub fn of_model<C: Classifier>(model: &C, sample: &[Observation]) -> Result<Self> {
        let mut pairs = Vec::with_capacity(sample.len());
        for (index, observation) in sample.iter().enumerate() {
            let truth = observation.label()
                .ok_or(TaalboostError::UnlabeledObservation { index })?;
            pairs.push((truth, model.predict(observation)?));
        }
        Ok(Self::from_pairs(pairs))
    }


    /// Number of observations tallied.
    pub fn total(&self) -> usize {
        self.true_english + self.true_dutch + self.false_english + self.false_dutch
    }


    /// Fraction of correct predictions, or `None` on an empty tally.
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_english + self.true_dutch, self.total())
    }


    /// Of the observations predicted `label`, the fraction that truly
    /// are `label`. `None` when nothing was predicted `label`.
    pub fn precision(&self, label: Label) -> Option<f64> {
        match label {
            Label::English => ratio(self.true_english, self.true_english + self.false_english),
            Label::Dutch => ratio(self.true_dutch, self.true_dutch + self.false_dutch),
        }
    }


    /// Of the observations that truly are `label`, the fraction
    /// predicted `label`. `None` when the sample holds no `label`.
    pub fn recall(&self, label: Label) -> Option<f64> {
        match label {
            Label::English => ratio(self.true_english, self.true_english + self.false_dutch),
            Label::Dutch => ratio(self.true_dutch, self.true_dutch + self.false_english),
        }
    }
}


fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}


fn metric(value: Option<f64>) -> ColoredString {
    match value {
        Some(value) => format!("{value:.3}").green(),
        None => "n/a".dimmed(),
    }
}


impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "---------- evaluation ----------".bold())?;
        writeln!(f, "Examples:          {}", self.total())?;
        writeln!(f, "Accuracy:          {}", metric(self.accuracy()))?;
        writeln!(f, "English precision: {}", metric(self.precision(Label::English)))?;
        writeln!(f, "English recall:    {}", metric(self.recall(Label::English)))?;
        writeln!(f, "Dutch precision:   {}", metric(self.precision(Label::Dutch)))?;
        writeln!(f, "Dutch recall:      {}", metric(self.recall(Label::Dutch)))?;
        write!(f, "{}", "--------------------------------".bold())
    }
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn metrics_follow_the_confusion_counts() {
        use Label::{Dutch, English};

        let evaluation = Evaluation::from_pairs([
            (English, English),
            (English, English),
            (English, Dutch),
            (Dutch, Dutch),
            (Dutch, English),
        ]);

        assert_eq!(evaluation.total(), 5);
        assert_relative_eq!(evaluation.accuracy().unwrap(), 0.6, epsilon = 1e-12);
        assert_relative_eq!(
            evaluation.precision(English).unwrap(),
            2f64 / 3f64,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            evaluation.recall(English).unwrap(),
            2f64 / 3f64,
            epsilon = 1e-12
        );
        assert_relative_eq!(evaluation.precision(Dutch).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(evaluation.recall(Dutch).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn empty_denominators_yield_no_metric() {
        use Label::{Dutch, English};

        let empty = Evaluation::from_pairs(std::iter::empty::<(Label, Label)>());
        assert_eq!(empty.accuracy(), None);

        // Everything predicted English: no Dutch precision to speak of.
        let one_sided = Evaluation::from_pairs([(English, English), (Dutch, English)]);
        assert_eq!(one_sided.precision(Dutch), None);
        assert_relative_eq!(one_sided.precision(English).unwrap(), 0.5, epsilon = 1e-12);
    }
}
