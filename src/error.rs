//! Error types for training, prediction, and model I/O.

use std::path::PathBuf;

use thiserror::Error;


/// Result type alias for taalboost operations.
pub type Result<T> = std::result::Result<T, TaalboostError>;


/// Errors reported by the learners, the example readers, and model I/O.
///
/// None of these terminate the process: every operation fails as a unit
/// and leaves no partially mutated model or sample behind.
#[derive(Debug, Error)]
pub enum TaalboostError {
    /// Predicting or serializing through a model that was never trained
    /// nor loaded.
    #[error("model has not been trained or loaded")]
    ModelNotTrained,

    /// A training observation carries no ground-truth label.
    #[error("observation {index} carries no label")]
    UnlabeledObservation {
        /// Position of the offending observation in the sample.
        index: usize,
    },

    /// Observations in one training call disagree on attribute width.
    #[error("observation {index} has {found} attributes, expected {expected}")]
    AttributeWidthMismatch {
        /// Position of the offending observation in the sample.
        index: usize,
        /// Width of the first observation in the sample.
        expected: usize,
        /// Width of the offending observation.
        found: usize,
    },

    /// A label token that is neither `en` nor `nl`.
    #[error("unrecognized label token `{token}`")]
    UnknownLabel {
        /// The token as it appeared.
        token: String,
    },

    /// A record in an example file does not fit the `label|text` shape.
    #[error("bad example file at line {line}: {reason}")]
    MalformedExampleLine {
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A persisted model whose structure does not describe a decision
    /// tree or a stump ensemble.
    #[error("malformed model: {reason}")]
    MalformedModel {
        /// What was wrong with it.
        reason: String,
    },

    /// A persisted model that is not valid JSON.
    #[error("could not parse model text: {0}")]
    ModelJson(#[from] serde_json::Error),

    /// File access failed.
    #[error("could not access `{}`: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
