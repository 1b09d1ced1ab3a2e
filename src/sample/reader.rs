//! Loads observations from example files.
//!
//! Training files carry one `label|text` record per line. Prediction
//! files carry one snippet per line; only the text after the last `|`
//! is classified, so labeled files can be replayed through prediction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{features, Label, Observation};
use crate::error::{Result, TaalboostError};


/// Read a labeled training or evaluation file.
///
/// Every line must be `label|text` with `label` one of `en`/`nl`. The
/// whole load fails on the first malformed record; no partial sample is
/// ever returned.
///
/// # Errors
/// [`TaalboostError::Io`] on file access,
/// [`TaalboostError::MalformedExampleLine`] on a record that does not
/// fit the shape.
pub fn read_labeled<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| TaalboostError::Io { path: path.into(), source })?;

    let mut observations = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .map_err(|source| TaalboostError::Io { path: path.into(), source })?;

        let record = line.split('|').collect::<Vec<_>>();
        let (token, text) = match record.as_slice() {
            [token, text] => (*token, *text),
            _ => {
                return Err(TaalboostError::MalformedExampleLine {
                    line: index + 1,
                    reason: format!("expected `label|text`, found {} fields", record.len()),
                });
            }
        };

        let label = token.parse::<Label>().map_err(|_| {
            TaalboostError::MalformedExampleLine {
                line: index + 1,
                reason: format!("unrecognized label token `{token}`"),
            }
        })?;

        let attributes = features::extract(&features::normalize(text));
        observations.push(Observation::labeled(attributes, label));
    }
    Ok(observations)
}


/// Read a prediction file.
///
/// Only the text after the final `|` of each line is classified; a
/// leading label, if present, is ignored. Blank lines are skipped.
///
/// # Errors
/// [`TaalboostError::Io`] on file access.
pub fn read_unlabeled<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| TaalboostError::Io { path: path.into(), source })?;

    let mut observations = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line
            .map_err(|source| TaalboostError::Io { path: path.into(), source })?;
        if line.trim().is_empty() {
            continue;
        }

        let text = line.rsplit('|').next().unwrap_or(line.as_str());
        let attributes = features::extract(&features::normalize(text));
        observations.push(Observation::unlabeled(attributes));
    }
    Ok(observations)
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn labeled_records_are_loaded_in_order() {
        let file = file_with("en|the quick brown fox\nnl|zij kijken naar een vogel\n");
        let sample = read_labeled(file.path()).unwrap();

        assert_eq!(sample.len(), 2);
        assert_eq!(sample[0].label(), Some(Label::English));
        assert_eq!(sample[1].label(), Some(Label::Dutch));
        assert_eq!(sample[0].weight(), 1f64);
    }

    #[test]
    fn wrong_field_count_fails_the_whole_load() {
        let file = file_with("en|fine text\nnl|broken|extra\n");
        let error = read_labeled(file.path()).unwrap_err();

        assert!(matches!(
            error,
            TaalboostError::MalformedExampleLine { line: 2, .. }
        ));
    }

    #[test]
    fn unknown_label_fails_the_whole_load() {
        let file = file_with("fr|ceci n'est pas une pipe\n");
        assert!(read_labeled(file.path()).is_err());
    }

    #[test]
    fn unlabeled_reader_takes_text_after_the_last_pipe() {
        let file = file_with("en|the quick brown fox\n\nplain snippet without label\n");
        let sample = read_unlabeled(file.path()).unwrap();

        assert_eq!(sample.len(), 2);
        assert!(sample.iter().all(|observation| observation.label().is_none()));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let error = read_labeled("no/such/file.txt").unwrap_err();
        assert!(matches!(error, TaalboostError::Io { .. }));
    }
}
