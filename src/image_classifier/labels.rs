use crate::image_classifier::error::ImageClassifierError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one label per line. Empty lines are dropped without taking an index,
/// so the n-th retained line is class n.
pub fn load_labels(path: impl AsRef<Path>) -> Result<Vec<String>, ImageClassifierError> {
    let path = path.as_ref();
    let unavailable = |source| ImageClassifierError::LabelsUnavailable {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    read_labels(BufReader::new(file)).map_err(unavailable)
}

pub fn read_labels(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let label = line.strip_suffix('\r').unwrap_or(&line);
        if !label.is_empty() {
            labels.push(label.to_string());
        }
    }
    Ok(labels)
}
