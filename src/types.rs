use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single file whose bytes were copied into the output.
#[derive(Debug, Serialize, Deserialize)]
pub struct MergedFile {
    /// The full path to the file.
    pub path: PathBuf,
    /// Number of content bytes copied, excluding the separator.
    pub bytes: u64,
}

/// A file that could not be opened or read.
///
/// Skipped files contribute nothing to the output (not even a separator)
/// and never abort the run.
#[derive(Debug, Serialize, Deserialize)]
pub struct SkippedFile {
    /// The path the error was reported against.
    pub path: PathBuf,
    /// The underlying error message.
    pub reason: String,
}

/// The complete result of a merge run.
#[derive(Debug, Serialize, Deserialize)]
pub struct MergeReport {
    /// The source directory that was traversed.
    pub source: PathBuf,
    /// The output file that was written.
    pub output: PathBuf,
    /// Every file copied into the output, in traversal order.
    pub merged: Vec<MergedFile>,
    /// Every file skipped due to a read error, in traversal order.
    pub skipped: Vec<SkippedFile>,
    /// Total bytes written to the output, separators included.
    pub bytes_written: u64,
}
