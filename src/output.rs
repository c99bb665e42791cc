//! Output sink for the merge destination.
//!
//! Owns the destination file handle for the duration of a run: opens it with
//! truncation, streams file contents into it, writes the separator after each
//! file, and flushes on [`OutputSink::finish`]. Also answers the
//! self-exclusion question (is a candidate entry the destination itself?)
//! using canonicalized paths.

use crate::engine::SEPARATOR;
use crate::error::MergeError;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub(crate) struct OutputSink {
    writer: BufWriter<File>,
    /// Destination path as given by the caller, kept for error reporting.
    path: PathBuf,
    /// Canonicalized destination, compared against canonicalized entries.
    identity: PathBuf,
    bytes_written: u64,
}

impl OutputSink {
    /// Creates (or truncates) the destination and takes ownership of the
    /// handle. The only fatal error of a merge run originates here or in
    /// [`OutputSink::finish`].
    pub(crate) fn create(path: &Path) -> Result<Self, MergeError> {
        let file = File::create(path).map_err(|e| MergeError::output(path, e))?;
        // The destination exists once created, so canonicalization cannot
        // race with the identity checks below.
        let identity = fs::canonicalize(path).map_err(|e| MergeError::output(path, e))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            identity,
            bytes_written: 0,
        })
    }

    /// True when `candidate` names the destination file itself.
    ///
    /// Entries that cannot be canonicalized (e.g. vanished between listing
    /// and this check) are not the destination; the subsequent open reports
    /// the real error.
    pub(crate) fn is_destination(&self, candidate: &Path) -> bool {
        fs::canonicalize(candidate)
            .map(|p| p == self.identity)
            .unwrap_or(false)
    }

    /// Streams the content of `path` into the destination, then the
    /// separator. Returns the number of content bytes copied.
    ///
    /// A failure mid-copy may leave a truncated fragment in the output; the
    /// separator is only written after a complete copy.
    pub(crate) fn append(&mut self, path: &Path) -> Result<u64, MergeError> {
        let file = File::open(path).map_err(|e| MergeError::io(path, e))?;
        let mut reader = BufReader::new(file);
        let bytes = io::copy(&mut reader, &mut self.writer).map_err(|e| MergeError::io(path, e))?;
        self.writer
            .write_all(SEPARATOR)
            .map_err(|e| MergeError::io(path, e))?;
        self.bytes_written += bytes + SEPARATOR.len() as u64;
        Ok(bytes)
    }

    /// Flushes and releases the destination, returning total bytes written.
    pub(crate) fn finish(mut self) -> Result<u64, MergeError> {
        self.writer
            .flush()
            .map_err(|e| MergeError::output(&self.path, e))?;
        Ok(self.bytes_written)
    }
}
