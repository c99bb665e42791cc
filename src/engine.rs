use crate::error::MergeError;
use crate::options::MergeOptions;
use crate::output::OutputSink;
use crate::types::{MergeReport, MergedFile, SkippedFile};
use ignore::WalkBuilder;
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing;

/// Delimiter written after every merged file's content.
pub const SEPARATOR: &[u8] = b"\n========================================\n";

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &MergeOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.source);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, MergeError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => {
                let path = entry.path().to_path_buf();
                if path.is_file() {
                    Some(Ok(path))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(MergeError::Walk(e.to_string()))),
        })
    }
}

pub fn mergecat(options: MergeOptions) -> Result<MergeReport, MergeError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Merging {} into {}",
        options.source.display(),
        options.output.display()
    );
    let mut sink = OutputSink::create(&options.output)?;
    let walker = Walker::new(&options);
    let mut merged = Vec::new();
    let mut skipped = Vec::new();
    for entry in walker.into_iter() {
        match entry {
            Ok(path) => {
                if sink.is_destination(&path) {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping destination file: {}", path.display());
                    continue;
                }
                match sink.append(&path) {
                    Ok(bytes) => merged.push(MergedFile { path, bytes }),
                    Err(e) => {
                        #[cfg(feature = "logging")]
                        tracing::warn!("Skipping {}: {}", path.display(), e);
                        skipped.push(SkippedFile {
                            path,
                            reason: e.to_string(),
                        });
                    }
                }
            }
            // The walker does not attribute listing errors to a single
            // entry; report them against the source root. The message
            // names the offending path.
            Err(e) => skipped.push(SkippedFile {
                path: options.source.clone(),
                reason: e.to_string(),
            }),
        }
    }
    let bytes_written = sink.finish()?;
    Ok(MergeReport {
        source: options.source,
        output: options.output,
        merged,
        skipped,
        bytes_written,
    })
}

#[cfg(feature = "streaming")]
pub struct MergeStream {
    path_iter: Box<dyn Iterator<Item = Result<PathBuf, MergeError>> + Send>,
    sink: OutputSink,
}
#[cfg(feature = "streaming")]
impl MergeStream {
    pub fn new(options: &MergeOptions) -> Result<Self, MergeError> {
        let sink = OutputSink::create(&options.output)?;
        let walker = Walker::new(options);
        let path_iter = Box::new(walker.into_iter());
        Ok(Self { path_iter, sink })
    }
    /// Flushes and releases the destination once iteration is done,
    /// returning total bytes written (separators included).
    pub fn finish(self) -> Result<u64, MergeError> {
        self.sink.finish()
    }
}
#[cfg(feature = "streaming")]
impl Iterator for MergeStream {
    type Item = Result<MergedFile, MergeError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.path_iter.next()? {
                Ok(p) => p,
                Err(e) => return Some(Err(e)),
            };
            if self.sink.is_destination(&path) {
                continue;
            }
            return Some(match self.sink.append(&path) {
                Ok(bytes) => Ok(MergedFile { path, bytes }),
                Err(e) => Err(e),
            });
        }
    }
}
