//! # Mergecat
//!
//! `mergecat` recursively walks a directory tree and concatenates the raw bytes of every
//! file it finds into a single output file, writing a fixed separator line after each
//! file's content. Files are streamed in bounded chunks, so arbitrarily large inputs are
//! merged without buffering them in memory.
//!
//! It provides both a simple blocking API ([`mergecat`]) and a streaming API ([`MergeStream`])
//! when the `streaming` feature is enabled. Files that cannot be read are reported in the
//! result and skipped; they never abort the run. The output file itself is excluded from
//! the traversal (compared by canonicalized path), so the destination may live inside the
//! source tree.
//!
//! # Features
//!
//! - `streaming`: Enables a streaming iterator API that yields one result per merged file.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use mergecat::{MergeBuilder, mergecat};
//!
//! let options = MergeBuilder::new("./src", "./fullcodes.txt")
//!     .respect_gitignore(false)
//!     .include_hidden(true)
//!     .build();
//!
//! let report = mergecat(options).expect("Failed to merge directory");
//!
//! println!("Merged {} files ({} bytes)", report.merged.len(), report.bytes_written);
//! for skip in report.skipped {
//!     eprintln!("Skipped {}: {}", skip.path.display(), skip.reason);
//! }
//! ```

mod engine;
mod error;
mod options;
mod output;
mod types;

#[cfg(feature = "streaming")]
pub use engine::MergeStream;
pub use engine::{SEPARATOR, mergecat};
pub use error::MergeError;
pub use options::{MergeBuilder, MergeOptions};
pub use types::{MergeReport, MergedFile, SkippedFile};
