//! Command-line interface for mergecat.
//!
//! This binary provides access to the mergecat library functionality,
//! merging every file under a source directory into a single output file.

use clap::Parser;
#[cfg(feature = "streaming")]
use mergecat::MergeStream;
use mergecat::{MergeBuilder, MergeOptions, mergecat};
use std::path::PathBuf;
use std::process::exit;

/// mergecat — recursive file content merger
#[derive(Parser)]
#[command(name = "mergecat", version, about, long_about = None)]
struct Cli {
    /// Source directory to merge
    #[arg(default_value = "./src")]
    source: PathBuf,

    /// Output file (truncated and rewritten on every run)
    #[arg(default_value = "./fullcodes.txt")]
    output: PathBuf,

    /// Respect .gitignore files during traversal
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print each merged file as it is written
    #[cfg(feature = "streaming")]
    #[arg(long)]
    stream: bool,
}

impl Cli {
    fn into_options(self) -> MergeOptions {
        let mut builder = MergeBuilder::new(self.source, self.output)
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.skip_hidden)
            .follow_links(self.follow_links);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        builder.build()
    }
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "streaming")]
    let stream_mode = cli.stream;
    let options = cli.into_options();

    #[cfg(feature = "streaming")]
    if stream_mode {
        run_streaming(&options);
        return;
    }

    run_normal(options);
}

fn run_normal(options: MergeOptions) {
    match mergecat(options) {
        Ok(report) => {
            for skip in &report.skipped {
                eprintln!("Error processing {}: {}", skip.path.display(), skip.reason);
            }
            println!(
                "Merged {} files from '{}' into '{}' ({} bytes)",
                report.merged.len(),
                report.source.display(),
                report.output.display(),
                report.bytes_written
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

#[cfg(feature = "streaming")]
fn run_streaming(options: &MergeOptions) {
    let mut stream = match MergeStream::new(options) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let mut merged = 0usize;
    while let Some(entry) = stream.next() {
        match entry {
            Ok(file) => {
                merged += 1;
                println!("{} ({} bytes)", file.path.display(), file.bytes);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    match stream.finish() {
        Ok(bytes) => println!(
            "Merged {} files from '{}' into '{}' ({} bytes)",
            merged,
            options.source.display(),
            options.output.display(),
            bytes
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
