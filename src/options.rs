use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    pub source: PathBuf,
    pub output: PathBuf,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub follow_links: bool,
}
impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("./src"),
            output: PathBuf::from("./fullcodes.txt"),
            respect_gitignore: false,
            max_depth: None,
            include_hidden: true,
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct MergeBuilder {
    options: MergeOptions,
}
impl MergeBuilder {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            options: MergeOptions {
                source: source.into(),
                output: output.into(),
                ..Default::default()
            },
        }
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> MergeOptions {
        self.options
    }
}
