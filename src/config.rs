use std::path::{Path, PathBuf};

use crate::alignment_mode::AlignmentParams;
use crate::DEFAULT_OUTPUT_NAME;

/// Everything one run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub seq_a: PathBuf,
    pub seq_b: PathBuf,
    pub params: AlignmentParams,
    pub dump_matrix: bool,
    pub output: PathBuf,
}

impl RunConfig {
    pub fn new(seq_a: impl Into<PathBuf>, seq_b: impl Into<PathBuf>, params: AlignmentParams) -> Self {
        Self {
            seq_a: seq_a.into(),
            seq_b: seq_b.into(),
            params,
            dump_matrix: false,
            output: PathBuf::from(DEFAULT_OUTPUT_NAME),
        }
    }

    pub fn with_matrix_dump(mut self, dump: bool) -> Self {
        self.dump_matrix = dump;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        resolve_output_path(&self.output)
    }
}

/// An existing directory gets the default file name appended.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_OUTPUT_NAME)
    } else {
        path.to_path_buf()
    }
}
