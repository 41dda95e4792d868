//! Data model for one overview run.

use crate::error::{Error, Result};
use crate::extract;
use std::fs;
use std::path::Path;

/// A single custom function file and what was extracted from it.
#[derive(Debug, Default)]
pub struct FunctionFile {
    /// Bare filename, e.g. `Add.fmfn`
    pub name: String,
    /// Raw file text. Both extractions run over it once; it stays with
    /// the results so the run can report on the source without a re-read.
    pub content: String,
    /// Signature from the line after the first `===` marker
    pub prototype: Option<String>,
    /// First `/** ... */` block, already cleaned
    pub header: Option<String>,
}

impl FunctionFile {
    /// Build from already-loaded text, running both extractions.
    pub fn from_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let prototype = extract::prototype(&content);
        let header = extract::header(&content).map(extract::clean_header);
        FunctionFile {
            name: name.into(),
            content,
            prototype,
            header,
        }
    }

    /// Read `dir/name` and extract from it.
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(name);
        let content = fs::read_to_string(&path).map_err(|source| Error::ReadFile {
            path: path.clone(),
            source,
        })?;
        Ok(Self::from_content(name, content))
    }
}

/// Append-only markdown buffer with an index region followed by a detail region.
#[derive(Debug, Default)]
pub struct OutputDocument {
    text: String,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
