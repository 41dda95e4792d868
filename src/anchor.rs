//! In-document anchor generation for function files.
//!
//! Markdown renderers derive a heading anchor from the heading text. For a
//! detail heading `## [Add.fmfn](Add.fmfn)` the text is the filename, which
//! turns into `addfmfn`. The index links must match that slug exactly, so
//! every index entry goes through [`derive`].

/// Derive the anchor for a filename: drop every `.` and lowercase the rest.
pub fn derive(filename: &str) -> String {
    filename.replace('.', "").to_lowercase()
}

/// Render an index link to a function's detail section.
pub fn render_index_link(prototype: &str, filename: &str) -> String {
    format!("[{}](#{})", prototype, derive(filename))
}
