//! Markdown assembler for the function overview.
//!
//! Output layout:
//!
//! ~~~text
//! # <title>
//!
//! - [<prototype>](#<anchor>)
//! No function prototype found for: <file>
//!
//!
//! ## [<file>](<file>)
//!
//! ```
//! <cleaned header>
//! ```
//! ~~~

use crate::anchor;
use crate::error::{Error, Result};
use crate::model::{FunctionFile, OutputDocument};
use std::fs;
use std::path::Path;

/// Assemble the overview: title, index, then one detail section per file.
///
/// Index entries and detail sections follow the order of `files`.
pub fn render(title: &str, files: &[FunctionFile]) -> String {
    let mut doc = OutputDocument::new();
    doc.push_str(&format!("# {}\n\n", title));

    for file in files {
        doc.push_str(&render_index_entry(file));
        doc.push('\n');
    }
    doc.push('\n');

    for file in files {
        doc.push_str(&render_detail(file));
    }

    doc.into_string()
}

/// One index line, without the trailing newline.
fn render_index_entry(file: &FunctionFile) -> String {
    match file.prototype {
        Some(ref prototype) => format!("- {}", anchor::render_index_link(prototype, &file.name)),
        None => format!("No function prototype found for: {}", file.name),
    }
}

fn render_detail(file: &FunctionFile) -> String {
    let mut section = format!("\n## [{}]({})\n\n", file.name, file.name);
    if let Some(ref header) = file.header {
        section.push_str("```\n");
        section.push_str(header);
        section.push_str("\n```\n");
    }
    section
}

/// Write the document, replacing any existing file at `path`.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TITLE: &str = "Custom Function Overview";

    #[test]
    fn end_to_end_add() {
        let files = vec![FunctionFile::from_content(
            "Add.fmfn",
            "===\n * Add ( a ; b )\n/** Adds two numbers. */\n",
        )];
        let output = render(TITLE, &files);

        assert!(output.contains("- [Add ( a ; b )](#addfmfn)\n"));
        assert!(output.contains("\n## [Add.fmfn](Add.fmfn)\n\n```\n"));
        assert!(output.contains("```\n/** Adds two numbers. */\n```\n"));
    }

    #[test]
    fn exact_layout() {
        let files = vec![FunctionFile::from_content(
            "Add.fmfn",
            "===\n * Add ( a ; b )\n/** Adds two numbers. */\n",
        )];
        assert_eq!(
            render(TITLE, &files),
            "# Custom Function Overview\n\n\
             - [Add ( a ; b )](#addfmfn)\n\
             \n\
             \n## [Add.fmfn](Add.fmfn)\n\n\
             ```\n/** Adds two numbers. */\n```\n"
        );
    }

    #[test]
    fn placeholder_for_missing_prototype() {
        let files = vec![FunctionFile::from_content("Odd.fmfn", "/** no marker */")];
        let output = render(TITLE, &files);
        assert!(output.contains("\nNo function prototype found for: Odd.fmfn\n"));
        assert!(!output.contains("](#oddfmfn)"));
    }

    #[test]
    fn heading_only_without_header() {
        let files = vec![FunctionFile::from_content("Bare.fmfn", "===\n * Bare\na")];
        let output = render(TITLE, &files);
        assert!(output.ends_with("\n## [Bare.fmfn](Bare.fmfn)\n\n"));
        assert!(!output.contains("```"));
    }

    #[test]
    fn one_index_entry_per_file_in_order() {
        let files = vec![
            FunctionFile::from_content("B.fmfn", "===\n * B ( x )\n"),
            FunctionFile::from_content("A.fmfn", "nothing"),
            FunctionFile::from_content("C.fmfn", "===\n * C ( y )\n"),
        ];
        let output = render(TITLE, &files);
        let (index, details) = output.split_once("\n\n\n").unwrap();
        let entries: Vec<&str> = index.lines().skip(2).collect();
        assert_eq!(
            entries,
            vec![
                "- [B ( x )](#bfmfn)",
                "No function prototype found for: A.fmfn",
                "- [C ( y )](#cfmfn)",
            ]
        );

        let b = details.find("## [B.fmfn]").unwrap();
        let a = details.find("## [A.fmfn]").unwrap();
        let c = details.find("## [C.fmfn]").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn empty_file_list() {
        assert_eq!(render(TITLE, &[]), "# Custom Function Overview\n\n\n");
    }

    #[test]
    fn write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "stale content that is longer").unwrap();

        write_document(&path, "fresh").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("README.md");
        let err = write_document(&path, "x").unwrap_err();
        assert!(matches!(err, Error::WriteOutput { .. }));
    }
}
