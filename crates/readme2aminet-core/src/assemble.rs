//! Readme assembly
//!
//! Builds the complete Aminet readme from a parsed README.md: the header,
//! the known sections in a fixed order, and the trailer blocks.

use crate::format::{format_history, format_section};
use crate::package::PackageInfo;
use crate::section::{SectionMap, parse_sections};
use crate::strip::strip_markdown;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from generating a readme
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Section keys rendered with [`format_section`], in output order, with their titles
pub const FORMATTED_SECTIONS: [(&str, &str); 5] = [
    ("features", "Features"),
    ("installation", "Installation"),
    ("usage", "Usage"),
    ("tooltypes", "Tooltypes"),
    ("requirements", "Requirements"),
];

/// Read a README.md file and generate the Aminet readme
pub fn generate_readme(path: &Path, version: &str, info: &PackageInfo) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(render_readme(&content, version, info))
}

/// Generate the Aminet readme from README.md content
pub fn render_readme(content: &str, version: &str, info: &PackageInfo) -> String {
    render_sections(&parse_sections(content), version, info)
}

/// Generate the Aminet readme from already parsed sections
///
/// The result has no trailing newline; the Contact block is last.
pub fn render_sections(sections: &SectionMap, version: &str, info: &PackageInfo) -> String {
    let mut output = vec![info.header(version)];

    if let Some(description) = sections.get("description") {
        output.push(strip_markdown(description));
        output.push(String::new());
    }

    for (key, title) in FORMATTED_SECTIONS {
        if let Some(body) = sections.get(key) {
            output.push(format_section(title, body));
            output.push(String::new());
        }
    }

    output.push("Source Code:\n".to_string());
    output.push(format!("  {}", info.source_url));
    output.push(String::new());

    if let Some(history) = sections.get("history") {
        output.push(format_history(history));
        output.push(String::new());
    }

    output.push("License:\n".to_string());
    output.push(format!("  {}", info.license));
    output.push(String::new());

    output.push("Contact:\n".to_string());
    output.push(format!("  {}", info.contact));

    output.join("\n")
}
