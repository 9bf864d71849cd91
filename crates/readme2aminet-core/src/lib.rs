//! readme2aminet-core: Core library for converting README.md files to Aminet readme format
//!
//! This crate provides:
//! - Section splitting of a markdown document by `## ` headings
//! - Markdown stripping (code, emphasis, links)
//! - Section and history formatting in the Aminet indented layout
//! - Assembly of the full readme with the package header and trailer blocks
//!
//! # Example
//!
//! ```
//! use readme2aminet_core::{PackageInfo, render_readme};
//!
//! let readme = "# synctime\n\n## Features\n- Fast\n";
//! let text = render_readme(readme, "1.0", &PackageInfo::default());
//! assert!(text.starts_with("Short:"));
//! assert!(text.contains("Features:\n\n  * Fast"));
//! ```

pub mod assemble;
pub mod format;
pub mod package;
pub mod section;
pub mod strip;

pub use assemble::{Error, Result, generate_readme, render_readme, render_sections};
pub use format::{format_history, format_section};
pub use package::PackageInfo;
pub use section::{SectionMap, normalize_newlines, parse_sections};
pub use strip::strip_markdown;
