//! Section formatting in the Aminet indented layout

use crate::strip::strip_markdown;
use regex::Regex;
use std::sync::LazyLock;

/// Code fence delimiter
pub const FENCE_MARKER: &str = "```";

const LIST_MARKER: &str = "- ";

/// `- **label** - description`, anchored at the line start
static HISTORY_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\s*\*\*(.+?)\*\*\s*-\s*(.+)").expect("valid history entry pattern")
});

/// Format a section body under a title
///
/// Produces `"<title>:\n"` followed by one line per content line:
/// list items become `  * text`, other text becomes `  text`.
/// Blank lines and code fence lines are skipped.
pub fn format_section(title: &str, content: &str) -> String {
    let mut lines = vec![format!("{}:\n", title)];

    for line in content.split('\n') {
        let line = line.trim();
        if line.is_empty() || line.starts_with(FENCE_MARKER) {
            continue;
        }

        if let Some(item) = line.strip_prefix(LIST_MARKER) {
            lines.push(format!("  * {}", strip_markdown(item)));
        } else {
            let text = strip_markdown(line);
            if !text.is_empty() {
                lines.push(format!("  {}", text));
            }
        }
    }

    lines.join("\n")
}

/// Format the history section
///
/// Only entries shaped like `- **label** - description` are kept; they
/// become `  label - description`. Anything else is dropped.
pub fn format_history(content: &str) -> String {
    let mut lines = vec!["History:\n".to_string()];

    for line in content.split('\n') {
        let line = line.trim();
        if !line.starts_with("- **") {
            continue;
        }
        if let Some(caps) = HISTORY_ENTRY.captures(line) {
            lines.push(format!("  {} - {}", &caps[1], &caps[2]));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        assert_eq!(
            format_section("Features", "- one\n- two"),
            "Features:\n\n  * one\n  * two"
        );
    }

    #[test]
    fn test_format_paragraph_and_list() {
        let content = "Copy the files:\n\n- `SyncTime` to `SYS:Tools/Commodities`\n- **Reboot**";
        assert_eq!(
            format_section("Installation", content),
            "Installation:\n\n  Copy the files:\n  * SyncTime to SYS:Tools/Commodities\n  * Reboot"
        );
    }

    #[test]
    fn test_format_skips_fences_and_blank_lines() {
        let content = "Run it:\n\n```sh\nSyncTime\n```\n\nDone.";
        assert_eq!(
            format_section("Usage", content),
            "Usage:\n\n  Run it:\n  SyncTime\n  Done."
        );
    }

    #[test]
    fn test_format_trims_lines() {
        assert_eq!(
            format_section("Usage", "   - nested item   \n\tindented text"),
            "Usage:\n\n  * nested item\n  indented text"
        );
    }

    #[test]
    fn test_format_skips_any_fence_prefixed_line() {
        assert_eq!(format_section("Usage", "x\n``````\n```c\ny"), "Usage:\n\n  x\n  y");
    }

    #[test]
    fn test_format_keeps_empty_list_item() {
        // Trimming turns a bare "- " into plain text
        assert_eq!(format_section("Features", "- "), "Features:\n\n  -");
        assert_eq!(format_section("Features", "- ```x```"), "Features:\n\n  * ");
    }

    #[test]
    fn test_format_empty_body() {
        assert_eq!(format_section("Requirements", ""), "Requirements:\n");
    }

    #[test]
    fn test_format_star_bullets_are_text() {
        assert_eq!(format_section("Features", "* one"), "Features:\n\n  * one");
        assert_eq!(format_section("Features", "+ one"), "Features:\n\n  + one");
    }

    #[test]
    fn test_history() {
        assert_eq!(
            format_history("- **1.0** - Initial release"),
            "History:\n\n  1.0 - Initial release"
        );
    }

    #[test]
    fn test_history_multiple_entries() {
        let content = "- **1.1** - Added timezone support\n- **1.0** - Initial release";
        assert_eq!(
            format_history(content),
            "History:\n\n  1.1 - Added timezone support\n  1.0 - Initial release"
        );
    }

    #[test]
    fn test_history_skips_malformed_entries() {
        let content = "Release notes:\n- 1.2 - no bold\n- **1.1** no dash\n- **1.0** - Initial release";
        assert_eq!(format_history(content), "History:\n\n  1.0 - Initial release");
    }

    #[test]
    fn test_history_label_is_lazy() {
        assert_eq!(
            format_history("- **1.0** - uses **bold** text"),
            "History:\n\n  1.0 - uses **bold** text"
        );
    }

    #[test]
    fn test_history_loose_spacing() {
        assert_eq!(
            format_history("  - **2.0 (2024-01-05)**-Rewrite  "),
            "History:\n\n  2.0 (2024-01-05) - Rewrite"
        );
    }

    #[test]
    fn test_history_empty() {
        assert_eq!(format_history(""), "History:\n");
    }
}
