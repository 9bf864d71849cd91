//! Markdown stripping
//!
//! Removes a fixed set of markdown constructs, keeping the inner text.
//! Each construct is handled in a single non-recursive pass, in this order:
//!
//! | Construct        | Example        | Result  |
//! |------------------|----------------|---------|
//! | Fenced code      | ```` ```x``` ```` | removed |
//! | Inline code      | `` `x` ``      | `x`     |
//! | Bold             | `**x**`        | `x`     |
//! | Italic           | `*x*`          | `x`     |
//! | Link             | `[x](url)`     | `x`     |
//!
//! Nested or malformed markup is not repaired.

use regex::Regex;
use std::sync::LazyLock;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[^`]*```").expect("valid fenced code pattern"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid italic pattern"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link pattern"));

/// Convert markdown text to plain text
pub fn strip_markdown(text: &str) -> String {
    let text = FENCED_CODE.replace_all(text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    text.into_owned()
}
