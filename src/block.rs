use std::sync::LazyLock;

use regex::Regex;

// The declaration looks like `pub const targets = .{ ... };`. The capture
// starts right after the `.` and runs to the first `};`, so it includes the
// opening `{` of the anonymous list. Callers only pull quoted names out of
// it, so the extra brace is harmless.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)pub const targets = \.(.*?)\};").expect("block pattern is valid")
});

/// Find the body of the first `targets` declaration in the configuration
/// text, or `None` when the file declares no such list.
pub fn find_targets_block(contents: &str) -> Option<&str> {
    BLOCK_RE
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
