//! Text cleanup for captured build output.
//!
//! Failure messages and stack traces may pass through a colorized terminal
//! logger before the spy sees them; color escapes must not leak into the
//! report.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Grammar of terminal color escapes: `ESC [ <digits/semicolons> m`.
static ANSI_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid regex"));

/// Strip ANSI color-escape sequences from captured output.
///
/// Input without any escape is returned borrowed and unchanged, so
/// applying this to already-clean text is a no-op.
#[must_use]
pub fn strip_ansi(input: &str) -> Cow<'_, str> {
    ANSI_COLOR.replace_all(input, "")
}
