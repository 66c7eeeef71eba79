//! Line-oriented "auto-fix" rewriter for JavaScript snippets.
//!
//! The rewriter has no lexical awareness: it looks at line suffixes and
//! counts brace characters, nothing more. A header such as `if (x)` will
//! get a `;` appended, and braces inside strings or comments are counted.

use once_cell::sync::Lazy;
use regex::Regex;

// JavaScript whitespace: Unicode White_Space plus the byte-order mark,
// minus NEL (U+0085).
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[\s\x{FEFF}]&&[^\x{85}]]+").unwrap());

/// Indent prepended to every rewritten line.
pub const INDENT: &str = "  ";

/// Marker that exempts a line from semicolon insertion.
pub const LINE_COMMENT: &str = "//";

/// Rewrite `code` with the auto-fix rules and return the new text.
///
/// Each `\n`-separated line is trimmed, terminated with `;` when it does not
/// already end in `;`, `{` or `}` (comment lines excepted), has its inner
/// whitespace collapsed and is indented by two spaces. If the input opens
/// more braces than it closes, one unindented `}` line is appended per
/// missing brace.
///
/// Never fails. An empty input is a single blank line, so the result is the
/// bare indent.
pub fn auto_fix(code: &str) -> String {
    let mut fixed: Vec<String> = code
        .split('\n')
        .map(fix_line)
        .map(|line| format!("{INDENT}{line}"))
        .collect();

    let missing = missing_closers(code);
    fixed.extend(std::iter::repeat_n("}".to_string(), missing));

    tracing::debug!(
        lines = fixed.len(),
        closers_added = missing,
        "auto-fix applied"
    );

    fixed.join("\n")
}

/// Number of `{` and `}` characters in `text`, in that order.
pub fn brace_balance(text: &str) -> (usize, usize) {
    text.chars().fold((0, 0), |(open, close), c| match c {
        '{' => (open + 1, close),
        '}' => (open, close + 1),
        _ => (open, close),
    })
}

/// How many `}` lines auto-fix appends for `code`.
pub fn missing_closers(code: &str) -> usize {
    let (open, close) = brace_balance(code);
    open.saturating_sub(close)
}

/// Whether a trimmed line needs a trailing `;`.
pub fn needs_semicolon(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && !trimmed.ends_with(';')
        && !trimmed.ends_with('{')
        && !trimmed.ends_with('}')
        && !trimmed.starts_with(LINE_COMMENT)
}

/// Whether `c` is whitespace to JavaScript's `trim()` and `\s`.
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn fix_line(line: &str) -> String {
    let mut trimmed = line.trim_matches(is_js_whitespace).to_string();

    if needs_semicolon(&trimmed) {
        trimmed.push(';');
    }

    WHITESPACE_RUN.replace_all(&trimmed, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_semicolon() {
        assert!(needs_semicolon("let x = 1"));
        assert!(!needs_semicolon("let x = 1;"));
        assert!(!needs_semicolon("function f() {"));
        assert!(!needs_semicolon("}"));
        assert!(!needs_semicolon("// note"));
        assert!(!needs_semicolon(""));
    }

    #[test]
    fn test_fix_line_trims_and_collapses() {
        assert_eq!(fix_line("   let   x =\t1  "), "let x = 1;");
    }

    #[test]
    fn test_js_whitespace_set() {
        assert!(is_js_whitespace('\u{feff}'));
        assert!(is_js_whitespace('\u{a0}'));
        assert!(is_js_whitespace('\t'));
        assert!(!is_js_whitespace('\u{85}'));
        assert!(!is_js_whitespace('x'));
    }

    #[test]
    fn test_brace_balance() {
        assert_eq!(brace_balance("{ { } }}"), (2, 3));
        assert_eq!(brace_balance("no braces"), (0, 0));
    }

    #[test]
    fn test_missing_closers_never_negative() {
        assert_eq!(missing_closers("}}}"), 0);
        assert_eq!(missing_closers("{{"), 2);
    }

    #[test]
    fn test_empty_input_is_bare_indent() {
        assert_eq!(auto_fix(""), "  ");
    }
}
