use codepad::format::{auto_fix, brace_balance};

fn semicolons(text: &str) -> usize {
    text.matches(';').count()
}

#[test]
fn test_adds_semicolons_and_indent() {
    let code = "let x = 1\nconsole.log(x)";
    assert_eq!(auto_fix(code), "  let x = 1;\n  console.log(x);");
}

#[test]
fn test_terminated_lines_untouched() {
    let code = "let x = 1;\nfunction f() {\n}\n// comment here";
    assert_eq!(
        auto_fix(code),
        "  let x = 1;\n  function f() {\n  }\n  // comment here"
    );
}

#[test]
fn test_blank_lines_still_indented() {
    assert_eq!(auto_fix("a\n\nb"), "  a;\n  \n  b;");
}

#[test]
fn test_whitespace_collapsed() {
    let fixed = auto_fix("  let    x\t\t=   1  ");
    assert_eq!(fixed, "  let x = 1;");

    // Only the leading indent may hold two spaces in a row
    for line in fixed.lines() {
        assert!(!line[2..].contains("  "));
    }
}

#[test]
fn test_appends_unindented_closers() {
    let code = "function f() {\nif (x) {\nreturn 1";
    let fixed = auto_fix(code);
    let lines: Vec<&str> = fixed.split('\n').collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(&lines[3..], &["}", "}"]);
}

#[test]
fn test_extra_closers_not_removed() {
    let code = "}\n}";
    assert_eq!(auto_fix(code), "  }\n  }");
}

#[test]
fn test_if_header_gets_semicolon() {
    // Suffix-based insertion has no idea this is a control-flow header
    assert_eq!(auto_fix("if (ready)"), "  if (ready);");
}

#[test]
fn test_brace_balance_never_worsens() {
    let inputs = ["", "{", "{{}", "}{", "a {\nb {\n}", "} } {"];
    for input in inputs {
        let (open_in, close_in) = brace_balance(input);
        let (open_out, close_out) = brace_balance(&auto_fix(input));
        let before = open_in as i64 - close_in as i64;
        let after = open_out as i64 - close_out as i64;
        assert!(after <= before, "balance worsened for {input:?}");
        assert!(after <= 0, "still unbalanced for {input:?}");
    }
}

#[test]
fn test_second_pass_is_stable() {
    let code = "function add(a,  b) {\nreturn a + b\n\nconsole.log(add(1, 2))";
    let once = auto_fix(code);
    let twice = auto_fix(&once);
    assert_eq!(semicolons(&once), semicolons(&twice));
    assert_eq!(brace_balance(&once), brace_balance(&twice));
}

#[test]
fn test_carriage_returns_trimmed() {
    assert_eq!(auto_fix("let a = 1\r\nlet b = 2\r"), "  let a = 1;\n  let b = 2;");
}

#[test]
fn test_byte_order_mark_trimmed() {
    assert_eq!(auto_fix("\u{FEFF}let x = 1"), "  let x = 1;");
}

#[test]
fn test_byte_order_mark_collapsed_inside_line() {
    assert_eq!(auto_fix("let\u{FEFF}\u{FEFF}x = 1"), "  let x = 1;");
}

#[test]
fn test_next_line_char_is_not_whitespace() {
    assert_eq!(auto_fix("a\u{85}b"), "  a\u{85}b;");
    assert_eq!(auto_fix("\u{85}a"), "  \u{85}a;");
}
