//! Block auto-continuation for the Lua editor.
//!
//! When the user presses Enter, the line just completed is matched against an
//! ordered set of block-opening patterns; the first match decides what to
//! insert: a continuation line indented one step deeper plus the block's
//! closing line at the original indentation. The editor widget owns the text
//! buffer and applies the insertion; this module only computes it.
//!
//! Matching is purely syntactic on the single previous line. There is no
//! awareness of nesting, strings, or comments: a line shaped like a block
//! header triggers its rule wherever the keywords came from.

use lazy_static::lazy_static;
use regex::Regex;

use crate::util::leading_ws;

/// One indent step, matching the editor's two-space tab size.
pub const INDENT_UNIT: &str = "  ";

/// What terminates the block a rule opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Closer {
  /// Plain `end` on its own line.
  End,
  /// `until ` with a trailing space: the user finishes the condition on the
  /// closing line itself, so no further terminator follows.
  Until,
}

impl Closer {
  fn text(self) -> &'static str {
    match self {
      Closer::End => "end",
      Closer::Until => "until ",
    }
  }
}

lazy_static! {
  /// Block-opening rules, tried top to bottom against the trimmed line.
  static ref RULES: [(Regex, Closer); 5] = [
    (Regex::new(r"^if\s+.*\s+then$").unwrap(), Closer::End),
    (Regex::new(r"^function\s+.*\(\s*.*\s*\)$").unwrap(), Closer::End),
    (Regex::new(r"^for\s+.*\s+do$").unwrap(), Closer::End),
    (Regex::new(r"^while\s+.*\s+do$").unwrap(), Closer::End),
    (Regex::new(r"^repeat$").unwrap(), Closer::Until),
  ];
}

/// Text to insert at the cursor plus where the cursor lands afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinuationDecision {
  /// Block to insert at the cursor: the indented continuation line, a
  /// newline, and the closing line.
  pub insert: String,
  /// 1-based column on the line the newline created, i.e. the end of the
  /// inserted continuation indentation. Matches the editor widget's
  /// coordinate convention.
  pub cursor_col: usize,
}

/// Decide whether the line completed by a newline keystroke opens a block.
///
/// Returns `None` when no rule matches; the editor's default newline
/// behavior applies then.
pub fn on_newline(previous_line: &str) -> Option<ContinuationDecision> {
  let trimmed = previous_line.trim();
  let closer = RULES
    .iter()
    .find(|(re, _)| re.is_match(trimmed))
    .map(|(_, closer)| *closer)?;

  let indent = leading_ws(previous_line);
  let next_indent = format!("{}{}", indent, INDENT_UNIT);
  let insert = format!("{}\n{}{}", next_indent, indent, closer.text());
  let cursor_col = next_indent.len() + 1;
  Some(ContinuationDecision { insert, cursor_col })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn if_then_inserts_end() {
    let d = on_newline("if x then").unwrap();
    assert_eq!(d.insert, "  \nend");
    assert_eq!(d.cursor_col, 3);
  }

  #[test]
  fn indented_for_keeps_indentation() {
    let d = on_newline("    for i = 1, 10 do").unwrap();
    assert_eq!(d.insert, "      \n    end");
    assert_eq!(d.cursor_col, 7);
  }

  #[test]
  fn while_do_inserts_end() {
    let d = on_newline("while count < 10 do").unwrap();
    assert_eq!(d.insert, "  \nend");
  }

  #[test]
  fn function_header_inserts_end() {
    let d = on_newline("function greet(name)").unwrap();
    assert_eq!(d.insert, "  \nend");
    assert_eq!(d.cursor_col, 3);
  }

  #[test]
  fn repeat_inserts_until_with_trailing_space() {
    let d = on_newline("repeat").unwrap();
    assert_eq!(d.insert, "  \nuntil ");
    assert_eq!(d.cursor_col, 3);
  }

  #[test]
  fn indented_repeat_closes_at_same_indentation() {
    let d = on_newline("  repeat").unwrap();
    assert_eq!(d.insert, "    \n  until ");
    assert_eq!(d.cursor_col, 5);
  }

  #[test]
  fn plain_statement_yields_no_decision() {
    assert_eq!(on_newline("local x = 5"), None);
  }

  #[test]
  fn repeat_with_trailing_tokens_yields_no_decision() {
    // Rule 5 matches the whole trimmed line only.
    assert_eq!(on_newline("repeat -- spin"), None);
  }

  #[test]
  fn matching_ignores_strings_and_comments() {
    // The header shape is all that counts; keywords inside a string literal
    // or a trailing comment do not stop (or cause) a match.
    assert!(on_newline("if s == \"function f() end\" then").is_some());
    assert!(on_newline("if x then -- then").is_some());
    assert_eq!(on_newline("print(\"while true do\")"), None);
  }

  #[test]
  fn blank_line_yields_no_decision() {
    assert_eq!(on_newline(""), None);
    assert_eq!(on_newline("    "), None);
  }
}
