//! Small utility helpers used across modules.

/// Leading-whitespace prefix of a line (its indentation).
pub fn leading_ws(line: &str) -> &str {
  let rest = line.trim_start();
  &line[..line.len() - rest.len()]
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    s.to_string()
  } else {
    let mut end = max;
    while !s.is_char_boundary(end) {
      end -= 1;
    }
    format!("{}… ({} bytes total)", &s[..end], s.len())
  }
}
