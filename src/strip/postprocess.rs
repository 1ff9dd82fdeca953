//! Line-level cleanups applied after token filtering

/// Collapse every run of consecutive blank lines down to a single blank line
///
/// A blank line is one whose content is empty after trimming whitespace.
/// The counter resets on any non-blank line.
pub fn squeeze_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run <= 1 {
                out.push_str(line);
            }
        } else {
            blank_run = 0;
            out.push_str(line);
        }
    }
    out
}

/// Drop every line whose trimmed content is exactly a single backslash
///
/// Reflowing tools that rebuild source from positioned tokens leave these
/// behind as continuation placeholders for removed lines.
pub fn remove_backslash_placeholders(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| line.trim() != "\\")
        .collect()
}
