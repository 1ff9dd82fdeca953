//! Reassembly of filtered token streams back into text
//!
//! Lines untouched by the filter are copied from the original source
//! verbatim, which is what gives the round-trip guarantee: a run with
//! nothing to remove returns the input byte-for-byte. Lines where a token
//! was dropped are rebuilt by cutting out the dropped byte ranges; a line
//! whose content was removed entirely disappears instead of leaving a blank
//! line behind, and rows interior to a dropped multi-line string disappear
//! with it.

use crate::lexing::Token;
use std::collections::HashMap;
use std::ops::Range;

/// Rebuild the source with the given tokens removed
pub fn reassemble(source: &str, dropped: &[&Token]) -> String {
    let mut dropped_by_row: HashMap<usize, Vec<Range<usize>>> = HashMap::new();
    for token in dropped {
        if token.start.row == token.end.row {
            dropped_by_row
                .entry(token.start.row)
                .or_default()
                .push(token.start.col..token.end.col);
        } else {
            dropped_by_row
                .entry(token.start.row)
                .or_default()
                .push(token.start.col..usize::MAX);
            for row in token.start.row + 1..token.end.row {
                dropped_by_row.entry(row).or_default().push(0..usize::MAX);
            }
            dropped_by_row
                .entry(token.end.row)
                .or_default()
                .push(0..token.end.col);
        }
    }
    for ranges in dropped_by_row.values_mut() {
        ranges.sort_by_key(|r| r.start);
    }

    let mut out = String::with_capacity(source.len());
    for (idx, line) in source.split_inclusive('\n').enumerate() {
        let row = idx + 1;
        let Some(ranges) = dropped_by_row.get(&row) else {
            out.push_str(line);
            continue;
        };

        let (content, ending) = split_line_ending(line);
        let mut kept = String::new();
        let mut cursor = 0;
        for range in ranges {
            let start = range.start.min(content.len());
            let end = range.end.min(content.len());
            if start > cursor {
                kept.push_str(&content[cursor..start]);
            }
            cursor = cursor.max(end);
        }
        if cursor < content.len() {
            kept.push_str(&content[cursor..]);
        }

        // Removal leaves trailing whitespace behind; a line with nothing
        // left is removed outright rather than kept blank.
        let kept = kept.trim_end();
        if kept.is_empty() {
            continue;
        }
        out.push_str(kept);
        out.push_str(ending);
    }

    out
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
