//! The lexical comment stripper
//!
//! One forward pass over the token stream, guided by the precomputed
//! bare-string position set. Comments and docstrings are dropped unless an
//! exception rule keeps them; everything else is carried through untouched.

use crate::analysis::bare_string_positions;
use crate::lexing::{reassemble, tokenize, Token, TokenKind};
use crate::strip::{postprocess, shader};
use once_cell::sync::Lazy;
use regex::Regex;

/// Flags for a single run, all off by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Keep bare strings whose contents look like embedded shader source
    pub keep_shader_strings: bool,
    /// Collapse runs of blank lines down to one
    pub squeeze_blank_lines: bool,
    /// Keep comments containing TODO or FIXME (any case)
    pub keep_todo_comments: bool,
    /// Drop lines consisting of a single backslash
    pub remove_backslash_placeholders: bool,
}

/// Outcome of one cleaning pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    pub text: String,
    pub comments_removed: usize,
    pub docstrings_removed: usize,
    /// The source could not be tokenized and was returned unchanged
    pub fallback: bool,
}

/// PEP 263 encoding declaration, as matched inside a comment's text
static CODING_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"coding[:=][ \t]*([-_.a-zA-Z0-9]+)").expect("valid regex"));

/// Remove comments and docstring statements from Python source
///
/// Pure transformation with no side effects. A lexical error makes the
/// whole pass fall back to returning the input unchanged rather than
/// emitting a truncated file; structural analysis failures inside
/// [`bare_string_positions`] merely disable docstring removal.
pub fn clean_source(source: &str, options: &Options) -> CleanResult {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(_) => {
            return CleanResult {
                text: source.to_string(),
                comments_removed: 0,
                docstrings_removed: 0,
                fallback: true,
            }
        }
    };
    let bare_strings = bare_string_positions(&tokens);

    let mut dropped: Vec<&Token> = Vec::new();
    let mut comments_removed = 0;
    let mut docstrings_removed = 0;
    for token in &tokens {
        match token.kind {
            TokenKind::Comment => {
                if keep_comment(token, options) {
                    continue;
                }
                comments_removed += 1;
                dropped.push(token);
            }
            TokenKind::Str if bare_strings.contains(&token.start) => {
                if options.keep_shader_strings && shader::looks_like_shader(token.string_contents())
                {
                    continue;
                }
                docstrings_removed += 1;
                dropped.push(token);
            }
            _ => {}
        }
    }

    let mut text = reassemble(source, &dropped);
    if options.squeeze_blank_lines {
        text = postprocess::squeeze_blank_lines(&text);
    }
    if options.remove_backslash_placeholders {
        text = postprocess::remove_backslash_placeholders(&text);
    }

    CleanResult {
        text,
        comments_removed,
        docstrings_removed,
        fallback: false,
    }
}

fn keep_comment(token: &Token, options: &Options) -> bool {
    // Shebang on the very first line
    if token.start.row == 1 && token.text.starts_with("#!") {
        return true;
    }
    // Encoding declaration on line 1 or 2
    if token.start.row <= 2 && CODING_DECLARATION.is_match(&token.text) {
        return true;
    }
    if options.keep_todo_comments {
        let upper = token.text.to_uppercase();
        if upper.contains("TODO") || upper.contains("FIXME") {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(source: &str) -> String {
        clean_source(source, &Options::default()).text
    }

    #[test]
    fn test_comments_and_docstrings_removed() {
        let source = "# hello\nx = 1\n\"\"\"doc\"\"\"\ny = 2\n";
        let result = clean_source(source, &Options::default());
        assert_eq!(result.text, "x = 1\ny = 2\n");
        assert_eq!(result.comments_removed, 1);
        assert_eq!(result.docstrings_removed, 1);
        assert!(!result.fallback);
    }

    #[test]
    fn test_shebang_kept() {
        let source = "#!/usr/bin/env python\n# gone\nx = 1\n";
        assert_eq!(clean(source), "#!/usr/bin/env python\nx = 1\n");
    }

    #[test]
    fn test_shebang_only_counts_on_line_one() {
        assert_eq!(clean("x = 1\n#!/not/a/shebang\n"), "x = 1\n");
    }

    #[test]
    fn test_coding_declaration_kept_on_first_two_lines() {
        let source = "# -*- coding: utf-8 -*-\nx = 1\n";
        assert_eq!(clean(source), source);
        let source = "#!/usr/bin/env python\n# coding=latin-1\nx = 1\n";
        assert_eq!(clean(source), source);
    }

    #[test]
    fn test_coding_declaration_not_kept_on_line_three() {
        let source = "x = 1\ny = 2\n# coding: utf-8\n";
        assert_eq!(clean(source), "x = 1\ny = 2\n");
    }

    #[test]
    fn test_todo_comments_gated_by_flag() {
        let source = "# TODO fix this\n# todo lower\n# plain\nx = 1\n";
        assert_eq!(clean(source), "x = 1\n");
        let options = Options {
            keep_todo_comments: true,
            ..Options::default()
        };
        assert_eq!(
            clean_source(source, &options).text,
            "# TODO fix this\n# todo lower\nx = 1\n"
        );
    }

    #[test]
    fn test_fixme_counts_as_todo() {
        let options = Options {
            keep_todo_comments: true,
            ..Options::default()
        };
        let source = "# FIXME: later\nx = 1\n";
        assert_eq!(clean_source(source, &options).text, source);
    }

    #[test]
    fn test_shader_strings_gated_by_flag() {
        let shader = "\"\"\"\nvoid main() {\n    gl_FragColor = vec4(1.0);\n}\n\"\"\"\nx = 1\n";
        assert_eq!(clean(shader), "x = 1\n");
        let options = Options {
            keep_shader_strings: true,
            ..Options::default()
        };
        assert_eq!(clean_source(shader, &options).text, shader);
    }

    #[test]
    fn test_weak_shader_score_still_removed() {
        let options = Options {
            keep_shader_strings: true,
            ..Options::default()
        };
        let source = "\"\"\"mentions uniform once\"\"\"\nx = 1\n";
        assert_eq!(clean_source(source, &options).text, "x = 1\n");
    }

    #[test]
    fn test_non_bare_strings_survive() {
        let source = "x = \"keep me\"\nprint(\"and me\")\n";
        assert_eq!(clean(source), source);
    }

    #[test]
    fn test_tokenizer_failure_returns_input_unchanged() {
        let source = "x = \"unterminated\ny = 2\n";
        let result = clean_source(source, &Options::default());
        assert_eq!(result.text, source);
        assert!(result.fallback);
        assert_eq!(result.comments_removed, 0);
    }

    #[test]
    fn test_unbalanced_brackets_still_strip_comments() {
        // Structural analysis fails open; lexical filtering proceeds
        let source = "x = (1,\n# gone\n";
        assert_eq!(clean(source), "x = (1,\n");
    }

    #[test]
    fn test_squeeze_blank_lines_option() {
        let options = Options {
            squeeze_blank_lines: true,
            ..Options::default()
        };
        let source = "x = 1\n\n\n\ny = 2\n";
        assert_eq!(clean_source(source, &options).text, "x = 1\n\ny = 2\n");
    }

    #[test]
    fn test_remove_backslash_placeholders_option() {
        let options = Options {
            remove_backslash_placeholders: true,
            ..Options::default()
        };
        let source = "x = 1\n\\\ny = 2\n";
        assert_eq!(clean_source(source, &options).text, "x = 1\ny = 2\n");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let source = "#!/usr/bin/env python\n# gone\n\"\"\"doc\"\"\"\n\n\nx = 1  # tail\n";
        let options = Options {
            squeeze_blank_lines: true,
            ..Options::default()
        };
        let once = clean_source(source, &options);
        let twice = clean_source(&once.text, &options);
        assert_eq!(once.text, twice.text);
        assert_eq!(twice.comments_removed, 0);
        assert_eq!(twice.docstrings_removed, 0);
    }

    #[test]
    fn test_empty_source() {
        let result = clean_source("", &Options::default());
        assert_eq!(result.text, "");
        assert!(!result.fallback);
    }
}
