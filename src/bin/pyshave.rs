//! Command-line interface for pyshave
//!
//! Usage:
//!   pyshave `<path>`                          - Clean a Python file in place
//!   pyshave `<path>` --keep-todo --json       - Keep TODO/FIXME, report as JSON
//!
//! A backup is created next to the file before it is overwritten.

use clap::{Arg, ArgAction, Command};
use pyshave::source::process_file;
use pyshave::strip::Options;
use std::path::Path;

fn main() {
    let matches = Command::new("pyshave")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Removes comments and docstrings from a Python source file")
        .arg(
            Arg::new("path")
                .help("Path to the Python file to clean")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("keep-shader-strings")
                .long("keep-shader-strings")
                .help("Do not remove docstrings that look like embedded shader source")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("squeeze-blank-lines")
                .long("squeeze-blank-lines")
                .help("Collapse runs of blank lines down to one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-todo")
                .long("keep-todo")
                .help("Keep comments containing TODO or FIXME")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("remove-backslash-placeholders")
                .long("remove-backslash-placeholders")
                .help("Drop lines consisting of a single backslash")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let options = Options {
        keep_shader_strings: matches.get_flag("keep-shader-strings"),
        squeeze_blank_lines: matches.get_flag("squeeze-blank-lines"),
        keep_todo_comments: matches.get_flag("keep-todo"),
        remove_backslash_placeholders: matches.get_flag("remove-backslash-placeholders"),
    };

    let report = process_file(Path::new(path), &options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("json") {
        let formatted = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Error formatting report: {}", e);
            std::process::exit(1);
        });
        println!("{}", formatted);
        return;
    }

    if report.unchanged {
        println!(
            "Left unchanged (file could not be tokenized): {}",
            report.path.display()
        );
    } else {
        println!(
            "Removed {} comment(s) and {} docstring(s)",
            report.comments_removed, report.docstrings_removed
        );
    }
    println!("Backup created: {}", report.backup_path.display());
    println!("Cleaned file: {}", report.path.display());
}
