//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose. Global limits
//! and verbosity are attached once to the root command.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Single source file (positional). `-` reads stdin.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Auto source file (`-` for stdin)")
}

/// File, directory, or `-` (positional).
pub fn check_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Auto source file, directory of .at files, or `-` for stdin")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Print the CST instead of the s-expression (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Print the concrete syntax tree with every token")
}

/// Include whitespace and comments in the CST (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .requires("raw")
        .help("Include whitespace and comments (with --raw)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the node types summary as JSON")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .global(true)
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit (tokens the parser may consume)")
}

/// Recursion limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .global(true)
        .default_value("1024")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .global(true)
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}
