//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("auto-syntax")
        .about("Parse, inspect, and check Auto source files")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(fuel_arg())
        .arg(max_depth_arg())
        .arg(verbose_arg())
        .subcommand(tree_command())
        .subcommand(check_command())
        .subcommand(kinds_command())
}

/// Print the syntax tree of a source.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Print the syntax tree of an Auto source")
        .override_usage(
            "\
  auto-syntax tree <FILE>
  auto-syntax tree -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  auto-syntax tree main.at                  # s-expression
  auto-syntax tree main.at --raw            # CST with every token
  auto-syntax tree main.at --raw --trivia   # CST with whitespace and comments
  auto-syntax tree -s 'var x = 1' --spans   # inline source with positions"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg())
}

/// Validate sources.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check Auto sources for syntax errors")
        .override_usage(
            "\
  auto-syntax check <PATH>
  auto-syntax check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  auto-syntax check main.at          # single file
  auto-syntax check src/             # every .at file below src/
  cat main.at | auto-syntax check -  # stdin
  auto-syntax check lib.at --strict  # fail on warnings too"#,
        )
        .arg(check_path_arg())
        .arg(source_text_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Describe the grammar.
pub fn kinds_command() -> Command {
    Command::new("kinds")
        .about("List node kinds, fields, and supertypes of the Auto grammar")
        .arg(json_arg())
}
