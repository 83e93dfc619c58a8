//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the unresolved `ColorChoice`.
//! Global flags (`--fuel`, `--max-depth`) are read from the subcommand's
//! matches, where clap propagates them.

use std::path::PathBuf;

use auto_syntax::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL};
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::Limits;
use crate::commands::check::CheckArgs;
use crate::commands::kinds::KindsArgs;
use crate::commands::tree::TreeArgs;

pub struct TreeParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
    pub limits: Limits,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
            limits: parse_limits(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            raw: p.raw,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
            limits: p.limits,
        }
    }
}

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
    pub limits: Limits,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            limits: parse_limits(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            strict: p.strict,
            color: p.color.should_colorize(),
            limits: p.limits,
        }
    }
}

pub struct KindsParams {
    pub json: bool,
}

impl KindsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<KindsParams> for KindsArgs {
    fn from(p: KindsParams) -> Self {
        Self { json: p.json }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_limits(m: &ArgMatches) -> Limits {
    Limits {
        fuel: m.get_one::<u32>("fuel").copied().unwrap_or(DEFAULT_EXEC_FUEL),
        max_depth: m
            .get_one::<u32>("max_depth")
            .copied()
            .unwrap_or(DEFAULT_RECURSION_FUEL),
    }
}
