//! Print the syntax tree of a source.

use std::path::PathBuf;

use super::source_loader::load_source;
use super::{CommandError, Limits, render_diagnostics};

pub struct TreeArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
    pub limits: Limits,
}

/// The printed tree plus rendered diagnostics, if the source had any.
#[derive(Debug)]
pub struct TreeOutput {
    pub tree: String,
    pub diagnostics: Option<String>,
}

pub fn run(args: TreeArgs) {
    match render(&args) {
        Ok(output) => {
            if let Some(diagnostics) = output.diagnostics {
                eprint!("{}", diagnostics);
            }
            print!("{}", output.tree);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Trees are printed for invalid sources too; the parser always builds one.
pub fn render(args: &TreeArgs) -> Result<TreeOutput, CommandError> {
    let file = load_source(args.source_path.as_deref(), args.source_text.as_deref())?;
    let doc = args
        .limits
        .parse(&file.text)
        .map_err(|e| CommandError::parse(&file, e))?;

    let diagnostics = doc.diagnostics().filtered();
    let diagnostics =
        (!diagnostics.is_empty()).then(|| render_diagnostics(&diagnostics, &file, args.color));

    let tree = doc
        .printer()
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();

    Ok(TreeOutput { tree, diagnostics })
}
