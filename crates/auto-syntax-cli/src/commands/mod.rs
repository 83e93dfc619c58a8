pub mod check;
pub mod kinds;
pub mod source_loader;
pub mod tree;


use auto_syntax::{Diagnostics, Document};

use source_loader::{LoadError, SourceFile};

/// Parser limits shared by every command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub fuel: u32,
    pub max_depth: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            fuel: auto_syntax::DEFAULT_EXEC_FUEL,
            max_depth: auto_syntax::DEFAULT_RECURSION_FUEL,
        }
    }
}

impl Limits {
    pub fn parse<'a>(&self, source: &'a str) -> Result<Document<'a>, auto_syntax::Error> {
        Document::new(source)
            .with_exec_fuel(Some(self.fuel))
            .with_recursion_fuel(Some(self.max_depth))
            .exec()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: auto_syntax::Error,
    },

    #[error("failed to serialize node types: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

impl CommandError {
    fn parse(file: &SourceFile, source: auto_syntax::Error) -> Self {
        Self::Parse {
            name: file.display_name().to_string(),
            source,
        }
    }
}

/// Renders diagnostics against their source, labelled with the file path when there is one.
fn render_diagnostics(diagnostics: &Diagnostics, file: &SourceFile, colored: bool) -> String {
    let printer = diagnostics.printer().source(&file.text).colored(colored);
    match file.path.as_deref() {
        Some(path) => printer.path(path).render(),
        None => printer.render(),
    }
}
