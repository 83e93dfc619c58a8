//! Loads Auto sources from inline text, stdin, a file, or a directory tree.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use auto_syntax::language;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("source is required: use a positional path or -s/--source")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is a directory, expected a file", .0.display())]
    IsDirectory(PathBuf),

    #[error("no .at files found in '{}'", .0.display())]
    NoSources(PathBuf),
}

/// Source text plus where it came from. Inline text has no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: Option<String>,
    pub text: String,
}

impl SourceFile {
    pub fn inline(text: &str) -> Self {
        Self {
            path: None,
            text: text.to_string(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.path.as_deref().unwrap_or("<inline>")
    }
}

/// Loads exactly one source. Inline text wins over a path.
pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<SourceFile, LoadError> {
    if let Some(text) = text {
        return Ok(SourceFile::inline(text));
    }

    let Some(path) = path else {
        return Err(LoadError::Missing);
    };
    if path.as_os_str() == "-" {
        return load_stdin();
    }
    if path.is_dir() {
        return Err(LoadError::IsDirectory(path.to_path_buf()));
    }
    load_file(path)
}

/// Like [`load_source`], but a directory yields every Auto source below it, sorted by path.
pub fn load_sources(path: Option<&Path>, text: Option<&str>) -> Result<Vec<SourceFile>, LoadError> {
    match path {
        Some(dir) if text.is_none() && dir.is_dir() => load_dir(dir),
        _ => load_source(path, text).map(|file| vec![file]),
    }
}

fn load_stdin() -> Result<SourceFile, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(SourceFile {
        path: Some("<stdin>".to_string()),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<SourceFile, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile {
        path: Some(path.to_string_lossy().into_owned()),
        text,
    })
}

fn load_dir(dir: &Path) -> Result<Vec<SourceFile>, LoadError> {
    let mut paths = Vec::new();
    collect_source_paths(dir, &mut paths)?;

    if paths.is_empty() {
        return Err(LoadError::NoSources(dir.to_path_buf()));
    }

    // Sort for deterministic ordering
    paths.sort();
    tracing::debug!(dir = %dir.display(), files = paths.len(), "collected sources");

    paths.iter().map(|path| load_file(path)).collect()
}

fn collect_source_paths(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect_source_paths(&path, out)?;
        } else if is_auto_source(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_auto_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| language().file_types().contains(&ext))
}
