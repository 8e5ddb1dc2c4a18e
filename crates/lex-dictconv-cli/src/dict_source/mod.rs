//! Locating and reading the dictionary files in the working directories.
//!
//! Mozc: `dictionary*.txt` (TSV `reading\tleft_id\tright_id\tcost\tsurface`).
//! Sudachi: `core_lex.csv`, `notcore_lex.csv` (18-column CSV).
//! Both name patterns come from [`InputSettings`].

use std::fs;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use lex_dictconv::settings::InputSettings;
use lex_dictconv::{DictError, ExistingIndex};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: DictError,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("source lexicon not found: {0}")]
    MissingSource(PathBuf),
}

/// List files in `dir` whose names satisfy `predicate`, sorted by name.
pub fn list_dict_files(
    dir: &Path,
    predicate: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>, DictSourceError> {
    if !dir.is_dir() {
        return Err(DictSourceError::NotADirectory(dir.to_path_buf()));
    }
    let mut files: Vec<fs::DirEntry> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            let name = entry.file_name();
            predicate(&name.to_string_lossy())
        })
        .collect();
    files.sort_by_key(|e| e.file_name());
    Ok(files.into_iter().map(|e| e.path()).collect())
}

/// Existing Mozc dictionary files in `dir`. May be empty.
pub fn existing_files(dir: &Path, input: &InputSettings) -> Result<Vec<PathBuf>, DictSourceError> {
    list_dict_files(dir, |name| {
        name.starts_with(&input.existing_prefix) && name.ends_with(&input.existing_suffix)
    })
}

/// Configured Sudachi lexicon files in `dir`, in configured order.
/// Every file must exist.
pub fn source_files(dir: &Path, input: &InputSettings) -> Result<Vec<PathBuf>, DictSourceError> {
    if !dir.is_dir() {
        return Err(DictSourceError::NotADirectory(dir.to_path_buf()));
    }
    input
        .source_files
        .iter()
        .map(|name| {
            let path = dir.join(name);
            if path.is_file() {
                Ok(path)
            } else {
                Err(DictSourceError::MissingSource(path))
            }
        })
        .collect()
}

/// Build the existing-entry index from every file in `paths`.
pub fn load_existing_index(paths: &[PathBuf]) -> Result<ExistingIndex, DictSourceError> {
    let mut index = ExistingIndex::new();
    if paths.is_empty() {
        warn!("no existing dictionary files; only in-run duplicates will be removed");
        return Ok(index);
    }

    for path in paths {
        eprintln!("Reading {}...", path.display());
        let file = fs::File::open(path)?;
        index
            .extend_from_reader(BufReader::new(file))
            .map_err(|source| DictSourceError::Read {
                path: path.clone(),
                source,
            })?;
    }

    eprintln!(
        "  (indexed {} entries from {} rows, {} with unparsable IDs)",
        index.len(),
        index.rows(),
        index.unindexed()
    );
    Ok(index)
}
