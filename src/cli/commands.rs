use crate::core::{detect_orbital_columns, extract_config};
use crate::error::{DrtError, DrtResult};
use crate::excel::{DrtLayout, Grid};
use crate::types::DrtConfig;
use crate::writer;
use colored::Colorize;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Default location of the DRT snapshot every run reads from
pub const DEFAULT_INPUT: &str = "Scripts/DRT.xlsx";
/// Default location of the generated input values
pub const DEFAULT_OUTPUT: &str = "Scripts/input_values.txt";

/// Filesystem locations used by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Canonical snapshot of the input spreadsheet
    pub canonical_input: PathBuf,
    pub output: PathBuf,
}

impl Paths {
    /// Same relative layout, rooted at `root` instead of the working directory
    pub fn under<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            canonical_input: root.join(DEFAULT_INPUT),
            output: root.join(DEFAULT_OUTPUT),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            canonical_input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// How the canonical snapshot came to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Copied from a user-supplied path
    Copied(PathBuf),
    /// Already at the canonical location
    Existing,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub source: InputSource,
    pub columns: Vec<usize>,
    pub config: DrtConfig,
    pub output: PathBuf,
}

/// Make `path` absolute against the working directory and fold `.`/`..`
/// without touching the filesystem
pub fn normalize_path(path: &Path) -> DrtResult<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Put the spreadsheet at the canonical location, copying if it lives elsewhere
pub fn resolve_input(input: Option<&Path>, paths: &Paths) -> DrtResult<InputSource> {
    let canonical = &paths.canonical_input;
    if let Some(parent) = canonical.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let requested = input.unwrap_or(canonical.as_path());
    if normalize_path(requested)? == normalize_path(canonical)? {
        debug!(path = %canonical.display(), "input already at canonical location");
        return Ok(InputSource::Existing);
    }

    if !requested.exists() {
        return Err(DrtError::MissingFile(requested.to_path_buf()));
    }

    fs::copy(requested, canonical)?;
    info!(
        from = %requested.display(),
        to = %canonical.display(),
        "copied spreadsheet to canonical location"
    );
    Ok(InputSource::Copied(requested.to_path_buf()))
}

/// Execute the full conversion: resolve, load, detect, extract, write
pub fn run(input: Option<PathBuf>, paths: &Paths, layout: &DrtLayout) -> DrtResult<RunReport> {
    let source = resolve_input(input.as_deref(), paths)?;
    match &source {
        InputSource::Copied(from) => println!(
            "Copied '{}' → '{}'",
            from.display(),
            paths.canonical_input.display()
        ),
        InputSource::Existing => println!(
            "Using existing {} (no copy needed).",
            paths.canonical_input.display()
        ),
    }

    let grid = Grid::load(&paths.canonical_input)?;

    let columns = detect_orbital_columns(&grid, layout)?;
    println!("Detected orbital columns: {columns}");

    let config = extract_config(&grid, layout, &columns)?;
    writer::write_output(&paths.output, &config)?;

    println!("\n{}", "Parsing complete!".bold().green());
    println!("Output written to {}", paths.output.display());

    Ok(RunReport {
        source,
        columns: columns.indices().to_vec(),
        config,
        output: paths.output.clone(),
    })
}
