//! Vector corpus loading.
//!
//! A corpus is a set of named groups. Each group is a YAML list of records:
//!
//! ```yaml
//! - builder: TransferTransactionBuilder
//!   payload: D4000000000000006AE7B860A2F24F9E...
//! - builder: AggregateTransactionBuilder
//!   payload: '0100'
//! ```
//!
//! Records may carry extra keys; only `builder` and `payload` are read. The
//! loader flattens every group into one list, keeping group order and record
//! order so case enumeration is reproducible.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{LoadError, VectorFormatError, VectorSourceError};

/// One conformance case as found in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestVectorItem {
    /// Tag of the group the record came from
    pub filename: String,
    /// Declared builder name, possibly a legacy alias
    pub builder: String,
    /// Golden encoding as hex
    pub payload: String,
}

// `~` and missing keys both land as `None`
#[derive(Deserialize)]
struct RawRecord {
    builder: Option<String>,
    payload: Option<String>,
}

/// What to do with a group whose content is malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatErrorPolicy {
    /// Fail the whole load.
    #[default]
    Abort,
    /// Drop the group, log it and record it in [`LoadedCorpus::skipped`].
    Skip,
}

/// A readable vector group.
pub trait VectorSource {
    /// Tag attached to every record of this group.
    fn name(&self) -> &str;

    fn read(&self) -> io::Result<String>;
}

/// Group stored in a file; tagged with the bare file name.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VectorSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Group held in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    text: String,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl VectorSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}

/// Flattened corpus
#[derive(Debug, Default)]
pub struct LoadedCorpus {
    pub items: Vec<TestVectorItem>,
    /// Groups dropped under [`FormatErrorPolicy::Skip`]
    pub skipped: Vec<VectorFormatError>,
}

/// Parse one group's text into records tagged with `filename`.
pub fn parse_group(filename: &str, text: &str) -> Result<Vec<TestVectorItem>, VectorFormatError> {
    let format_error = |detail: String| VectorFormatError {
        group: filename.to_string(),
        detail,
    };

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Option<Vec<RawRecord>> =
        serde_yaml::from_str(text).map_err(|e| format_error(e.to_string()))?;

    records
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let builder = match record.builder {
                Some(builder) if !builder.is_empty() => builder,
                Some(_) => return Err(format_error(format!("record {index}: empty builder name"))),
                None => return Err(format_error(format!("record {index}: missing or null builder"))),
            };
            let payload = record
                .payload
                .ok_or_else(|| format_error(format!("record {index}: missing or null payload")))?;
            Ok(TestVectorItem {
                filename: filename.to_string(),
                builder,
                payload,
            })
        })
        .collect()
}

/// Read and flatten every group, in order.
#[instrument(skip_all, fields(groups = sources.len(), policy = ?policy))]
pub fn load<S: VectorSource>(sources: &[S], policy: FormatErrorPolicy) -> Result<LoadedCorpus, LoadError> {
    let mut corpus = LoadedCorpus::default();

    for source in sources {
        let text = source.read().map_err(|cause| VectorSourceError {
            source_name: source.name().to_string(),
            cause,
        })?;

        match parse_group(source.name(), &text) {
            Ok(items) => {
                info!(group = source.name(), records = items.len(), "loaded vector group");
                corpus.items.extend(items);
            }
            Err(err) => match policy {
                FormatErrorPolicy::Abort => return Err(err.into()),
                FormatErrorPolicy::Skip => {
                    warn!(group = %err.group, detail = %err.detail, "skipping malformed vector group");
                    corpus.skipped.push(err);
                }
            },
        }
    }

    info!(
        cases = corpus.items.len(),
        skipped = corpus.skipped.len(),
        "vector corpus loaded"
    );
    Ok(corpus)
}

/// Every regular file under `dir`, recursively, sorted by path.
///
/// Symlinks to files are included; symlinked directories are not descended
/// into, so a link back up the tree cannot loop or load a group twice.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover(dir: &Path) -> Result<Vec<FileSource>, VectorSourceError> {
    let mut paths = Vec::new();
    walk(dir, &mut paths)?;
    paths.sort();
    Ok(paths.into_iter().map(FileSource::new).collect())
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), VectorSourceError> {
    let source_error = |cause| VectorSourceError {
        source_name: dir.display().to_string(),
        cause,
    };

    for entry in fs::read_dir(dir).map_err(source_error)? {
        let entry = entry.map_err(source_error)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(source_error)?;
        if file_type.is_dir() {
            walk(&path, out)?;
        } else if file_type.is_file() {
            out.push(path);
        } else if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => out.push(path),
                Ok(_) => debug!(path = %path.display(), "not following directory symlink"),
                Err(err) => debug!(path = %path.display(), error = %err, "skipping dangling symlink"),
            }
        }
    }
    Ok(())
}

/// [`discover`] then [`load`].
pub fn load_dir(dir: &Path, policy: FormatErrorPolicy) -> Result<LoadedCorpus, LoadError> {
    let sources = discover(dir)?;
    load(&sources, policy)
}
