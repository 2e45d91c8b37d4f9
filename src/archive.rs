use crate::config::ArchiverConfig;
use crate::trie::FileStats;
use crate::utils::{format_entry, read_entry};
use crate::walker::{walk_candidates, Candidate};
use crate::ArchiveError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tiktoken_rs::{get_bpe_from_model, CoreBPE};
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedFile {
    pub relative_path: PathBuf,
    pub stats: FileStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// What a run wrote and what it had to skip. File contents are not kept.
#[derive(Debug, Default)]
pub struct ArchiveReport {
    pub archived: Vec<ArchivedFile>,
    pub failures: Vec<FileFailure>,
}

pub trait Archiver {
    fn archive(&self, root: &Path, output: &Path) -> Result<ArchiveReport, ArchiveError>;
}

pub struct BasicArchiver {
    config: ArchiverConfig,
}

impl BasicArchiver {
    pub fn new(config: ArchiverConfig) -> Self {
        BasicArchiver { config }
    }

    fn load_tokenizer(&self) -> Result<Option<CoreBPE>, ArchiveError> {
        match &self.config.token_model {
            Some(model) => {
                debug!("Loading tokenizer for model: {}", model);
                get_bpe_from_model(model)
                    .map(Some)
                    .map_err(|e| ArchiveError::TokenizerModelError(e.to_string()))
            }
            None => Ok(None),
        }
    }

    /// Streams every eligible file under `root` into `writer`.
    ///
    /// `skip` names a canonical path that must never be archived, normally the
    /// output file itself when it lives inside the root.
    pub fn write_archive<W: Write>(
        &self,
        root: &Path,
        writer: &mut W,
        skip: Option<&Path>,
    ) -> Result<ArchiveReport, ArchiveError> {
        let tokenizer = self.load_tokenizer()?;
        self.write_entries(root, writer, skip, tokenizer.as_ref())
    }

    fn write_entries<W: Write>(
        &self,
        root: &Path,
        writer: &mut W,
        skip: Option<&Path>,
        tokenizer: Option<&CoreBPE>,
    ) -> Result<ArchiveReport, ArchiveError> {
        let mut report = ArchiveReport::default();

        for candidate in walk_candidates(root, &self.config) {
            if is_skipped(&candidate, skip) {
                debug!("Skipping the archive itself: {}", candidate.path.display());
                continue;
            }

            match read_entry(&candidate.path, &candidate.relative_path) {
                Ok(entry) => {
                    let block = format_entry(&entry);
                    writer.write_all(block.as_bytes())?;
                    let tokens = tokenizer.map(|bpe| bpe.encode_ordinary(&block).len());
                    trace!(
                        "Archived {} ({} bytes)",
                        entry.relative_path.display(),
                        block.len()
                    );
                    report.archived.push(ArchivedFile {
                        relative_path: entry.relative_path,
                        stats: FileStats {
                            bytes: block.len(),
                            tokens,
                        },
                    });
                }
                Err(e) => {
                    warn!("Skipping unreadable file. {}", e);
                    report.failures.push(FileFailure {
                        path: candidate.path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        writer.flush()?;
        Ok(report)
    }
}

impl Archiver for BasicArchiver {
    fn archive(&self, root: &Path, output: &Path) -> Result<ArchiveReport, ArchiveError> {
        if !root.exists() {
            return Err(ArchiveError::RootNotFound(root.display().to_string()));
        }
        let tokenizer = self.load_tokenizer()?;

        debug!("Creating archive: {}", output.display());
        let file = File::create(output)
            .map_err(|e| ArchiveError::OutputError(output.display().to_string(), e.to_string()))?;
        let skip = self_inclusion_guard(root, output);
        let mut writer = BufWriter::new(file);

        let report = self
            .write_entries(root, &mut writer, skip.as_deref(), tokenizer.as_ref())
            .map_err(|e| match e {
                ArchiveError::IoError(msg) => {
                    ArchiveError::OutputError(output.display().to_string(), msg)
                }
                other => other,
            })?;

        info!(
            "Archived {} files into {} ({} failed)",
            report.archived.len(),
            output.display(),
            report.failures.len()
        );
        Ok(report)
    }
}

/// Canonical output path when the output sits under the root, so the walk can step over it.
fn self_inclusion_guard(root: &Path, output: &Path) -> Option<PathBuf> {
    let root = fs::canonicalize(root).ok()?;
    let output = fs::canonicalize(output).ok()?;
    if output.starts_with(&root) {
        Some(output)
    } else {
        None
    }
}

fn is_skipped(candidate: &Candidate, skip: Option<&Path>) -> bool {
    match skip {
        Some(skip) if candidate.path.file_name() == skip.file_name() => fs::canonicalize(&candidate.path)
            .map(|p| p == skip)
            .unwrap_or(false),
        _ => false,
    }
}

pub fn create_code_archive(
    config: ArchiverConfig,
    root: &Path,
    output: &Path,
) -> Result<ArchiveReport, ArchiveError> {
    let archiver = BasicArchiver::new(config);
    archiver.archive(root, output)
}
