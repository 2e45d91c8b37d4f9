use crate::ArchiveError;
use std::fs;
use std::path::{Path, PathBuf};

/// One header-plus-contents block, built per file and written immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveEntry {
    pub relative_path: PathBuf,
    pub contents: String,
}

pub fn read_file_content(file_path: &Path) -> Result<String, ArchiveError> {
    fs::read_to_string(file_path)
        .map_err(|err| ArchiveError::FileReadError(file_path.display().to_string(), err.to_string()))
}

/// Reads a candidate fully before anything is written, so a failure leaves no trace in the archive.
pub fn read_entry(path: &Path, relative_path: &Path) -> Result<ArchiveEntry, ArchiveError> {
    let contents = read_file_content(path)?;
    Ok(ArchiveEntry {
        relative_path: relative_path.to_path_buf(),
        contents,
    })
}

pub fn format_header(relative_path: &Path) -> String {
    format!("//{}\n", relative_path.display())
}

/// Renders `//<relative path>`, the verbatim contents and a blank separator line.
pub fn format_entry(entry: &ArchiveEntry) -> String {
    let header = format_header(&entry.relative_path);
    let mut block = String::with_capacity(header.len() + entry.contents.len() + 2);
    block.push_str(&header);
    block.push_str(&entry.contents);
    block.push_str("\n\n");
    block
}
