pub mod archive;
pub mod config;
pub mod errors;
pub mod filter;
pub mod logger;
pub mod reporting;
pub mod trie;
pub mod utils;
pub mod walker;

pub use archive::{create_code_archive, ArchiveReport, Archiver, BasicArchiver};
pub use config::ArchiverConfig;
pub use errors::ArchiveError;
pub use filter::EntryFilter;
