//! The finished wordlist and its line-oriented writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output file could not be written.
#[derive(Error, Debug)]
#[error("Failed to write wordlist to {path:?}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Ordered, duplicate-free candidates produced by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    entries: Vec<String>,
}

impl Wordlist {
    pub(crate) fn from_ordered(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.iter().any(|e| e == candidate)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }

    /// Writes one candidate per line, each newline-terminated, no header.
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut writer = BufWriter::new(writer);
        for entry in &self.entries {
            writer.write_all(entry.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Writes the wordlist to `path`, creating missing parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        let path = path.as_ref();
        let wrap = |source| WriteError {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
        let file = File::create(path).map_err(wrap)?;
        self.write_to(file).map_err(wrap)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Wordlist written: {} entries to {:?}", self.len(), path);

        Ok(())
    }
}

impl IntoIterator for Wordlist {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
