//! Append-only access to ignore files
//!
//! Ignore files are never rewritten: content is only ever scanned or
//! appended to. No locking is taken.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve `path` to an absolute, symlink-free directory path.
///
/// Uses `dunce` so Windows paths stay in their familiar `C:\` form.
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

/// Permissions used when an ignore file has to be created.
pub const FILE_MODE: u32 = 0o644;

/// An opened ignore file.
///
/// The file is created (empty, with [`FILE_MODE`]) if it does not exist.
/// Existing content and permissions are left alone.
#[derive(Debug)]
pub struct IgnoreFile {
    path: PathBuf,
    file: File,
}

impl IgnoreFile {
    /// Open `path` for reading and appending, creating it if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let file = options.open(&path).map_err(|e| Error::io(&path, e))?;
        tracing::trace!(path = %path.display(), "Opened ignore file");
        Ok(Self { path, file })
    }

    /// Path the handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the last byte of the file is a newline.
    ///
    /// An empty file has no last byte and reports `false`.
    pub fn ends_with_newline(&mut self) -> Result<bool> {
        self.ends_with_newline_inner()
            .map_err(|e| Error::io(&self.path, e))
    }

    fn ends_with_newline_inner(&mut self) -> std::io::Result<bool> {
        let len = self.file.seek(SeekFrom::End(0))?;
        if len == 0 {
            return Ok(false);
        }
        let mut last = [0u8; 1];
        self.file.seek(SeekFrom::End(-1))?;
        self.file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    /// Scan the file line by line from the start, stopping at the first line
    /// for which `matches` returns true.
    ///
    /// Lines are passed without their line ending. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn find_line(&mut self, mut matches: impl FnMut(&str) -> bool) -> Result<bool> {
        let path = self.path.clone();
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(&path, e))?;

        let mut reader = BufReader::new(&mut self.file);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(&path, e))?;
            if read == 0 {
                return Ok(false);
            }
            let line = String::from_utf8_lossy(&buf);
            if matches(line.trim_end_matches(['\n', '\r'])) {
                return Ok(true);
            }
        }
    }

    /// Append `lines`, each terminated by a newline.
    ///
    /// If the file does not already end with a newline one is written first,
    /// so appended content never joins a partial last line.
    pub fn append_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        self.append_lines_inner(lines)
            .map_err(|e| Error::io(&self.path, e))
    }

    fn append_lines_inner<S: AsRef<str>>(&mut self, lines: &[S]) -> std::io::Result<()> {
        let needs_separator = !self.ends_with_newline_inner()?;
        self.file.seek(SeekFrom::End(0))?;

        let mut writer = BufWriter::new(&mut self.file);
        if needs_separator {
            writer.write_all(b"\n")?;
        }
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        drop(writer);

        self.file.sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ends_with_newline_empty_file() {
        let temp = TempDir::new().unwrap();
        let mut file = IgnoreFile::open(temp.path().join("empty")).unwrap();
        assert!(!file.ends_with_newline().unwrap());
    }

    #[test]
    fn test_find_line_stops_at_first_match() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lines");
        std::fs::write(&path, "a\nb\nc\n").unwrap();

        let mut seen = Vec::new();
        let mut file = IgnoreFile::open(&path).unwrap();
        let found = file
            .find_line(|line| {
                seen.push(line.to_string());
                line == "b"
            })
            .unwrap();

        assert!(found);
        assert_eq!(seen, vec!["a", "b"]);
    }
}
