// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Line-oriented input loading.
//!
//! Rosters and reservation lists are plain text with one entry per line. The
//! `InputLoader` reads such text from any `BufRead`, reader, file path or
//! string slice and hands back the raw lines for normalization. Lines whose
//! first non-blank character is `#` are treated as comments and skipped by
//! default, so hand-maintained class lists can carry notes. Everything else
//! (trimming, dropping empty lines, deduplication) is left to
//! `roster::NormalizedInput`.

use crate::roster::NormalizedInput;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

/// The error type for the input loading process.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An I/O error occurred while reading an input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A configurable reader for newline-separated name and reservation lists.
///
/// # Configuration
/// * `skip_comments`: If true (the default), lines starting with `#` after
///   leading whitespace are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLoader {
    skip_comments: bool,
}

impl Default for InputLoader {
    fn default() -> Self {
        Self {
            skip_comments: true,
        }
    }
}

impl InputLoader {
    /// Creates a new `InputLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether `#` comment lines are skipped.
    #[inline]
    pub fn skip_comments(mut self, yes: bool) -> Self {
        self.skip_comments = yes;
        self
    }

    /// Reads all lines from a type implementing `BufRead`.
    pub fn lines_from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<String>, LoadError> {
        let mut lines = Vec::new();
        for line in rdr.lines() {
            let line = line?;
            if self.skip_comments && line.trim_start().starts_with('#') {
                continue;
            }
            lines.push(line);
        }
        Ok(lines)
    }

    /// Reads all lines from a generic reader.
    #[inline]
    pub fn lines_from_reader<R: Read>(&self, r: R) -> Result<Vec<String>, LoadError> {
        self.lines_from_bufread(BufReader::new(r))
    }

    /// Reads all lines from a string slice.
    #[inline]
    pub fn lines_from_str(&self, s: &str) -> Result<Vec<String>, LoadError> {
        self.lines_from_bufread(s.as_bytes())
    }

    /// Reads all lines from a file path.
    pub fn lines_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, LoadError> {
        let path = path.as_ref();
        let with_path = |source| LoadError::File {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(with_path)?;
        match self.lines_from_reader(file) {
            Ok(lines) => Ok(lines),
            Err(LoadError::Io(source)) => Err(with_path(source)),
            Err(e) => Err(e),
        }
    }

    /// Loads and normalizes a roster file and a reservation file.
    pub fn from_paths<P, Q>(&self, names: P, reservations: Q) -> Result<NormalizedInput, LoadError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let names = self.lines_from_path(names)?;
        let reservations = self.lines_from_path(reservations)?;
        Ok(NormalizedInput::from_lines(names, reservations))
    }

    /// Loads and normalizes roster and reservation text.
    pub fn from_strs(&self, names: &str, reservations: &str) -> Result<NormalizedInput, LoadError> {
        let names = self.lines_from_str(names)?;
        let reservations = self.lines_from_str(reservations)?;
        Ok(NormalizedInput::from_lines(names, reservations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ROSTER: &str = r#"
        # Period 3
        Alice
        Bob   # not a comment, part of the name line
          # indented comment
        Alice
    "#;

    #[test]
    fn test_skips_comment_lines() {
        let loader = InputLoader::new();
        let input = loader.from_strs(ROSTER, "").expect("Failed to load");
        assert_eq!(
            input.roster().names(),
            &["Alice", "Bob   # not a comment, part of the name line"]
        );
    }

    #[test]
    fn test_comments_can_be_kept() {
        let loader = InputLoader::new().skip_comments(false);
        let lines = loader.lines_from_str("#1\nA").unwrap();
        assert_eq!(lines, vec!["#1".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let loader = InputLoader::new();
        let path = std::env::temp_dir().join("seatplan-does-not-exist-7c1e.txt");
        match loader.lines_from_path(&path) {
            Err(LoadError::File { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected File error, got {other:?}"),
        }
    }

    #[test]
    fn test_loads_from_files() {
        let dir = std::env::temp_dir();
        let names = dir.join(format!("seatplan-names-{}.txt", std::process::id()));
        let reservations = dir.join(format!("seatplan-res-{}.txt", std::process::id()));
        std::fs::File::create(&names)
            .and_then(|mut f| f.write_all(b"Alice\nBob\n"))
            .unwrap();
        std::fs::File::create(&reservations)
            .and_then(|mut f| f.write_all(b"# fixed\nAlice: 2\n"))
            .unwrap();

        let input = InputLoader::new().from_paths(&names, &reservations).unwrap();
        assert_eq!(input.roster().names(), &["Alice", "Bob"]);
        assert_eq!(input.reservation_lines(), &["Alice: 2"]);

        let _ = std::fs::remove_file(names);
        let _ = std::fs::remove_file(reservations);
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let loader = InputLoader::new();
        let bytes: &[u8] = &[0x41, 0xff, 0x0a];
        assert!(matches!(
            loader.lines_from_reader(bytes),
            Err(LoadError::Io(_))
        ));
    }
}
