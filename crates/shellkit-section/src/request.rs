//! Validated section edit requests

use std::path::{Path, PathBuf};

use crate::{Error, Markers, Result, SectionMode};

/// Flag selecting [`SectionMode::Remove`] in positional argument lists.
pub const REMOVE_FLAG: &str = "--remove";

/// A fully validated request to edit one section of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRequest {
    path: PathBuf,
    markers: Markers,
    mode: SectionMode,
    lines: Vec<String>,
}

impl SectionRequest {
    /// Build a request, rejecting content lines in remove mode.
    pub fn new(
        path: impl Into<PathBuf>,
        markers: Markers,
        mode: SectionMode,
        lines: Vec<String>,
    ) -> Result<Self> {
        let path = path.into();

        if path.as_os_str().is_empty() {
            return Err(Error::insufficient("target file must not be empty"));
        }
        if mode == SectionMode::Remove && !lines.is_empty() {
            return Err(Error::insufficient(format!(
                "{REMOVE_FLAG} does not accept content lines (got {})",
                lines.len()
            )));
        }

        Ok(Self {
            path,
            markers,
            mode,
            lines,
        })
    }

    /// Insert or replace the section with `lines`.
    pub fn upsert(path: impl Into<PathBuf>, markers: Markers, lines: Vec<String>) -> Result<Self> {
        Self::new(path, markers, SectionMode::Upsert, lines)
    }

    /// Remove the section.
    pub fn remove(path: impl Into<PathBuf>, markers: Markers) -> Result<Self> {
        Self::new(path, markers, SectionMode::Remove, Vec::new())
    }

    /// Parse `[--remove] <file> <start-marker> <end-marker> [line]...`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args.split_first() {
            Some((first, rest)) if first.as_ref() == REMOVE_FLAG => Self::parse(true, rest),
            _ => Self::parse(false, args),
        }
    }

    /// Parse `<file> <start-marker> <end-marker> [line]...` with the mode
    /// already decided by the caller.
    pub fn parse<S: AsRef<str>>(remove: bool, args: &[S]) -> Result<Self> {
        let [file, start, end, lines @ ..] = args else {
            return Err(Error::insufficient(format!(
                "expected <file> <start-marker> <end-marker>, got {} argument(s)",
                args.len()
            )));
        };

        let mode = if remove {
            SectionMode::Remove
        } else {
            SectionMode::Upsert
        };
        let markers = Markers::new(start.as_ref(), end.as_ref())?;
        let lines = lines.iter().map(|l| l.as_ref().to_string()).collect();

        Self::new(file.as_ref(), markers, mode, lines)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn mode(&self) -> SectionMode {
        self.mode
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_upsert_with_content() {
        let req = SectionRequest::from_args(&["rc", "# S", "# E", "a", "b"]).unwrap();
        assert_eq!(req.path(), Path::new("rc"));
        assert_eq!(req.markers().start(), "# S");
        assert_eq!(req.markers().end(), "# E");
        assert_eq!(req.mode(), SectionMode::Upsert);
        assert_eq!(req.lines(), ["a", "b"]);
    }

    #[test]
    fn parses_remove_flag() {
        let req = SectionRequest::from_args(&["--remove", "rc", "# S", "# E"]).unwrap();
        assert_eq!(req.mode(), SectionMode::Remove);
        assert!(req.lines().is_empty());
    }

    #[test]
    fn remove_flag_only_counts_in_first_position() {
        let req = SectionRequest::from_args(&["rc", "# S", "# E", "--remove"]).unwrap();
        assert_eq!(req.mode(), SectionMode::Upsert);
        assert_eq!(req.lines(), ["--remove"]);
    }

    #[rstest]
    #[case(&[])]
    #[case(&["rc"])]
    #[case(&["rc", "# S"])]
    #[case(&["--remove", "rc", "# S"])]
    #[case(&["--remove", "rc", "# S", "# E", "content"])]
    #[case(&["", "# S", "# E"])]
    #[case(&["rc", "", "# E"])]
    #[case(&["rc", "# S", ""])]
    fn rejects_insufficient_arguments(#[case] args: &[&str]) {
        let result = SectionRequest::from_args(args);
        assert!(
            matches!(result, Err(Error::InsufficientArguments { .. })),
            "{args:?} should be rejected, got {result:?}"
        );
    }
}
