use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CompatError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileWriter adapter for writing rendered output to a file.
pub struct FileWriter {
    output_path: PathBuf,
}

impl FileWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(CompatError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;

        fs::write(&self.output_path, content).map_err(|e| CompatError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

/// StdoutPresenter adapter for writing rendered output to stdout.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_writes_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let writer = FileWriter::new(path.clone());

        writer.present("verdict text\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "verdict text\n");
    }

    #[test]
    fn test_file_writer_rejects_missing_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let writer = FileWriter::new(path);

        let result = writer.present("content");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Parent directory does not exist"));
    }

    #[test]
    fn test_stdout_presenter_does_not_fail() {
        StdoutPresenter::new().present("line\n").unwrap();
    }
}
