//! Where the raw text for a one-shot calculation comes from.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Source of the raw input, picked from the command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource<'a> {
    Text(&'a str),
    File(&'a Path),
    Stdin,
}

impl<'a> InputSource<'a> {
    /// Positional text wins over a file, which wins over stdin.
    pub fn select(text: Option<&'a str>, file: Option<&'a Path>) -> Self {
        match (text, file) {
            (Some(text), _) => InputSource::Text(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Text(text) => Ok((*text).to_string()),
            InputSource::File(path) => {
                info!("Reading input from file: {}", path.display());
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {}", path.display()))
            }
            InputSource::Stdin => {
                info!("Reading input from stdin...");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
        }
    }

    /// `true` when reading would wait on a person typing at a terminal.
    pub fn is_interactive_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin) && io::stdin().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn text_takes_precedence() {
        let path = Path::new("ignored.txt");
        assert_eq!(InputSource::select(Some("1 2"), Some(path)), InputSource::Text("1 2"));
        assert_eq!(InputSource::select(None, Some(path)), InputSource::File(path));
        assert_eq!(InputSource::select(None, None), InputSource::Stdin);
    }

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "4; 5; 6").unwrap();
        let source = InputSource::File(file.path());
        assert_eq!(source.read().unwrap(), "4; 5; 6");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = InputSource::File(Path::new("/no/such/input.txt")).read().unwrap_err();
        assert!(err.to_string().contains("/no/such/input.txt"));
    }
}
