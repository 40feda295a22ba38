//! Sheet body input.
//!
//! The body comes from a file, from piped stdin (`-`), from repeated
//! `--message` arguments, or from a combination: file content first, then
//! each message as its own paragraph.

use crate::model::error::InputError;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Where the body text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    /// Read a file.
    File(PathBuf),
    /// Read piped stdin to EOF.
    Stdin,
}

impl BodySource {
    /// Interpret a CLI path argument; `-` means stdin.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_PATH {
            BodySource::Stdin
        } else {
            BodySource::File(path.to_path_buf())
        }
    }

    /// Read the whole source.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist and
    /// `InputError::Io` for any other read failure.
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            BodySource::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound { path: path.clone() });
                }
                let file = std::fs::File::open(path).map_err(|source| InputError::Io {
                    source_name: path.display().to_string(),
                    source,
                })?;
                read_to_string(file, &path.display().to_string())
            }
            BodySource::Stdin => read_to_string(std::io::stdin().lock(), "stdin"),
        }
    }
}

/// Read `reader` to EOF, tagging failures with `source_name`.
pub fn read_to_string<R: Read>(mut reader: R, source_name: &str) -> Result<String, InputError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|source| InputError::Io {
            source_name: source_name.to_string(),
            source,
        })?;
    Ok(contents)
}

/// Assemble the body from an optional source and inline messages.
///
/// Trailing newlines of the source are dropped so they do not measure as
/// blank body rows.
pub fn assemble_body(source_text: Option<&str>, messages: &[String]) -> String {
    let mut paragraphs: Vec<&str> = Vec::new();

    if let Some(text) = source_text {
        let text = text.trim_end_matches(['\n', '\r']);
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }
    paragraphs.extend(messages.iter().map(String::as_str));

    paragraphs.join("\n\n")
}

/// Read the sheet body.
///
/// # Errors
///
/// Propagates read failures from [`BodySource::read`].
pub fn read_body(path: Option<&Path>, messages: &[String]) -> Result<String, InputError> {
    let source_text = path.map(|p| BodySource::from_arg(p).read()).transpose()?;
    Ok(assemble_body(source_text.as_deref(), messages))
}
