use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

// Keeps the text and the file name together so tokens can borrow from one owner.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let bytes = std::fs::read(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| LoadError::InvalidUtf8 {
            path: path.clone(),
            source,
        })?;
        debug!("loaded {} ({} bytes)", path.display(), text.len());
        Ok(Self { path, text })
    }

    pub fn from_string(text: impl Into<String>, name: impl Into<PathBuf>) -> Self {
        Self {
            path: name.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines without their `\n` terminators, the way the editor holds them.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split_terminator('\n')
    }
}
