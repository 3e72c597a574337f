//! Languages the runner can execute.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A runnable language and how its source file is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunLanguage {
    Go,
    Python,
    Ruby,
}

impl RunLanguage {
    /// Name of the source file written into the scratch directory.
    pub fn file_name(self) -> &'static str {
        match self {
            RunLanguage::Go => "main.go",
            RunLanguage::Python => "main.py",
            RunLanguage::Ruby => "main.rb",
        }
    }

    /// Arguments passed to the interpreter before it runs.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            RunLanguage::Go => &["run", "main.go"],
            RunLanguage::Python => &["main.py"],
            RunLanguage::Ruby => &["main.rb"],
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            RunLanguage::Go => "go",
            RunLanguage::Python => "python",
            RunLanguage::Ruby => "ruby",
        }
    }
}

impl FromStr for RunLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "go" => Ok(RunLanguage::Go),
            "python" => Ok(RunLanguage::Python),
            "ruby" => Ok(RunLanguage::Ruby),
            other => Err(AppError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for RunLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
