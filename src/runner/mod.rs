//! Runner Module
//!
//! Executes submitted code with a local interpreter. There is no sandbox and
//! no resource limit: the program runs with the server's privileges.

mod language;

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{AppError, Result};

pub use language::RunLanguage;

// == Code Runner ==
/// Interpreter commands per language.
#[derive(Debug, Clone)]
pub struct CodeRunner {
    go_bin: String,
    python_bin: String,
    ruby_bin: String,
}

impl CodeRunner {
    pub fn new(
        go_bin: impl Into<String>,
        python_bin: impl Into<String>,
        ruby_bin: impl Into<String>,
    ) -> Self {
        Self {
            go_bin: go_bin.into(),
            python_bin: python_bin.into(),
            ruby_bin: ruby_bin.into(),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(&config.go_bin, &config.python_bin, &config.ruby_bin)
    }

    fn program(&self, language: RunLanguage) -> &str {
        match language {
            RunLanguage::Go => &self.go_bin,
            RunLanguage::Python => &self.python_bin,
            RunLanguage::Ruby => &self.ruby_bin,
        }
    }

    // == Run ==
    /// Writes `code` into a fresh scratch directory and runs it.
    ///
    /// Returns stdout followed by stderr whatever the exit status. Errors only
    /// when the scratch file cannot be written or the interpreter cannot start.
    /// The scratch directory is removed when this returns.
    pub async fn run(&self, language: RunLanguage, code: &str) -> Result<String> {
        let dir = tempfile::Builder::new()
            .prefix("playground")
            .tempdir()
            .map_err(|e| AppError::Execution(format!("Failed to create temp directory: {}", e)))?;

        tokio::fs::write(dir.path().join(language.file_name()), code)
            .await
            .map_err(|e| AppError::Execution(format!("Failed to write code file: {}", e)))?;

        let program = self.program(language);
        debug!(%language, program, dir = %dir.path().display(), "starting interpreter");

        let output = Command::new(program)
            .args(language.args())
            .current_dir(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| AppError::Execution(format!("Failed to start {}: {}", program, e)))?;

        info!(%language, status = %output.status, "program finished");

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}

impl Default for CodeRunner {
    fn default() -> Self {
        Self::new("go", "python3", "ruby")
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    /// Runs every language through `sh`, which executes the file as a script.
    fn shell_runner() -> CodeRunner {
        CodeRunner::new("sh", "sh", "sh")
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = shell_runner()
            .run(RunLanguage::Python, "echo hello")
            .await
            .unwrap();
        assert_eq!(output, "hello\n");
    }

    #[tokio::test]
    async fn test_run_appends_stderr_after_stdout() {
        let output = shell_runner()
            .run(RunLanguage::Ruby, "echo out; echo err 1>&2")
            .await
            .unwrap();
        assert_eq!(output, "out\nerr\n");
    }

    #[tokio::test]
    async fn test_run_nonzero_exit_is_not_an_error() {
        let output = shell_runner()
            .run(RunLanguage::Python, "echo failing; exit 3")
            .await
            .unwrap();
        assert_eq!(output, "failing\n");
    }

    #[tokio::test]
    async fn test_run_uses_scratch_directory() {
        let output = shell_runner()
            .run(RunLanguage::Python, "ls")
            .await
            .unwrap();
        assert_eq!(output.trim(), "main.py");
    }

    #[tokio::test]
    async fn test_run_missing_interpreter() {
        let runner = CodeRunner::new("go", "definitely-not-an-interpreter-42", "ruby");
        let err = runner.run(RunLanguage::Python, "print(1)").await.unwrap_err();
        assert!(matches!(err, AppError::Execution(_)));
    }
}
