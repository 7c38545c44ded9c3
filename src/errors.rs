use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("could not resolve the home directory; use --local to skip global configs")]
    HomeDirUnavailable,

    #[error("failed to glob pattern {pattern}: {source}")]
    GlobFailure {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// A config directory that exists but cannot be listed. Never fatal.
#[derive(Debug, thiserror::Error)]
#[error("MCP directory {} exists but is not accessible: {source}", path.display())]
pub struct DirectoryInaccessible {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{name} executable not found on PATH")]
    ExecutableNotFound { name: &'static str },

    #[error("failed to exec {}: {source}", program.display())]
    ExecFailure {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("terminal UI failed: {message}")]
pub struct TuiError {
    pub message: String,
}

impl TuiError {
    pub fn new(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl DiscoveryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DiscoveryError::HomeDirUnavailable => "HOME_DIR_UNAVAILABLE",
            DiscoveryError::GlobFailure { .. } => "GLOB_FAILURE",
        }
    }
}

impl LaunchError {
    pub fn error_code(&self) -> &'static str {
        match self {
            LaunchError::ExecutableNotFound { .. } => "EXECUTABLE_NOT_FOUND",
            LaunchError::ExecFailure { .. } => "EXEC_FAILURE",
        }
    }
}
