//! Unified error types for the crate.
//!
//! A single `Error` enum that every subsystem converts into, keeping error
//! handling at the bin entry points uniform. Unlike the sample-buffer side
//! (which has no failure modes), the docs tooling touches the filesystem and
//! spawns processes, so variants carry paths and the underlying `io::Error`.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Top-level crate error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug)]
pub enum Error {
    /// The version-selector injector could not run.
    Inject(InjectError),
    /// The post-build program hook failed.
    PostBuild(PostBuildError),
    /// Docs layout configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inject(e) => write!(f, "inject: {e}"),
            Self::PostBuild(e) => write!(f, "post-build: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Inject(e) => e.source(),
            Self::PostBuild(e) => e.source(),
            Self::Config(e) => e.source(),
        }
    }
}

// ---------------------------------------------------------------------------
// Injector errors
// ---------------------------------------------------------------------------

/// Hard failures of the injector run as a whole. Per-version copy failures
/// are not errors — they are isolated and tallied in the report.
#[derive(Debug)]
pub enum InjectError {
    /// One or more selector source assets are absent; nothing was copied.
    MissingAssets(Vec<PathBuf>),
    /// The versioned build directory could not be enumerated.
    ListVersions { dir: PathBuf, source: io::Error },
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAssets(paths) => {
                write!(f, "version selector source files not found:")?;
                for p in paths {
                    write!(f, " {}", p.display())?;
                }
                Ok(())
            }
            Self::ListVersions { dir, source } => {
                write!(f, "cannot list version builds in {}: {source}", dir.display())
            }
        }
    }
}

impl std::error::Error for InjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingAssets(_) => None,
            Self::ListVersions { source, .. } => Some(source),
        }
    }
}

impl From<InjectError> for Error {
    fn from(e: InjectError) -> Self {
        Self::Inject(e)
    }
}

// ---------------------------------------------------------------------------
// Post-build hook errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum PostBuildError {
    /// The produced binary does not exist at the expected path.
    ProgramMissing(PathBuf),
    /// The binary exists but could not be spawned.
    Exec { program: PathBuf, source: io::Error },
}

impl fmt::Display for PostBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgramMissing(p) => write!(f, "built program not found: {}", p.display()),
            Self::Exec { program, source } => {
                write!(f, "failed to run {}: {source}", program.display())
            }
        }
    }
}

impl std::error::Error for PostBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProgramMissing(_) => None,
            Self::Exec { source, .. } => Some(source),
        }
    }
}

impl From<PostBuildError> for Error {
    fn from(e: PostBuildError) -> Self {
        Self::PostBuild(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "cannot parse {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
