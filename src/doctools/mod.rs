//! Documentation pipeline helpers.
//!
//! Three small, independent pieces that an external docs build drives:
//! the Doxygen XML pre-pass ([`doxygen`]), the version-selector asset
//! injector run after a multi-version build ([`inject`]), and the
//! post-build hook that executes a freshly produced binary ([`postbuild`]).

pub mod doxygen;
pub mod inject;
pub mod postbuild;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub use doxygen::{DoxygenOutcome, run_doxygen};
pub use inject::{InjectReport, inject_version_selector};
pub use postbuild::run_built_program;

/// Name of the static-asset subdirectory inside each version build.
pub const STATIC_DIR: &str = "_static";

/// On-disk layout of the documentation tree.
///
/// All paths the pipeline touches derive from `docs_dir`; the asset names
/// are configurable so a theme rename does not require a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsLayout {
    /// Root of the documentation tree (holds the Doxyfile and build output).
    pub docs_dir: PathBuf,
    /// Stylesheet injected into every version build.
    pub css_name: String,
    /// Script injected into every version build.
    pub js_name: String,
    /// Layout template that wires the selector into the page chrome.
    pub template_name: String,
}

impl Default for DocsLayout {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            css_name: "version-selector.css".into(),
            js_name: "version-selector.js".into(),
            template_name: "layout.html".into(),
        }
    }
}

impl DocsLayout {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            ..Self::default()
        }
    }

    /// Load a layout from a JSON file, or fall back to the default layout
    /// when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layout = serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(layout)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.docs_dir.join("source")
    }

    /// Output directory of the multi-version HTML build, one subdirectory
    /// per documented version.
    pub fn html_build_dir(&self) -> PathBuf {
        self.docs_dir.join("build").join("html")
    }

    pub fn doxyfile(&self) -> PathBuf {
        self.docs_dir.join("Doxyfile")
    }

    /// Where the Doxygen pre-pass writes its XML.
    pub fn doxygen_out_dir(&self) -> PathBuf {
        self.docs_dir.join("build").join("doxygen")
    }

    pub fn template_file(&self) -> PathBuf {
        self.source_dir().join("_templates").join(&self.template_name)
    }

    pub fn css_file(&self) -> PathBuf {
        self.source_dir().join(STATIC_DIR).join(&self.css_name)
    }

    pub fn js_file(&self) -> PathBuf {
        self.source_dir().join(STATIC_DIR).join(&self.js_name)
    }
}
