//! Version-selector asset injector.
//!
//! A multi-version documentation build produces one subdirectory per
//! documented version, but only the current version's sources carry the
//! version-selector assets. This pass copies the selector stylesheet and
//! script into every already-built version's `_static` directory so the
//! selector works in historical builds that predate it.
//!
//! Failure model: missing source assets abort the whole run before any
//! copy; a copy failure inside one version is logged and tallied, and the
//! remaining versions are still processed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use super::{DocsLayout, STATIC_DIR};
use crate::error::InjectError;

/// Outcome tallies of one injector run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InjectReport {
    /// Version directories discovered under the build output.
    pub found: usize,
    /// Versions that have a `_static` directory (the copy targets).
    pub eligible: usize,
    /// Versions whose assets were copied successfully.
    pub injected: usize,
    /// Versions skipped for lack of a `_static` directory.
    pub skipped: Vec<String>,
    /// Versions whose copy failed (isolated, run continues).
    pub failed: Vec<String>,
}

impl InjectReport {
    /// True when every eligible version received its assets.
    pub fn all_injected(&self) -> bool {
        self.injected == self.eligible
    }
}

/// Copy the selector assets into every built version.
///
/// Returns `Err` only when the precondition check fails (source assets
/// missing, build directory unreadable); per-version copy failures are
/// reported in the [`InjectReport`] instead.
pub fn inject_version_selector(layout: &DocsLayout) -> Result<InjectReport, InjectError> {
    // Precondition: all three selector sources must exist before any work.
    let sources = [layout.template_file(), layout.css_file(), layout.js_file()];
    let missing: Vec<PathBuf> = sources.iter().filter(|p| !p.exists()).cloned().collect();
    if !missing.is_empty() {
        for path in &missing {
            warn!("Missing version selector source: {}", path.display());
        }
        return Err(InjectError::MissingAssets(missing));
    }

    let build_dir = layout.html_build_dir();
    let mut versions = version_dirs(&build_dir).map_err(|e| InjectError::ListVersions {
        dir: build_dir.clone(),
        source: e,
    })?;
    versions.sort();
    info!("Found {} version directories", versions.len());

    let mut report = InjectReport {
        found: versions.len(),
        ..InjectReport::default()
    };

    for dir in &versions {
        let version = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let static_dir = dir.join(STATIC_DIR);
        if !static_dir.is_dir() {
            info!("Skipping {version} (no {STATIC_DIR} directory)");
            report.skipped.push(version);
            continue;
        }

        report.eligible += 1;
        match copy_assets(layout, &static_dir) {
            Ok(()) => {
                info!("Injected version selector into {version}");
                report.injected += 1;
            }
            Err(e) => {
                warn!("Failed to inject into {version}: {e}");
                report.failed.push(version);
            }
        }
    }

    info!(
        "Injected version selector into {}/{} versions",
        report.injected, report.eligible
    );
    Ok(report)
}

/// Enumerate version subdirectories, excluding internal (`_`-prefixed)
/// build output such as `_static` and `_sources`.
fn version_dirs(build_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(build_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        if matches!(name, Some(n) if is_version_name(&n)) {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn is_version_name(name: &str) -> bool {
    !name.starts_with('_')
}

fn copy_assets(layout: &DocsLayout, static_dir: &Path) -> io::Result<()> {
    fs::copy(layout.css_file(), static_dir.join(&layout.css_name))?;
    fs::copy(layout.js_file(), static_dir.join(&layout.js_name))?;
    Ok(())
}
