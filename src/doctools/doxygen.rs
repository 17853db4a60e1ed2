//! Doxygen XML pre-pass.
//!
//! Runs `doxygen` against the tree's Doxyfile before the main documentation
//! build so every version gets freshly extracted API XML. Every failure mode
//! is soft: the documentation build proceeds without the XML, it does not
//! abort.

use std::fs;
use std::io;
use std::process::Command;

use log::{info, warn};

use super::DocsLayout;

/// What the pre-pass accomplished. Everything but `Completed` has already
/// been logged as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoxygenOutcome {
    /// Doxygen ran and exited successfully.
    Completed,
    /// No Doxyfile at the expected path; nothing to run.
    NoDoxyfile,
    /// The `doxygen` executable is not on PATH.
    ToolMissing,
    /// Doxygen ran but exited non-zero, or could not be set up.
    Failed,
}

/// Generate Doxygen XML for the docs tree.
pub fn run_doxygen(layout: &DocsLayout) -> DoxygenOutcome {
    let doxyfile = layout.doxyfile();
    if !doxyfile.exists() {
        warn!("Doxyfile not found at {}", doxyfile.display());
        return DoxygenOutcome::NoDoxyfile;
    }

    let out_dir = layout.doxygen_out_dir();
    if let Err(e) = fs::create_dir_all(&out_dir) {
        warn!("Cannot create {}: {e}", out_dir.display());
        return DoxygenOutcome::Failed;
    }

    info!("Running doxygen in {}", layout.docs_dir.display());
    match Command::new("doxygen")
        .arg(&doxyfile)
        .current_dir(&layout.docs_dir)
        .output()
    {
        Ok(out) if out.status.success() => {
            info!("Doxygen completed successfully");
            DoxygenOutcome::Completed
        }
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            warn!("Doxygen failed ({}): {}", out.status, stderr.trim());
            DoxygenOutcome::Failed
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("doxygen not found in PATH");
            DoxygenOutcome::ToolMissing
        }
        Err(e) => {
            warn!("doxygen could not be spawned: {e}");
            DoxygenOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_doxyfile_is_a_soft_skip() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DocsLayout::new(dir.path().join("docs"));
        assert_eq!(run_doxygen(&layout), DoxygenOutcome::NoDoxyfile);
    }
}
