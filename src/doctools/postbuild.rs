//! Post-build hook: run the freshly produced binary.
//!
//! The build pipeline registers this after the program target: once the
//! binary lands in the build directory, execute it on the host and surface
//! its exit code.

use std::path::Path;
use std::process::Command;

use log::{info, warn};

use crate::error::PostBuildError;

/// Execute `build_dir/name` and return its exit code.
///
/// A missing binary is a hard error; a non-zero exit from the program is
/// not — it is logged and returned for the caller to judge.
pub fn run_built_program(build_dir: &Path, name: &str) -> Result<i32, PostBuildError> {
    let program = build_dir.join(name);
    if !program.is_file() {
        return Err(PostBuildError::ProgramMissing(program));
    }

    info!("Running {}", program.display());
    let status = Command::new(&program)
        .status()
        .map_err(|e| PostBuildError::Exec {
            program: program.clone(),
            source: e,
        })?;

    // Signal-terminated processes have no code; report -1.
    let code = status.code().unwrap_or(-1);
    if !status.success() {
        warn!("{} exited with status {code}", program.display());
    }
    Ok(code)
}
