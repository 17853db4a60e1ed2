//! Inject the version selector into all built documentation versions.
//!
//! Run after a multi-version documentation build. Copies the selector
//! stylesheet and script into every version's static-asset directory so the
//! selector works in historical builds that predate it. Exits non-zero only
//! when the precondition check fails (source assets missing or build
//! directory unreadable); per-version copy failures are logged and the run
//! continues.

use std::path::Path;
use std::process::ExitCode;

use log::{error, info};

use samplestats::doctools::{DocsLayout, inject_version_selector};

const LAYOUT_FILE: &str = "docs/docs-layout.json";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let layout = match DocsLayout::load_or_default(Path::new(LAYOUT_FILE)) {
        Ok(layout) => layout,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match inject_version_selector(&layout) {
        Ok(report) => {
            if let Ok(json) = serde_json::to_string(&report) {
                log::debug!("inject report: {json}");
            }
            info!(
                "Successfully injected version selector into {}/{} versions",
                report.injected, report.eligible
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
