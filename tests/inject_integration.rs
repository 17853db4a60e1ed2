//! Integration tests for the version-selector injector against real
//! temporary documentation trees.

use std::fs;
use std::path::Path;

use samplestats::doctools::{DocsLayout, STATIC_DIR, inject_version_selector};
use tempfile::TempDir;

const CSS_BODY: &str = ".version-selector { display: block; }\n";
const JS_BODY: &str = "console.log('version selector');\n";

/// Build a docs source tree with the three selector assets present.
fn docs_fixture() -> (TempDir, DocsLayout) {
    let tmp = tempfile::tempdir().unwrap();
    let layout = DocsLayout::new(tmp.path().join("docs"));

    fs::create_dir_all(layout.source_dir().join("_templates")).unwrap();
    fs::create_dir_all(layout.source_dir().join(STATIC_DIR)).unwrap();
    fs::create_dir_all(layout.html_build_dir()).unwrap();

    fs::write(layout.template_file(), "{% extends \"!layout.html\" %}\n").unwrap();
    fs::write(layout.css_file(), CSS_BODY).unwrap();
    fs::write(layout.js_file(), JS_BODY).unwrap();

    (tmp, layout)
}

/// Add one built version under the HTML build dir.
fn add_version(layout: &DocsLayout, name: &str, with_static: bool) {
    let dir = layout.html_build_dir().join(name);
    fs::create_dir_all(&dir).unwrap();
    if with_static {
        fs::create_dir_all(dir.join(STATIC_DIR)).unwrap();
    }
}

fn injected_css(layout: &DocsLayout, version: &str) -> std::path::PathBuf {
    layout
        .html_build_dir()
        .join(version)
        .join(STATIC_DIR)
        .join(&layout.css_name)
}

#[test]
fn injects_both_assets_into_every_version() {
    let (_tmp, layout) = docs_fixture();
    for v in ["main", "v1.0.0", "v2.0.0"] {
        add_version(&layout, v, true);
    }

    let report = inject_version_selector(&layout).unwrap();
    assert_eq!(report.found, 3);
    assert_eq!(report.eligible, 3);
    assert_eq!(report.injected, 3);
    assert!(report.all_injected());
    assert!(report.skipped.is_empty());
    assert!(report.failed.is_empty());

    for v in ["main", "v1.0.0", "v2.0.0"] {
        let static_dir = layout.html_build_dir().join(v).join(STATIC_DIR);
        assert_eq!(
            fs::read_to_string(static_dir.join(&layout.css_name)).unwrap(),
            CSS_BODY
        );
        assert_eq!(
            fs::read_to_string(static_dir.join(&layout.js_name)).unwrap(),
            JS_BODY
        );
    }
}

#[test]
fn version_without_static_dir_is_skipped_and_not_counted() {
    let (_tmp, layout) = docs_fixture();
    add_version(&layout, "main", true);
    add_version(&layout, "v0.9.0", false);
    add_version(&layout, "v1.0.0", true);

    let report = inject_version_selector(&layout).unwrap();
    assert_eq!(report.found, 3);
    // The skip is excluded from both numerator and denominator.
    assert_eq!(report.eligible, 2);
    assert_eq!(report.injected, 2);
    assert_eq!(report.skipped, vec!["v0.9.0".to_string()]);

    let skipped_dir = layout.html_build_dir().join("v0.9.0");
    assert!(!skipped_dir.join(STATIC_DIR).exists());
}

#[test]
fn internal_directories_are_not_versions() {
    let (_tmp, layout) = docs_fixture();
    add_version(&layout, "main", true);
    add_version(&layout, "_static", true);
    add_version(&layout, "_sources", false);
    // Stray files do not count either.
    fs::write(layout.html_build_dir().join("index.html"), "<html/>").unwrap();

    let report = inject_version_selector(&layout).unwrap();
    assert_eq!(report.found, 1);
    assert_eq!(report.injected, 1);
}

#[test]
fn missing_source_asset_aborts_with_zero_copies() {
    let (_tmp, layout) = docs_fixture();
    add_version(&layout, "main", true);
    add_version(&layout, "v1.0.0", true);
    fs::remove_file(layout.css_file()).unwrap();

    let err = inject_version_selector(&layout).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains(&layout.css_name), "error names the missing file: {msg}");

    // No partial work: neither version received anything.
    for v in ["main", "v1.0.0"] {
        assert!(!injected_css(&layout, v).exists());
        assert!(
            !layout
                .html_build_dir()
                .join(v)
                .join(STATIC_DIR)
                .join(&layout.js_name)
                .exists()
        );
    }
}

#[test]
fn all_missing_sources_are_reported_together() {
    let (_tmp, layout) = docs_fixture();
    fs::remove_file(layout.css_file()).unwrap();
    fs::remove_file(layout.js_file()).unwrap();

    let msg = inject_version_selector(&layout).unwrap_err().to_string();
    assert!(msg.contains(&layout.css_name));
    assert!(msg.contains(&layout.js_name));
}

#[test]
fn copy_failure_in_one_version_does_not_stop_the_rest() {
    let (_tmp, layout) = docs_fixture();
    for v in ["alpha", "broken", "zulu"] {
        add_version(&layout, v, true);
    }
    // Make the copy destination uncopyable: a directory already occupies
    // the target file name. (Permission bits are unreliable under root.)
    let clash = layout
        .html_build_dir()
        .join("broken")
        .join(STATIC_DIR)
        .join(&layout.css_name);
    fs::create_dir_all(&clash).unwrap();

    let report = inject_version_selector(&layout).unwrap();
    assert_eq!(report.eligible, 3);
    assert_eq!(report.injected, 2);
    assert_eq!(report.failed, vec!["broken".to_string()]);
    assert!(!report.all_injected());

    // The healthy versions still got both assets.
    for v in ["alpha", "zulu"] {
        assert!(injected_css(&layout, v).exists());
    }
}

#[test]
fn rerunning_is_idempotent() {
    let (_tmp, layout) = docs_fixture();
    add_version(&layout, "main", true);
    add_version(&layout, "v1.0.0", true);

    let first = inject_version_selector(&layout).unwrap();
    let css_after_first = fs::read_to_string(injected_css(&layout, "main")).unwrap();

    let second = inject_version_selector(&layout).unwrap();
    let css_after_second = fs::read_to_string(injected_css(&layout, "main")).unwrap();

    assert_eq!(first.injected, second.injected);
    assert_eq!(first.eligible, second.eligible);
    assert_eq!(css_after_first, css_after_second);
    assert_eq!(css_after_second, CSS_BODY);
}

#[test]
fn unreadable_build_dir_is_a_hard_error() {
    let (_tmp, layout) = docs_fixture();
    fs::remove_dir_all(layout.html_build_dir()).unwrap();

    let err = inject_version_selector(&layout).unwrap_err();
    assert!(err.to_string().contains("cannot list version builds"));
}

#[test]
fn empty_build_dir_reports_zero_of_zero() {
    let (_tmp, layout) = docs_fixture();

    let report = inject_version_selector(&layout).unwrap();
    assert_eq!(report.found, 0);
    assert_eq!(report.eligible, 0);
    assert!(report.all_injected());
}

// Overwrite semantics: stale copies of the assets in a version build are
// replaced, not preserved.
#[test]
fn stale_assets_are_overwritten() {
    let (_tmp, layout) = docs_fixture();
    add_version(&layout, "main", true);
    let target = injected_css(&layout, "main");
    fs::write(&target, "/* stale */").unwrap();

    let report = inject_version_selector(&layout).unwrap();
    assert_eq!(report.injected, 1);
    assert_eq!(fs::read_to_string(&target).unwrap(), CSS_BODY);
}
