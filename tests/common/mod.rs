#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use integral_switch::check::LineDiff;

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("INTEGRAL_SWITCH_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    if let Some(report) = snapshot_mismatch(name, actual) {
        panic!("{}", report);
    }
}

/// Diff report when `actual` differs from the stored snapshot `name`.
pub fn snapshot_mismatch(name: &str, actual: &str) -> Option<String> {
    let path = snapshot_root().join(name);
    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    let expected = normalize(&expected);
    let actual = normalize(actual);
    if expected == actual {
        return None;
    }
    let diff = LineDiff::new(&expected, &actual);
    Some(format!(
        "{} line(s) of {} changed (- snapshot, + rendered). \
         Set INTEGRAL_SWITCH_UPDATE_SNAPSHOTS=1 to regenerate.\n{}",
        diff.changed_lines(),
        name,
        diff
    ))
}

/// Count non-overlapping occurrences of `needle`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}
