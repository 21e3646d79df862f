//! Host path normalization and comparison helpers.

use std::path::Path;

/// Normalizes a host filesystem path for comparison.
///
/// Trims whitespace, converts backslashes to `/`, drops empty and `.` segments, and resolves
/// `..` against preceding segments. A Windows drive prefix (`C:`) is never popped. Relative
/// paths keep unresolvable leading `..` segments.
pub fn normalize_host_path(path: &str) -> String {
    let unified = path.trim().replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." && !is_drive_prefix(&segments, last) => {
                    segments.pop();
                }
                Some(_) => {
                    if !absolute && !segments.first().is_some_and(|first| first.ends_with(':')) {
                        segments.push("..");
                    }
                }
                None => {
                    if !absolute {
                        segments.push("..");
                    }
                }
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

fn is_drive_prefix(segments: &[&str], last: &str) -> bool {
    segments.len() == 1 && last.ends_with(':')
}

/// Compares two host paths after normalization, case-insensitively on Windows.
pub fn paths_equal(left: &Path, right: &Path) -> bool {
    paths_equal_with(left, right, cfg!(windows))
}

/// Compares two host paths after normalization with explicit case sensitivity.
pub fn paths_equal_with(left: &Path, right: &Path, case_insensitive: bool) -> bool {
    let left = normalize_host_path(&left.to_string_lossy());
    let right = normalize_host_path(&right.to_string_lossy());
    if case_insensitive {
        left.to_lowercase() == right.to_lowercase()
    } else {
        left == right
    }
}
