//! Hygiene: enforces coding standards at test time
//!
//! The orb runs inside a `requestAnimationFrame` loop, so a panic kills the
//! animation for the rest of the page's life and a swallowed `Result` hides a
//! broken canvas. These tests scan `orb/src/` for both. Each pattern has a
//! budget (ideally zero) that never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `orb/src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Assert that `pattern` appears on at most `max` lines across the crate.
fn assert_budget(pattern: &str, max: usize, hint: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the orb crate root");

    let hits = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| format!("  {}: {count}", file.path))
        })
        .collect::<Vec<_>>();
    let count = files
        .iter()
        .map(|file| file.content.lines().filter(|line| line.contains(pattern)).count())
        .sum::<usize>();

    assert!(
        count <= max,
        "`{pattern}` budget exceeded: found {count}, max {max}. {hint}\n{}",
        hits.join("\n")
    );
}

// Panics: these stop the frame loop.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0, "Propagate with `?` or fall back explicitly.");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0, "Propagate with `?` or fall back explicitly.");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0, "Return `Err(JsValue)` to the host.");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0, "Model the case in the type instead.");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0, "Finish the stub before merging.");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0, "Finish the stub before merging.");
}

// Silent loss: discards canvas errors without inspecting.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0, "Handle or propagate the result.");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0, "Match on the error or propagate it.");
}

// Style / structure.

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0, "Delete the unused item.");
}

#[test]
fn println_budget() {
    assert_budget("println!(", 0, "Return errors to the host instead of printing.");
}
