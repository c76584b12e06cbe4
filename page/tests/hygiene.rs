//! Hygiene: source-level budgets for the page crate.
//!
//! Scans `page/src` (test files excluded) for constructs that either crash the
//! page or silently drop an error. Every budget is zero; controllers log and
//! continue instead.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "aborts the page"),
    ("unreachable!(", 0, "aborts the page"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "turns an error into None without logging"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        let is_test = path_str.ends_with("_test.rs") || path_str.ends_with("testing.rs");
        if is_test || path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Count pattern hits outside inline `#[cfg(test)] mod tests` blocks.
fn hits(file: &SourceFile, pattern: &str) -> usize {
    let production = file.content.split("#[cfg(test)]\nmod tests").next().unwrap_or_default();
    production.lines().filter(|line| line.contains(pattern)).count()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the page crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut violations = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let per_file = files
            .iter()
            .map(|file| (file.path.as_str(), hits(file, pattern)))
            .filter(|(_, count)| *count > 0)
            .collect::<Vec<_>>();
        let total = per_file.iter().map(|(_, count)| count).sum::<usize>();
        if total > *budget {
            let detail = per_file
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!("{pattern} ({why}): found {total}, max {budget}\n{detail}"));
        }
    }
    assert!(violations.is_empty(), "hygiene budgets exceeded:\n{}", violations.join("\n"));
}
