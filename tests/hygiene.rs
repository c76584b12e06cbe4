//! Hygiene: the host's preference and config reads must not swallow errors.
//!
//! Storage and config are the only I/O the page does, and a failure there is
//! invisible unless it is logged. Browser glue (`dom`, `boot`) casts with
//! `dyn_into(..).ok()` freely and is not scanned.

use std::fs;

const IO_SOURCES: &[&str] = &["src/storage.rs", "src/settings.rs"];

/// (pattern, why it is banned)
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("let _ =", "discards a value without inspecting it"),
    (".ok()", "turns an error into None without logging"),
];

/// Source with any inline `#[cfg(test)] mod tests` block cut off.
fn production(path: &str) -> String {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("read {path}: {e}"));
    content.split("#[cfg(test)]\nmod tests").next().unwrap_or_default().to_owned()
}

#[test]
fn io_paths_log_instead_of_discarding() {
    let mut violations = Vec::new();
    for path in IO_SOURCES {
        let source = production(path);
        for (pattern, why) in BANNED {
            for (n, line) in source.lines().enumerate() {
                if line.contains(pattern) {
                    violations.push(format!("{path}:{} {pattern} ({why})", n + 1));
                }
            }
        }
    }
    assert!(violations.is_empty(), "host hygiene violations:\n{}", violations.join("\n"));
}
