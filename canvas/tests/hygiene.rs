//! Hygiene: source-level rules for the canvas crate.
//!
//! Production sources (everything under `src/` except `_test.rs` files) are
//! scanned for patterns that crash the page or swallow errors, and browser
//! APIs must stay inside the two modules that draw. Budgets only shrink.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// `(pattern, budget, why)` triples.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "stub"),
    ("unimplemented!(", 0, "stub"),
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "silent discard"),
    ("#[allow(dead_code)]", 0, "dead code"),
];

/// Modules allowed to name `web_sys` / `wasm_bindgen`.
const BROWSER_MODULES: &[&str] = &["engine.rs", "render.rs"];

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
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    for name in ["surface.rs", "handlers.rs", "render.rs"] {
        assert!(files.iter().any(|f| f.path.ends_with(name)), "missing {name}");
    }
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits = count_in_source(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!(
                "{pattern} ({why}) budget exceeded: found {count}, max {budget}.\n{}",
                format_hits(&hits)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn browser_apis_stay_in_drawing_modules() {
    let files = source_files();
    let offenders = files
        .iter()
        .filter(|f| !BROWSER_MODULES.iter().any(|m| f.path.ends_with(m)))
        .filter(|f| f.content.contains("web_sys") || f.content.contains("wasm_bindgen"))
        .map(|f| f.path.clone())
        .collect::<Vec<_>>();
    assert!(offenders.is_empty(), "browser APIs outside engine/render: {offenders:?}");
}
