//! Build script: validates the embedded vocabulary tables at compile time.

use std::collections::HashSet;
use std::path::PathBuf;

const VOCABULARIES: &[&str] = &["yahoo.json", "standard.json"];

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");

    #[derive(serde::Deserialize)]
    struct RuleEntry {
        shortcut: String,
        token: String,
    }

    for file in VOCABULARIES {
        let path: PathBuf = [&manifest_dir, "config", file].iter().collect();
        println!("cargo:rerun-if-changed={}", path.display());

        let json = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!(
                "Failed to read {}: {}. Vocabulary tables must exist and be valid.",
                path.display(),
                e
            )
        });
        let entries: Vec<RuleEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
            panic!("{} is invalid JSON: {}. Fix the file and rebuild.", file, e)
        });

        let mut seen = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            if entry.shortcut.is_empty() || entry.token.is_empty() {
                panic!("{}: rule at index {} has an empty shortcut or token", file, i);
            }
            if !seen.insert(entry.shortcut.as_str()) {
                panic!("{}: duplicate shortcut '{}'", file, entry.shortcut);
            }
        }
    }
}
