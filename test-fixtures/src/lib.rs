//! Test fixture loader for Timbre golden datasets, plus fake collaborators
//! shared by integration tests across crates.
//!
//! Provides typed deserialization of fixture JSON files and in-memory
//! classifier, tagger and relational-model doubles.

mod classifier;
mod relational;
mod tagger;

pub use classifier::{FailingClassifier, KeywordClassifier};
pub use relational::{FailingRelational, FakeRelational, RecordedUpdate};
pub use tagger::{FailingTagger, ScriptedTagger};

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// The `test-fixtures` directory, found by walking up from the calling
/// crate's manifest dir.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&manifest_dir)
        .ancestors()
        .map(|dir| dir.join("test-fixtures"))
        .find(|dir| dir.join("golden").is_dir())
        .unwrap_or_else(|| {
            panic!("no test-fixtures/golden above CARGO_MANIFEST_DIR={manifest_dir}")
        })
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file can't be read.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file can't be read or doesn't match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    serde_json::from_str(&load_fixture_text(relative_path))
        .unwrap_or_else(|e| panic!("cannot parse fixture {relative_path}: {e}"))
}

/// Untyped variant of [`load_fixture`], for override payloads.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).is_file()
}

/// JSON files directly under `subdir`, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixtures_root().join(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| Some(entry.ok()?.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use timbre_core::TasteConfig;

    #[test]
    fn golden_files_exist() {
        let files = [
            "golden/taste/base_taste.json",
            "golden/taste/persona_flat.json",
            "golden/taste/persona_named.json",
            "golden/snapshot/exported_snapshot.json",
            "golden/llm/content_variants.json",
            "golden/llm/pos_responses.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_listed_fixture_is_json() {
        let mut total = 0;
        for dir in ["golden/taste", "golden/snapshot", "golden/llm"] {
            for file in list_fixtures(dir) {
                let relative = file.strip_prefix(fixtures_root()).unwrap();
                let _ = load_fixture_value(relative.to_str().unwrap());
                total += 1;
            }
        }
        assert_eq!(total, 6);
        assert!(list_fixtures("golden/missing").is_empty());
    }

    #[test]
    fn base_taste_loads_typed() {
        let taste: TasteConfig = load_fixture("golden/taste/base_taste.json");
        assert_eq!(taste.templates.len(), 2);
        assert!(!taste.lexicon.nouns.is_empty());
    }
}
