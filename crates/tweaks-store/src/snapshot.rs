//! On-disk snapshot format for persisted tweak values.
//!
//! The backing file is a single TOML document with one `[values.<id>]` table
//! per persisted tweak, keyed by the `collection.group.name` identity string.
//! Each entry carries its own kind tag (see
//! [`TweakValue`]'s adjacent tagging), so reload can never
//! reinterpret one kind as another:
//!
//! ```toml
//! [values."General.Layout.Columns"]
//! kind = "uint"
//! value = "3"
//!
//! [values."General.Colors.Tint"]
//! kind = "color"
//! value = "#FF8000"
//! ```
//!
//! Loading is deliberately tolerant: a missing, unreadable, or corrupt file
//! yields an empty snapshot (every tweak falls back to its default) rather
//! than failing the host application.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tweaks_core::TweakValue;

use crate::error::StoreError;
use crate::paths::ensure_parent_dir;

/// Flat mapping from identity string to persisted value.
///
/// A sorted map keeps the serialized file deterministic, which makes the
/// backing file diff-friendly when checked into fixtures.
pub type Snapshot = BTreeMap<String, TweakValue>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    values: Snapshot,
}

/// Read the snapshot from `path`.
///
/// Missing files are normal (first launch). Unreadable or corrupt files are
/// logged and treated as empty; the store then resolves every tweak to its
/// default.
pub fn load(path: &Path) -> Snapshot {
    if !path.exists() {
        return Snapshot::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store file unreadable, using defaults");
            return Snapshot::new();
        }
    };

    match toml::from_str::<StoreFile>(&content) {
        Ok(file) => file.values,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store file corrupt, using defaults");
            Snapshot::new()
        }
    }
}

/// Serialize the snapshot to `path`, creating parent directories as needed.
pub fn save(path: &Path, values: &Snapshot) -> Result<(), StoreError> {
    ensure_parent_dir(path)?;

    let file = StoreFile {
        values: values.clone(),
    };
    let content = toml::to_string_pretty(&file)?;
    std::fs::write(path, content).map_err(|e| StoreError::write_file(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tweaks_core::Color;

    #[test]
    fn missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let snapshot = load(&tmp.path().join("nope.toml"));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store.toml");
        std::fs::write(&path, "values = 3 this is not toml [").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn save_load_roundtrip_every_kind() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deep/dir/store.toml");

        let mut snapshot = Snapshot::new();
        snapshot.insert("A.B.Bool".into(), TweakValue::Bool(false));
        snapshot.insert("A.B.Int".into(), TweakValue::Int(-42));
        snapshot.insert("A.B.Zero".into(), TweakValue::Int(0));
        snapshot.insert("A.B.Big".into(), TweakValue::Int(i64::MAX));
        snapshot.insert("A.B.UInt".into(), TweakValue::UInt(7));
        snapshot.insert("A.B.Huge".into(), TweakValue::UInt(u64::MAX));
        snapshot.insert("A.B.Float".into(), TweakValue::Float(-2.5));
        snapshot.insert(
            "A.B.Clear".into(),
            TweakValue::Color(Color::rgba(1, 2, 3, 0)),
        );
        snapshot.insert(
            "A.B.Opaque".into(),
            TweakValue::Color(Color::rgba(1, 2, 3, 255)),
        );
        snapshot.insert("A.B.Text".into(), TweakValue::Text("hello".into()));

        save(&path, &snapshot).unwrap();
        assert_eq!(load(&path), snapshot);
    }

    #[test]
    fn save_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store.toml");

        let mut snapshot = Snapshot::new();
        snapshot.insert("Z.Z.Last".into(), TweakValue::Int(1));
        snapshot.insert("A.A.First".into(), TweakValue::Int(2));

        save(&path, &snapshot).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        save(&path, &snapshot).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);

        // BTreeMap ordering puts A.A.First before Z.Z.Last in the file.
        let a = first.find("A.A.First").unwrap();
        let z = first.find("Z.Z.Last").unwrap();
        assert!(a < z);
    }
}
