// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Structural checks on a front-end build output directory.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use typed_builder::TypedBuilder;

pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_ENTRY_FILE: &str = "index.html";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Expected layout of a build output directory.
///
/// Checks run in order and stop at the first failure. Nothing under `dist_dir` is created or
/// modified.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct BuildVerifier {
    #[builder(default = PathBuf::from(DEFAULT_DIST_DIR))]
    dist_dir: PathBuf,
    #[builder(default = DEFAULT_ENTRY_FILE.to_string())]
    entry_file: String,
    #[builder(default = DEFAULT_ASSETS_DIR.to_string())]
    assets_dir: String,
}

impl BuildVerifier {
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Runs the checks and, if they all pass, lists the top-level entries sorted by name.
    pub fn verify(&self) -> Result<Vec<BuildEntry>, BuildOutputError> {
        if !self.dist_dir.is_dir() {
            return Err(BuildOutputError::MissingDir(self.dist_dir.clone()));
        }
        let entry = self.dist_dir.join(&self.entry_file);
        if !entry.is_file() {
            return Err(BuildOutputError::MissingEntry(entry));
        }
        let assets = self.dist_dir.join(&self.assets_dir);
        if !assets.is_dir() {
            return Err(BuildOutputError::MissingAssets(assets));
        }
        self.entries()
    }

    fn entries(&self) -> Result<Vec<BuildEntry>, BuildOutputError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dist_dir)? {
            let entry = entry?;
            let kind = if entry.path().is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(BuildEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl fmt::Display for BuildEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Dir => write!(f, "[dir]  {}", self.name),
            EntryKind::File => write!(f, "[file] {}", self.name),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildOutputError {
    #[error("build output directory not found: {}", .0.display())]
    MissingDir(PathBuf),
    #[error("entry file not found: {}", .0.display())]
    MissingEntry(PathBuf),
    #[error("assets directory not found: {}", .0.display())]
    MissingAssets(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn verifier(root: &Path) -> BuildVerifier {
        BuildVerifier::builder().dist_dir(root.join("dist")).build()
    }

    fn complete_build() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist");
        fs::create_dir_all(dist.join("assets")).unwrap();
        fs::write(dist.join("index.html"), "<!doctype html>").unwrap();
        fs::write(dist.join("favicon.ico"), [0u8; 4]).unwrap();
        fs::write(dist.join("assets/index-3f2a.js"), "").unwrap();
        dir
    }

    #[test]
    fn lists_complete_build() {
        let dir = complete_build();
        let entries = verifier(dir.path()).verify().unwrap();
        assert_eq!(
            entries,
            vec![
                BuildEntry {
                    name: "assets".to_string(),
                    kind: EntryKind::Dir
                },
                BuildEntry {
                    name: "favicon.ico".to_string(),
                    kind: EntryKind::File
                },
                BuildEntry {
                    name: "index.html".to_string(),
                    kind: EntryKind::File
                },
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_dir_is_tagged_dir() {
        let dir = complete_build();
        let target = dir.path().join("shared");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("dist/shared")).unwrap();

        let entries = verifier(dir.path()).verify().unwrap();
        let shared = entries.iter().find(|entry| entry.name == "shared").unwrap();
        assert_eq!(shared.kind, EntryKind::Dir);
    }

    #[test]
    fn missing_dist_stops_first() {
        let dir = tempfile::tempdir().unwrap();
        let err = verifier(dir.path()).verify().unwrap_err();
        assert!(matches!(err, BuildOutputError::MissingDir(_)));
    }

    #[test]
    fn missing_entry_is_reported_before_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("dist")).unwrap();
        let err = verifier(dir.path()).verify().unwrap_err();
        assert!(matches!(err, BuildOutputError::MissingEntry(path) if path.ends_with("index.html")));
    }

    #[test]
    fn missing_assets() {
        let dir = complete_build();
        fs::remove_dir_all(dir.path().join("dist/assets")).unwrap();
        let err = verifier(dir.path()).verify().unwrap_err();
        assert!(matches!(err, BuildOutputError::MissingAssets(path) if path.ends_with("assets")));
    }

    #[test]
    fn assets_must_be_a_directory() {
        let dir = complete_build();
        fs::remove_dir_all(dir.path().join("dist/assets")).unwrap();
        fs::write(dir.path().join("dist/assets"), "").unwrap();
        let err = verifier(dir.path()).verify().unwrap_err();
        assert!(matches!(err, BuildOutputError::MissingAssets(_)));
    }

    #[test]
    fn custom_layout() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("build");
        fs::create_dir_all(out.join("static")).unwrap();
        fs::write(out.join("main.html"), "").unwrap();
        let entries = BuildVerifier::builder()
            .dist_dir(out)
            .entry_file("main.html")
            .assets_dir("static")
            .build()
            .verify()
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn entries_display_kind() {
        let dir = BuildEntry {
            name: "assets".to_string(),
            kind: EntryKind::Dir,
        };
        let file = BuildEntry {
            name: "index.html".to_string(),
            kind: EntryKind::File,
        };
        assert_eq!(dir.to_string(), "[dir]  assets");
        assert_eq!(file.to_string(), "[file] index.html");
    }
}
