// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Name-based artifact lookup over a Hardhat `artifacts/` tree.
//!
//! Hardhat writes one `<Name>.json` per contract under `artifacts/<source path>/`, next to a
//! `<Name>.dbg.json` pointing into `artifacts/build-info/`. A contract can be named either bare
//! (`DocumentRegistry`) or fully qualified (`contracts/DocumentRegistry.sol:DocumentRegistry`).

use std::path::{Path, PathBuf};

use glob::glob;

use super::artifact::{ArtifactError, ContractArtifact};

pub const DEFAULT_CONTRACT_NAME: &str = "DocumentRegistry";

#[derive(Debug, Clone)]
pub struct ArtifactRegistry {
    root: PathBuf,
}

impl ArtifactRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds the artifact file for a contract name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        if let Some((source, contract)) = name.rsplit_once(':') {
            let path = self.root.join(source).join(format!("{contract}.json"));
            return if path.is_file() {
                Ok(path)
            } else {
                Err(ArtifactError::NotFound(name.to_string()))
            };
        }

        let pattern = self.root.join("**").join(format!("{name}.json"));
        let mut candidates: Vec<PathBuf> = glob(&pattern.to_string_lossy())?
            .filter_map(Result::ok)
            .filter(|path| !self.is_build_info(path))
            .collect();
        candidates.sort();

        match candidates.len() {
            0 => Err(ArtifactError::NotFound(name.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_string(),
                candidates: candidates
                    .iter()
                    .map(|path| self.qualified_name(path))
                    .collect(),
            }),
        }
    }

    pub fn load(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        let path = self.resolve(name)?;
        ContractArtifact::load(path)
    }

    fn is_build_info(&self, path: &Path) -> bool {
        path.strip_prefix(&self.root)
            .map(|rel| rel.starts_with("build-info"))
            .unwrap_or(false)
    }

    /// `contracts/Foo.sol:Foo` for `<root>/contracts/Foo.sol/Foo.json`.
    fn qualified_name(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let contract = rel
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = rel
            .parent()
            .map(|parent| parent.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();
        format!("{source}:{contract}")
    }
}
