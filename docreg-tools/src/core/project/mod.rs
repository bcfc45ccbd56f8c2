// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Managed projects: a directory tree rooted at a `docreg.toml`.
//!
//! The manifest supplies what the manual deployer takes from the environment: the network
//! endpoint, the signing accounts and where compiled artifacts live.

use std::path::{Path, PathBuf};

use crate::core::{credentials::ConfigError, registry::ArtifactRegistry};

pub use manifest::{NetworkManifest, ProjectManifest};
pub use network::connect;

pub mod manifest;
mod network;

#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    manifest: ProjectManifest,
}

impl Project {
    /// Finds the project containing the current directory.
    pub fn current() -> Result<Self, ProjectError> {
        let dir = std::env::current_dir()?;
        Self::discover(dir)
    }

    /// Walks up from `start` to the first directory containing a manifest.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let start = start.as_ref();
        for dir in start.ancestors() {
            let path = dir.join(manifest::FILENAME);
            if path.is_file() {
                debug!(@grey, "using project manifest {}", path.display());
                return Ok(Self {
                    root: dir.to_path_buf(),
                    manifest: ProjectManifest::load(path)?,
                });
            }
        }
        Err(ProjectError::NotFound(start.display().to_string()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    pub fn artifacts(&self) -> ArtifactRegistry {
        ArtifactRegistry::new(self.root.join(&self.manifest.artifacts))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid docreg.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("no docreg.toml found in {0} or any parent directory")]
    NotFound(String),
    #[error("unknown network {} (configured: {})", .name, .known.join(", "))]
    UnknownNetwork { name: String, known: Vec<String> },
    #[error("environment variable {0} referenced by docreg.toml is not set")]
    MissingEnv(String),
    #[error("network {0} has no accounts configured and the node reported none")]
    NoSigner(String),
}
