// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use super::ProjectError;

/// Filename of the project manifest.
pub const FILENAME: &str = "docreg.toml";

/// Network used when neither the manifest nor the command line names one.
pub const DEFAULT_NETWORK: &str = "localhost";
pub const LOCALHOST_URL: &str = "http://127.0.0.1:8545";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectManifest {
    #[serde(default)]
    pub default_network: Option<String>,
    #[serde(default = "default_artifacts")]
    pub artifacts: String,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkManifest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkManifest {
    pub url: String,
    /// Private keys, or `$VAR` references to environment variables holding them.
    #[serde(default)]
    pub accounts: Vec<String>,
}

fn default_artifacts() -> String {
    "artifacts".to_string()
}

impl ProjectManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ProjectError> {
        Ok(toml::from_str(contents)?)
    }

    /// Looks up a network, falling back to the built-in `localhost` node.
    pub fn network(&self, name: Option<&str>) -> Result<(String, NetworkManifest), ProjectError> {
        let name = name
            .or(self.default_network.as_deref())
            .unwrap_or(DEFAULT_NETWORK);
        match self.networks.get(name) {
            Some(network) => Ok((name.to_string(), network.clone())),
            None if name == DEFAULT_NETWORK => Ok((
                name.to_string(),
                NetworkManifest {
                    url: LOCALHOST_URL.to_string(),
                    accounts: Vec::new(),
                },
            )),
            None => Err(ProjectError::UnknownNetwork {
                name: name.to_string(),
                known: self.networks.keys().cloned().collect(),
            }),
        }
    }
}

impl NetworkManifest {
    pub fn url(&self) -> Result<String, ProjectError> {
        expand_env(&self.url)
    }

    pub fn accounts(&self) -> Result<Vec<String>, ProjectError> {
        self.accounts.iter().map(|account| expand_env(account)).collect()
    }
}

/// Replaces a whole-value `$VAR` with the variable's contents.
fn expand_env(value: &str) -> Result<String, ProjectError> {
    match value.strip_prefix('$') {
        Some(var) => match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ProjectError::MissingEnv(var.to_string())),
        },
        None => Ok(value.to_string()),
    }
}
