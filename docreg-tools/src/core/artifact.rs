// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts, as written by Hardhat.
//!
//! Only the fields needed for deployment are read: the JSON ABI and the creation bytecode.
//! Everything else in the file (`deployedBytecode`, `linkReferences`, ...) is ignored.

use std::{fs, path::Path};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Function, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;

/// Default location of the DocumentRegistry artifact, relative to the project root.
pub const DEFAULT_ARTIFACT_PATH: &str =
    "artifacts/contracts/DocumentRegistry.sol/DocumentRegistry.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    #[serde(default)]
    pub contract_name: Option<String>,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let artifact = Self::parse(&contents)?;
        debug!(@grey, "loaded artifact from {}", path.display());
        Ok(artifact)
    }

    pub fn parse(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(json)?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(artifact.display_name().to_string()));
        }
        Ok(artifact)
    }

    pub fn display_name(&self) -> &str {
        self.contract_name.as_deref().unwrap_or("<unnamed>")
    }

    /// Creation code followed by the ABI-encoded constructor arguments.
    ///
    /// Arguments are given as strings and coerced against the constructor's input types.
    pub fn initcode(&self, args: &[String]) -> Result<Bytes, ArtifactError> {
        let Some(constructor) = &self.abi.constructor else {
            if !args.is_empty() {
                return Err(ArtifactError::ConstructorArgs(format!(
                    "contract has no constructor but {} arguments were given",
                    args.len()
                )));
            }
            return Ok(self.bytecode.clone());
        };

        if args.len() != constructor.inputs.len() {
            return Err(ArtifactError::ConstructorArgs(format!(
                "mismatch number of constructor arguments (want {}; got {})",
                constructor.inputs.len(),
                args.len(),
            )));
        }

        let mut values = Vec::<DynSolValue>::with_capacity(args.len());
        for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
            let value = param
                .resolve()
                .and_then(|ty| ty.coerce_str(arg))
                .map_err(|err| {
                    ArtifactError::ConstructorArgs(format!("could not parse {param}: {err}"))
                })?;
            values.push(value);
        }
        let encoded = constructor
            .abi_encode_input(&values)
            .map_err(|err| ArtifactError::ConstructorArgs(err.to_string()))?;

        let mut code = self.bytecode.to_vec();
        code.extend(encoded);
        Ok(code.into())
    }

    /// Finds a read-only accessor by name that takes no inputs.
    pub fn accessor(&self, name: &str) -> Option<&Function> {
        self.abi
            .function(name)?
            .iter()
            .find(|function| function.inputs.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("artifact {0} has no bytecode (abstract contract or interface?)")]
    EmptyBytecode(String),
    #[error("invalid constructor arguments: {0}")]
    ConstructorArgs(String),

    #[error("no artifact found for contract {0}")]
    NotFound(String),
    #[error("multiple artifacts found for contract {}, use a fully qualified name:\n{}", .name, .candidates.join("\n"))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("bad artifact search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
