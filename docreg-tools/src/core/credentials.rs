// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{primitives::FixedBytes, signers::local::PrivateKeySigner};

use crate::utils::decode0x;

pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const RPC_URL_VAR: &str = "SEPOLIA_URL";

/// Signing key and endpoint for the manual deployer.
///
/// Both values are validated on construction, so holding a `Credentials` means no network call
/// can be attempted with a missing key or endpoint.
#[derive(Clone)]
pub struct Credentials {
    signer: PrivateKeySigner,
    rpc_url: String,
}

impl Credentials {
    pub fn new(private_key: Option<&str>, rpc_url: Option<&str>) -> Result<Self, ConfigError> {
        let private_key = required(PRIVATE_KEY_VAR, private_key)?;
        let rpc_url = required(RPC_URL_VAR, rpc_url)?;
        let signer = parse_private_key(private_key)?;
        Ok(Self {
            signer,
            rpc_url: rpc_url.to_owned(),
        })
    }

    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

// Keep the key out of debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("signer", &self.signer.address())
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

fn required<'a>(var: &'static str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}

/// Parses a hex-encoded private key, with or without a `0x` prefix.
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, ConfigError> {
    let bytes = decode0x(key).map_err(|_| ConfigError::InvalidKey)?;
    if bytes.len() != 32 {
        return Err(ConfigError::InvalidKey);
    }
    let key = FixedBytes::<32>::from_slice(&bytes);
    PrivateKeySigner::from_bytes(&key).map_err(|_| ConfigError::InvalidKey)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("private key is not a valid 32-byte hex secp256k1 key")]
    InvalidKey,
}
