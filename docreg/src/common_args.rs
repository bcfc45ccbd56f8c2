// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use docreg_tools::core::{
    credentials::{ConfigError, Credentials, PRIVATE_KEY_VAR, RPC_URL_VAR},
    deployment::{DeploymentConfig, DEFAULT_SMOKE_CALL},
};

use crate::utils::parse_gwei;

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// Private key as a hex string. Prefer setting it in the environment or a .env file
    #[arg(long, env = PRIVATE_KEY_VAR, hide_env_values = true)]
    private_key: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint of the target network
    #[arg(short = 'e', long, env = RPC_URL_VAR)]
    rpc_url: Option<String>,
}

/// Validates the key and endpoint before anything touches the network.
pub fn credentials(auth: &AuthArgs, provider: &ProviderArgs) -> Result<Credentials, ConfigError> {
    Credentials::new(auth.private_key.as_deref(), provider.rpc_url.as_deref())
}

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Optional max fee per gas in gwei units.
    #[arg(long, value_parser = parse_gwei)]
    max_fee_per_gas_gwei: Option<u128>,
    /// Read-only accessor called on the new contract to check it responds.
    #[arg(long, default_value = DEFAULT_SMOKE_CALL)]
    smoke_call: String,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,
}

impl DeployArgs {
    pub fn config(&self) -> DeploymentConfig {
        DeploymentConfig {
            constructor_args: self.constructor_args.clone(),
            smoke_call: self.smoke_call.clone(),
            max_fee_per_gas_wei: self.max_fee_per_gas_gwei,
            estimate_gas: self.estimate_gas,
        }
    }
}
