// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Manual deployment: credentials from the environment, artifact from a fixed path, address
//! written to a file.

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::Signer,
};
use eyre::eyre;

use crate::core::{
    artifact::{ContractArtifact, DEFAULT_ARTIFACT_PATH},
    chain::{Chain, DeployedContract, RpcChain},
    credentials::Credentials,
    deployment::{self, DeploymentConfig},
};

/// Default file the deployed address is written to.
pub const DEFAULT_OUTPUT_PATH: &str = "DEPLOY_ADDRESS.txt";

#[derive(Debug, Clone)]
pub struct ManualDeployment {
    pub artifact: PathBuf,
    pub output: PathBuf,
    pub config: DeploymentConfig,
}

impl Default for ManualDeployment {
    fn default() -> Self {
        Self {
            artifact: DEFAULT_ARTIFACT_PATH.into(),
            output: DEFAULT_OUTPUT_PATH.into(),
            config: DeploymentConfig::default(),
        }
    }
}

/// Deploys over RPC with the given credentials.
///
/// Returns `None` when only estimating gas.
pub async fn deploy(
    credentials: &Credentials,
    deployment: &ManualDeployment,
) -> eyre::Result<Option<DeployedContract>> {
    let chain_id = ProviderBuilder::new()
        .connect(credentials.rpc_url())
        .await
        .map_err(|err| eyre!("could not connect to rpc endpoint: {err}"))?
        .get_chain_id()
        .await
        .map_err(|err| eyre!("could not fetch chain id: {err}"))?;
    let signer = credentials.signer().clone().with_chain_id(Some(chain_id));
    let address = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect(credentials.rpc_url())
        .await?;
    deploy_with(&RpcChain::new(provider, address), deployment).await
}

/// Runs the manual deployment pipeline against any chain.
pub async fn deploy_with(
    chain: &impl Chain,
    deployment: &ManualDeployment,
) -> eyre::Result<Option<DeployedContract>> {
    deployment::log_balance(chain).await?;

    let artifact = ContractArtifact::load(&deployment.artifact)?;

    if deployment.config.estimate_gas {
        deployment::estimate(&artifact, &deployment.config, chain).await?;
        return Ok(None);
    }

    let deployed = deployment::deploy_contract(&artifact, &deployment.config, chain).await?;

    fs::write(
        &deployment.output,
        format!("CONTRACT_ADDRESS={}\n", deployed.address),
    )
    .map_err(|err| eyre!("failed to write {}: {err}", deployment.output.display()))?;
    info!(@grey, "contract address saved to {}", deployment.output.display());

    Ok(Some(deployed))
}
