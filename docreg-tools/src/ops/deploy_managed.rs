// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Managed deployment: network, signer and artifact all come from the project manifest.

use alloy::primitives::Address;
use eyre::eyre;

use crate::core::{
    chain::{Chain, DeployedContract},
    deployment::{self, DeploymentConfig},
    project::{self, Project},
    registry::{ArtifactRegistry, DEFAULT_CONTRACT_NAME},
};

#[derive(Debug, Clone)]
pub struct ManagedDeployment {
    /// Bare or fully qualified contract name.
    pub contract: String,
    pub network: Option<String>,
    pub config: DeploymentConfig,
}

impl Default for ManagedDeployment {
    fn default() -> Self {
        Self {
            contract: DEFAULT_CONTRACT_NAME.to_string(),
            network: None,
            config: DeploymentConfig::default(),
        }
    }
}

/// Deploys from the project containing the current directory.
pub async fn deploy_managed(
    deployment: &ManagedDeployment,
) -> eyre::Result<Option<DeployedContract>> {
    let project = Project::current()?;
    let (name, network) = project.manifest().network(deployment.network.as_deref())?;
    let chain = project::connect(&name, &network)
        .await
        .map_err(|err| eyre!("could not connect to network {name}: {err}"))?;
    deploy_managed_with(&chain, &project.artifacts(), deployment).await
}

/// Runs the managed deployment pipeline against any chain and artifact registry.
pub async fn deploy_managed_with(
    chain: &impl Chain,
    registry: &ArtifactRegistry,
    deployment: &ManagedDeployment,
) -> eyre::Result<Option<DeployedContract>> {
    deployment::log_balance(chain).await?;

    let artifact = registry.load(&deployment.contract)?;

    if deployment.config.estimate_gas {
        deployment::estimate(&artifact, &deployment.config, chain).await?;
        return Ok(None);
    }

    let deployed = deployment::deploy_contract(&artifact, &deployment.config, chain).await?;

    mintln!("{} deployed to: {}", artifact.display_name(), deployed.address);
    greyln!("add this to your front-end config:");
    println!("{}", address_snippet(deployed.address));

    Ok(Some(deployed))
}

/// Source line exporting the address, ready to paste into the front-end.
pub fn address_snippet(address: Address) -> String {
    format!("export const CONTRACT_ADDRESS = \"{address}\";")
}
