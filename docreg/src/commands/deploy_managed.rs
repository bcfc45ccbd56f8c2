// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use docreg_tools::{
    core::registry::DEFAULT_CONTRACT_NAME,
    ops::{self, ManagedDeployment},
};

use crate::{common_args::DeployArgs, error::DocregResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract to deploy, by name or as `path/File.sol:Name`.
    #[arg(default_value = DEFAULT_CONTRACT_NAME)]
    contract: String,
    /// Network from docreg.toml (defaults to its `default_network`).
    #[arg(short, long)]
    network: Option<String>,

    #[command(flatten)]
    deploy: DeployArgs,
}

pub async fn exec(args: Args) -> DocregResult {
    let deployment = ManagedDeployment {
        contract: args.contract,
        network: args.network,
        config: args.deploy.config(),
    };
    ops::deploy_managed(&deployment).await?;
    Ok(())
}
