// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use docreg_tools::{
    core::artifact::DEFAULT_ARTIFACT_PATH,
    ops::{self, ManualDeployment},
};

use crate::{
    common_args::{credentials, AuthArgs, DeployArgs, ProviderArgs},
    error::DocregResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Compiled contract artifact (Hardhat JSON with `abi` and `bytecode`).
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,
    /// File the deployed address is written to, replacing its contents.
    #[arg(short, long, default_value = "DEPLOY_ADDRESS.txt")]
    output: PathBuf,

    #[command(flatten)]
    deploy: DeployArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DocregResult {
    let credentials = credentials(&args.auth, &args.provider)?;
    let deployment = ManualDeployment {
        artifact: args.artifact,
        output: args.output,
        config: args.deploy.config(),
    };
    ops::deploy(&credentials, &deployment).await?;
    Ok(())
}
