// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::DocregResult;

mod deploy;
mod deploy_managed;
mod verify_build;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy with credentials from PRIVATE_KEY and SEPOLIA_URL, saving the address to a file
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Deploy using the networks, accounts and artifacts of the docreg.toml project
    #[clap(visible_alias = "dm")]
    DeployManaged(deploy_managed::Args),
    /// Check that the front-end build output is complete
    #[clap(visible_alias = "v")]
    VerifyBuild(verify_build::Args),
}

pub async fn exec(cmd: Command) -> DocregResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::DeployManaged(args) => deploy_managed::exec(args).await,
        Command::VerifyBuild(args) => verify_build::exec(args),
    }
}
