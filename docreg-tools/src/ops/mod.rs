// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! One entry point per command. Only the manual deployer persists its result.

pub use deploy::{deploy, deploy_with, ManualDeployment};
pub use deploy_managed::{address_snippet, deploy_managed, deploy_managed_with, ManagedDeployment};
pub use verify_build::verify_build;

mod deploy;
mod deploy_managed;
mod verify_build;
