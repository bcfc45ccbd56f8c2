// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use docreg_tools::{
    core::build_output::{BuildVerifier, DEFAULT_ASSETS_DIR, DEFAULT_DIST_DIR, DEFAULT_ENTRY_FILE},
    ops,
};

use crate::error::DocregResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Build output directory, relative to the working directory.
    #[arg(long, default_value = DEFAULT_DIST_DIR)]
    dist: PathBuf,
    /// Entry file expected inside the output directory.
    #[arg(long, default_value = DEFAULT_ENTRY_FILE)]
    entry: String,
    /// Assets directory expected inside the output directory.
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets: String,
}

pub fn exec(args: Args) -> DocregResult {
    let verifier = BuildVerifier::builder()
        .dist_dir(args.dist)
        .entry_file(args.entry)
        .assets_dir(args.assets)
        .build();
    ops::verify_build(&verifier)?;
    Ok(())
}
