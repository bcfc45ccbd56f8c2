// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::build_output::{BuildEntry, BuildVerifier, EntryKind},
    utils::color::Color,
};

/// Checks the build output and prints its top-level entries.
pub fn verify_build(verifier: &BuildVerifier) -> eyre::Result<Vec<BuildEntry>> {
    info!(@grey, "checking build output in {}", verifier.dist_dir().display());
    let entries = verifier.verify()?;

    greyln!("{} contents:", verifier.dist_dir().display());
    for entry in &entries {
        let line = entry.to_string();
        match entry.kind {
            EntryKind::Dir => println!("  {}", line.lavender()),
            EntryKind::File => println!("  {line}"),
        }
    }
    mintln!("build output looks good");
    Ok(entries)
}
