// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the DocumentRegistry contract and checking the front-end build it serves.

#[macro_use]
mod macros;

pub mod core;
pub mod ops;
pub mod utils;
