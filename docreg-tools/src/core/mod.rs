// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod build_output;
pub mod chain;
pub mod credentials;
pub mod deployment;
pub mod project;
pub mod registry;
