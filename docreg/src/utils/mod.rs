// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use alloy::primitives::utils::{parse_units, ParseUnits};
use anstyle::{AnsiColor, Effects, Style};
use eyre::{bail, eyre};

const BOLD: Style = Style::new().effects(Effects::BOLD);
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);

/// Parses a non-negative gwei amount into wei.
pub fn parse_gwei(text: &str) -> eyre::Result<u128> {
    let units =
        parse_units(text.trim(), "gwei").map_err(|err| eyre!("invalid gwei amount {text}: {err}"))?;
    match units {
        ParseUnits::U256(wei) => {
            u128::try_from(wei).map_err(|_| eyre!("gwei amount out of range: {text}"))
        }
        ParseUnits::I256(_) => bail!("max fee per gas must be non-negative"),
    }
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}
