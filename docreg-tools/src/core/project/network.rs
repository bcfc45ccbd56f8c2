// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::Signer,
};

use super::{NetworkManifest, ProjectError};
use crate::{
    core::{chain::RpcChain, credentials::parse_private_key},
    utils::color::DebugColor,
};

/// Connects to a configured network and picks its default signer.
///
/// Configured accounts are all registered with the wallet and the first one signs. A network
/// without accounts falls back to the node's own unlocked accounts, so the node signs.
pub async fn connect(
    name: &str,
    network: &NetworkManifest,
) -> Result<RpcChain<DynProvider>, ProjectError> {
    let url = network.url()?;
    let accounts = network.accounts()?;
    debug!(@grey, "connecting to network {name} at {url}");

    if accounts.is_empty() {
        let provider = ProviderBuilder::new().connect(&url).await?.erased();
        let signer = node_signer(name, &provider.get_accounts().await?)?;
        debug!(@grey, "using node account {}", signer.debug_lavender());
        return Ok(RpcChain::new(provider, signer));
    }

    // Plain connection first, to learn the chain id the signers should commit to.
    let chain_id = ProviderBuilder::new()
        .connect(&url)
        .await?
        .get_chain_id()
        .await?;
    let (wallet, signer) = build_wallet(name, &accounts, chain_id)?;
    debug!(@grey, "{} account(s) configured for {name}", accounts.len());

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&url)
        .await?
        .erased();
    Ok(RpcChain::new(provider, signer))
}

/// Registers every configured key, the first as default signer.
///
/// Returns the wallet with the default signer's address.
fn build_wallet(
    name: &str,
    accounts: &[String],
    chain_id: u64,
) -> Result<(EthereumWallet, Address), ProjectError> {
    let (first, rest) = accounts
        .split_first()
        .ok_or_else(|| ProjectError::NoSigner(name.to_string()))?;
    let default_signer = parse_private_key(first)?.with_chain_id(Some(chain_id));
    let address = default_signer.address();
    let mut wallet = EthereumWallet::new(default_signer);
    for key in rest {
        wallet.register_signer(parse_private_key(key)?.with_chain_id(Some(chain_id)));
    }
    Ok((wallet, address))
}

/// First account the node reports as unlocked.
fn node_signer(name: &str, accounts: &[Address]) -> Result<Address, ProjectError> {
    accounts
        .first()
        .copied()
        .ok_or_else(|| ProjectError::NoSigner(name.to_string()))
}
