// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    primitives::{
        utils::{format_ether, format_units},
        Address, TxHash, U256,
    },
};

use crate::{
    core::{
        artifact::{ArtifactError, ContractArtifact},
        chain::{Chain, DeployedContract, GasEstimate},
    },
    utils::color::DebugColor,
};

/// Counter accessor called on the fresh contract to check it responds.
pub const DEFAULT_SMOKE_CALL: &str = "documentCount";

#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub constructor_args: Vec<String>,
    pub smoke_call: String,
    pub max_fee_per_gas_wei: Option<u128>,
    pub estimate_gas: bool,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            constructor_args: Vec::new(),
            smoke_call: DEFAULT_SMOKE_CALL.to_string(),
            max_fee_per_gas_wei: None,
            estimate_gas: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("deploy tx {} failed to complete", .tx_hash.debug_red())]
    FailedToComplete { tx_hash: TxHash },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
    #[error("contract has no read-only accessor {0}() taking no arguments")]
    MissingAccessor(String),
    #[error("failed to decode {name}() result: {reason}")]
    Decode { name: String, reason: String },
}

/// Queries and logs the signer's balance. The value is informational only.
pub async fn log_balance(chain: &impl Chain) -> Result<U256, DeploymentError> {
    let signer = chain.signer();
    info!(@grey, "deployer address: {}", signer.debug_lavender());
    let balance = chain.balance(signer).await?;
    info!(@grey, "balance: {} ETH", format_ether(balance).lavender());
    Ok(balance)
}

/// Estimates the creation transaction without sending it.
pub async fn estimate(
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    chain: &impl Chain,
) -> Result<GasEstimate, DeploymentError> {
    let initcode = artifact.initcode(&config.constructor_args)?;
    let estimate = chain.estimate_deploy(&initcode).await?;

    greyln!("estimates");
    greyln!("deployment tx gas: {}", estimate.gas.debug_lavender());
    greyln!(
        "gas price: {} gwei",
        format_units(estimate.gas_price, "gwei")
            .unwrap_or_default()
            .lavender()
    );
    greyln!(
        "deployment tx total cost: {} ETH",
        format_ether(estimate.total_cost()).lavender()
    );
    Ok(estimate)
}

/// Deploys the artifact, waits for confirmation and smoke-tests the new contract.
///
/// The accessor used for the smoke test is resolved before anything is sent, so an artifact that
/// lacks it never costs a deployment.
pub async fn deploy_contract(
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    chain: &impl Chain,
) -> Result<DeployedContract, DeploymentError> {
    if artifact.accessor(&config.smoke_call).is_none() {
        return Err(DeploymentError::MissingAccessor(config.smoke_call.clone()));
    }
    let initcode = artifact.initcode(&config.constructor_args)?;

    info!(@grey, "deploying {}...", artifact.display_name());
    let deployed = chain.deploy(&initcode, config.max_fee_per_gas_wei).await?;
    info!(@grey, "deployed code at address: {}", deployed.address.debug_lavender());
    debug!(@grey, "gas used: {}", deployed.gas_used);
    info!(@grey, "deployment tx hash: {}", deployed.tx_hash.debug_lavender());

    let values = smoke_call(artifact, &config.smoke_call, deployed.address, chain).await?;
    info!(@grey,
        "{}() = {}",
        config.smoke_call,
        format_values(&values).mint()
    );

    Ok(deployed)
}

/// Calls a no-argument accessor on a deployed contract and decodes the result.
pub async fn smoke_call(
    artifact: &ContractArtifact,
    name: &str,
    address: Address,
    chain: &impl Chain,
) -> Result<Vec<DynSolValue>, DeploymentError> {
    let function = artifact
        .accessor(name)
        .ok_or_else(|| DeploymentError::MissingAccessor(name.to_string()))?;
    let input = function
        .abi_encode_input(&[])
        .map_err(|err| DeploymentError::Decode {
            name: name.to_string(),
            reason: err.to_string(),
        })?;
    let output = chain.call(address, input.into()).await?;
    function
        .abi_decode_output(&output)
        .map_err(|err| DeploymentError::Decode {
            name: name.to_string(),
            reason: err.to_string(),
        })
}

fn format_values(values: &[DynSolValue]) -> String {
    let text: Vec<String> = values
        .iter()
        .map(|value| match value {
            DynSolValue::Uint(n, _) => n.to_string(),
            DynSolValue::Int(n, _) => n.to_string(),
            DynSolValue::Bool(b) => b.to_string(),
            DynSolValue::Address(a) => a.to_string(),
            DynSolValue::String(s) => format!("{s:?}"),
            other => format!("{other:?}"),
        })
        .collect();
    text.join(", ")
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Bytes;

    use super::*;
    use crate::core::{
        artifact::tests::COUNTER_ARTIFACT,
        chain::mock::{FailAt, MockChain},
    };

    fn artifact() -> ContractArtifact {
        ContractArtifact::parse(COUNTER_ARTIFACT).unwrap()
    }

    #[tokio::test]
    async fn deploys_and_smoke_tests() {
        let mut chain = MockChain::new();
        chain.call_result = U256::from(3u64).to_be_bytes::<32>().to_vec().into();

        let deployed = deploy_contract(&artifact(), &DeploymentConfig::default(), &chain)
            .await
            .unwrap();

        let records = chain.deployed.borrow();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, deployed.address);
        assert_eq!(records[0].1, artifact().bytecode);
        // deploy + call
        assert_eq!(chain.requests.get(), 2);
    }

    #[tokio::test]
    async fn smoke_call_decodes_counter() {
        let mut chain = MockChain::new();
        chain.call_result = U256::from(42u64).to_be_bytes::<32>().to_vec().into();
        let values = smoke_call(&artifact(), "documentCount", Address::ZERO, &chain)
            .await
            .unwrap();
        assert_eq!(values, vec![DynSolValue::Uint(U256::from(42u64), 256)]);
    }

    #[tokio::test]
    async fn undecodable_smoke_result_fails() {
        let mut chain = MockChain::new();
        chain.call_result = Bytes::from_static(&[1, 2, 3]);
        let err = smoke_call(&artifact(), "documentCount", Address::ZERO, &chain)
            .await
            .unwrap_err();
        assert!(matches!(err, DeploymentError::Decode { .. }));
    }

    #[tokio::test]
    async fn missing_accessor_fails_before_sending() {
        let chain = MockChain::new();
        let config = DeploymentConfig {
            smoke_call: "totalSupply".to_string(),
            ..Default::default()
        };
        let err = deploy_contract(&artifact(), &config, &chain)
            .await
            .unwrap_err();
        assert!(matches!(err, DeploymentError::MissingAccessor(name) if name == "totalSupply"));
        assert_eq!(chain.requests.get(), 0);
    }

    #[tokio::test]
    async fn revert_is_fatal() {
        let chain = MockChain::failing_at(FailAt::Revert);
        let err = deploy_contract(&artifact(), &DeploymentConfig::default(), &chain)
            .await
            .unwrap_err();
        assert!(matches!(err, DeploymentError::Reverted { .. }));
        assert!(chain.deployed.borrow().is_empty());
    }

    #[tokio::test]
    async fn estimate_does_not_deploy() {
        let chain = MockChain::new();
        let estimate = estimate(&artifact(), &DeploymentConfig::default(), &chain)
            .await
            .unwrap();
        assert_eq!(estimate.total_cost(), U256::from(500_000_000_000_000u64));
        assert!(chain.deployed.borrow().is_empty());
    }

    #[test]
    fn formats_decoded_values() {
        let values = vec![
            DynSolValue::Uint(U256::from(7u64), 256),
            DynSolValue::Bool(true),
        ];
        assert_eq!(format_values(&values), "7, true");
    }
}
