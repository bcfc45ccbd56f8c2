// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The network operations the deployers need, behind one trait.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};

use crate::{core::deployment::DeploymentError, utils::color::DebugColor};

/// A contract whose creation transaction has been confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

/// Gas estimate for a creation transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas: u64,
    pub gas_price: u128,
}

impl GasEstimate {
    pub fn total_cost(&self) -> U256 {
        U256::from(self.gas_price).saturating_mul(U256::from(self.gas))
    }
}

/// Connection to a chain with a default signer.
///
/// Every method is a single awaited request; none of them retry or time out.
#[allow(async_fn_in_trait)]
pub trait Chain {
    /// Address that signs deployment transactions.
    fn signer(&self) -> Address;

    async fn balance(&self, address: Address) -> Result<U256, DeploymentError>;

    async fn estimate_deploy(&self, initcode: &Bytes) -> Result<GasEstimate, DeploymentError>;

    /// Submits a contract creation transaction and waits for its receipt.
    async fn deploy(
        &self,
        initcode: &Bytes,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Result<DeployedContract, DeploymentError>;

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, DeploymentError>;
}

/// [`Chain`] over an alloy provider.
#[derive(Debug)]
pub struct RpcChain<P> {
    provider: P,
    signer: Address,
}

impl<P: Provider> RpcChain<P> {
    pub fn new(provider: P, signer: Address) -> Self {
        Self { provider, signer }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn creation_tx(&self, initcode: &Bytes) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.signer)
            .with_deploy_code(initcode.clone())
    }
}

impl<P: Provider> Chain for RpcChain<P> {
    fn signer(&self) -> Address {
        self.signer
    }

    async fn balance(&self, address: Address) -> Result<U256, DeploymentError> {
        Ok(self.provider.get_balance(address).await?)
    }

    async fn estimate_deploy(&self, initcode: &Bytes) -> Result<GasEstimate, DeploymentError> {
        let gas = self
            .provider
            .estimate_gas(self.creation_tx(initcode))
            .await?;
        let gas_price = self.provider.get_gas_price().await?;
        Ok(GasEstimate { gas, gas_price })
    }

    async fn deploy(
        &self,
        initcode: &Bytes,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Result<DeployedContract, DeploymentError> {
        let mut tx = self.creation_tx(initcode);
        if let Some(max_fee) = max_fee_per_gas_wei {
            tx.max_fee_per_gas = Some(max_fee);
        }

        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|_| DeploymentError::FailedToComplete { tx_hash })?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress { tx_hash })?;

        Ok(DeployedContract {
            address,
            tx_hash,
            gas_used: receipt.gas_used,
        })
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, DeploymentError> {
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        Ok(self.provider.call(tx).await?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! In-memory chain for exercising the deployment pipeline.

    use std::cell::{Cell, RefCell};

    use alloy::{primitives::B256, transports::TransportErrorKind};

    use super::*;

    /// Where the mock should reject a request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FailAt {
        Balance,
        Deploy,
        Revert,
        Call,
    }

    #[derive(Debug)]
    pub struct MockChain {
        pub signer: Address,
        pub balance: U256,
        /// Value returned by every `eth_call`.
        pub call_result: Bytes,
        pub fail_at: Option<FailAt>,
        /// Number of requests made, of any kind.
        pub requests: Cell<usize>,
        pub deployed: RefCell<Vec<(Address, Bytes)>>,
    }

    impl MockChain {
        pub fn new() -> Self {
            Self {
                signer: Address::repeat_byte(0x11),
                balance: U256::from(10u64).pow(U256::from(18u64)),
                call_result: U256::from(0u64).to_be_bytes::<32>().to_vec().into(),
                fail_at: None,
                requests: Cell::new(0),
                deployed: RefCell::new(Vec::new()),
            }
        }

        pub fn failing_at(fail_at: FailAt) -> Self {
            Self {
                fail_at: Some(fail_at),
                ..Self::new()
            }
        }

        fn request(&self, step: FailAt) -> Result<(), DeploymentError> {
            self.requests.set(self.requests.get() + 1);
            if self.fail_at == Some(step) {
                return Err(DeploymentError::Rpc(TransportErrorKind::custom_str(
                    "connection refused",
                )));
            }
            Ok(())
        }
    }

    impl Chain for MockChain {
        fn signer(&self) -> Address {
            self.signer
        }

        async fn balance(&self, _address: Address) -> Result<U256, DeploymentError> {
            self.request(FailAt::Balance)?;
            Ok(self.balance)
        }

        async fn estimate_deploy(&self, _initcode: &Bytes) -> Result<GasEstimate, DeploymentError> {
            self.request(FailAt::Deploy)?;
            Ok(GasEstimate {
                gas: 250_000,
                gas_price: 2_000_000_000,
            })
        }

        async fn deploy(
            &self,
            initcode: &Bytes,
            _max_fee_per_gas_wei: Option<u128>,
        ) -> Result<DeployedContract, DeploymentError> {
            self.request(FailAt::Deploy)?;
            let tx_hash = B256::random();
            if self.fail_at == Some(FailAt::Revert) {
                return Err(DeploymentError::Reverted { tx_hash });
            }
            let address = Address::random();
            self.deployed.borrow_mut().push((address, initcode.clone()));
            Ok(DeployedContract {
                address,
                tx_hash,
                gas_used: 120_000,
            })
        }

        async fn call(&self, _to: Address, _input: Bytes) -> Result<Bytes, DeploymentError> {
            self.request(FailAt::Call)?;
            Ok(self.call_result.clone())
        }
    }
}
