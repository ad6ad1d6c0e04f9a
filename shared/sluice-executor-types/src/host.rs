use std::collections::BTreeMap;

use alloy_primitives::{Address, FixedBytes, U256};
use thiserror::Error;

use crate::events::ExecutorEvent;

/// Errors during host-level chain access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    /// Used by off-chain mocks or partially implemented hosts.
    #[error("host operation not implemented")]
    NotImplemented,
    /// The underlying external call failed without a revert payload.
    #[error("external call failed")]
    CallFailed,
    /// The callee reverted; the payload is its raw failure data.
    #[error("external call reverted")]
    Reverted(Vec<u8>),
    /// Return data was malformed or could not be decoded.
    #[error("malformed return data")]
    MalformedReturn,
    /// The recipient rejected a transfer.
    #[error("transfer rejected by recipient")]
    TransferRejected,
}

/// Chain access for the storage identity of the current frame, implemented
/// differently on-chain vs off-chain.
///
/// Balance and allowance queries may address any account; transfers, pulls,
/// calls and transient storage act on (and spend from) the effective storage
/// owner of the frame the host was created for. A host lives for exactly one
/// top-level transaction: dropping it discards the transient words.
pub trait HostAccess {
    /// Live native-asset balance of `account`.
    fn native_balance(&self, account: Address) -> U256;

    /// Live fungible-asset balance of `holder`. Fails if `asset` does not
    /// expose a balance query.
    fn asset_balance(&self, asset: Address, holder: Address) -> Result<U256, HostError>;

    /// Live owner→spender allowance on `asset`.
    fn asset_allowance(
        &self,
        asset: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, HostError>;

    /// Transfer native value out of the executing account.
    fn transfer_native(&mut self, to: Address, amount: U256) -> Result<(), HostError>;

    /// Transfer `asset` out of the executing account.
    fn transfer_asset(&mut self, asset: Address, to: Address, amount: U256)
        -> Result<(), HostError>;

    /// Pull `asset` from `from` into the executing account (consumes the
    /// executing account's allowance on `from`).
    fn pull_asset(&mut self, asset: Address, from: Address, amount: U256)
        -> Result<(), HostError>;

    /// bytes-in, bytes-out call with a computational-budget cap (zero caps
    /// nothing).
    fn call(
        &mut self,
        target: Address,
        value: U256,
        input: &[u8],
        budget_cap: U256,
    ) -> Result<Vec<u8>, HostError>;

    /// Read a word of per-transaction scratch storage.
    fn transient_load(&self, slot: FixedBytes<32>) -> FixedBytes<32>;

    /// Write a word of per-transaction scratch storage.
    fn transient_store(&mut self, slot: FixedBytes<32>, word: FixedBytes<32>);

    /// Record an auditable event.
    fn emit(&mut self, event: ExecutorEvent);
}

/// Per-transaction scratch words. Host implementations embed one per
/// transaction scope; unset slots read as zero.
#[derive(Clone, Debug, Default)]
pub struct EphemeralStore {
    words: BTreeMap<FixedBytes<32>, FixedBytes<32>>,
}

impl EphemeralStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, slot: FixedBytes<32>) -> FixedBytes<32> {
        self.words.get(&slot).copied().unwrap_or(FixedBytes::ZERO)
    }

    pub fn store(&mut self, slot: FixedBytes<32>, word: FixedBytes<32>) {
        self.words.insert(slot, word);
    }
}
