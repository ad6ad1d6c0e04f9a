//! Shared test doubles: an in-memory host and a packed-batch dispatcher.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use alloy_primitives::{Address, FixedBytes, U256};

use sluice_executor_types::{
    BatchDecodeError, BatchDispatcher, CallDescriptor, CallOutcome, DispatchFailure,
    EphemeralStore, ErrorPolicy, ExecutionFrame, ExecutorEvent, HostAccess, HostError,
};

pub const REVERT_PAYLOAD: &[u8] = b"mock revert";
pub const RETURN_PAYLOAD: &[u8] = b"ok";

/// In-memory chain state scoped to one owner account, one transaction.
pub struct MockHost {
    pub owner: Address,
    pub native: BTreeMap<Address, U256>,
    pub assets: BTreeMap<(Address, Address), U256>,
    pub allowances: BTreeMap<(Address, Address, Address), U256>,
    pub transient: EphemeralStore,
    pub events: Vec<ExecutorEvent>,
    /// Journal of dispatched calls: (target, value, input).
    pub dispatched: Vec<(Address, U256, Vec<u8>)>,
    pub reverting_targets: BTreeSet<Address>,
    pub rejecting_recipients: BTreeSet<Address>,
}

impl MockHost {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            native: BTreeMap::new(),
            assets: BTreeMap::new(),
            allowances: BTreeMap::new(),
            transient: EphemeralStore::new(),
            events: Vec::new(),
            dispatched: Vec::new(),
            reverting_targets: BTreeSet::new(),
            rejecting_recipients: BTreeSet::new(),
        }
    }

    pub fn fund_native(&mut self, account: Address, amount: U256) {
        *self.native.entry(account).or_default() += amount;
    }

    pub fn fund_asset(&mut self, asset: Address, holder: Address, amount: U256) {
        *self.assets.entry((asset, holder)).or_default() += amount;
    }

    fn debit_native(&mut self, account: Address, amount: U256) -> Result<(), HostError> {
        let balance = self.native.entry(account).or_default();
        *balance = balance.checked_sub(amount).ok_or(HostError::CallFailed)?;
        Ok(())
    }

    fn move_asset(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), HostError> {
        let from_balance = self.assets.entry((asset, from)).or_default();
        *from_balance = from_balance
            .checked_sub(amount)
            .ok_or(HostError::Reverted(b"insufficient balance".to_vec()))?;
        *self.assets.entry((asset, to)).or_default() += amount;
        Ok(())
    }
}

impl HostAccess for MockHost {
    fn native_balance(&self, account: Address) -> U256 {
        self.native.get(&account).copied().unwrap_or_default()
    }

    fn asset_balance(&self, asset: Address, holder: Address) -> Result<U256, HostError> {
        Ok(self.assets.get(&(asset, holder)).copied().unwrap_or_default())
    }

    fn asset_allowance(
        &self,
        asset: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, HostError> {
        Ok(self
            .allowances
            .get(&(asset, owner, spender))
            .copied()
            .unwrap_or_default())
    }

    fn transfer_native(&mut self, to: Address, amount: U256) -> Result<(), HostError> {
        if self.rejecting_recipients.contains(&to) {
            return Err(HostError::TransferRejected);
        }
        let owner = self.owner;
        self.debit_native(owner, amount)?;
        *self.native.entry(to).or_default() += amount;
        Ok(())
    }

    fn transfer_asset(
        &mut self,
        asset: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), HostError> {
        let owner = self.owner;
        self.move_asset(asset, owner, to, amount)
    }

    fn pull_asset(&mut self, asset: Address, from: Address, amount: U256) -> Result<(), HostError> {
        let owner = self.owner;
        self.move_asset(asset, from, owner, amount)
    }

    fn call(
        &mut self,
        target: Address,
        value: U256,
        input: &[u8],
        _budget_cap: U256,
    ) -> Result<Vec<u8>, HostError> {
        if self.reverting_targets.contains(&target) {
            return Err(HostError::Reverted(REVERT_PAYLOAD.to_vec()));
        }
        if value > U256::ZERO {
            let owner = self.owner;
            self.debit_native(owner, value)?;
            *self.native.entry(target).or_default() += value;
        }
        self.dispatched.push((target, value, input.to_vec()));
        Ok(RETURN_PAYLOAD.to_vec())
    }

    fn transient_load(&self, slot: FixedBytes<32>) -> FixedBytes<32> {
        self.transient.load(slot)
    }

    fn transient_store(&mut self, slot: FixedBytes<32>, word: FixedBytes<32>) {
        self.transient.store(slot, word);
    }

    fn emit(&mut self, event: ExecutorEvent) {
        self.events.push(event);
    }
}

/// Packed-batch codec + dispatcher double.
///
/// Per call: target (20) | value (32) | input len (u16 BE) | input |
/// budget cap (32) | flags (1: bit0 context-preserving, bit1 fallback-only) |
/// error policy (1).
pub struct PackedDispatcher;

pub fn encode_batch(calls: &[CallDescriptor]) -> Vec<u8> {
    let mut buf = Vec::new();
    for call in calls {
        buf.extend_from_slice(call.target.as_slice());
        buf.extend_from_slice(&call.native_amount.to_be_bytes::<32>());
        buf.extend_from_slice(&(call.input.len() as u16).to_be_bytes());
        buf.extend_from_slice(&call.input);
        buf.extend_from_slice(&call.budget_cap.to_be_bytes::<32>());
        let mut flags = 0u8;
        if call.context_preserving {
            flags |= 0x1;
        }
        if call.fallback_only {
            flags |= 0x2;
        }
        buf.push(flags);
        buf.push(call.error_policy as u8);
    }
    buf
}

impl BatchDispatcher for PackedDispatcher {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<CallDescriptor>, BatchDecodeError> {
        let mut calls = Vec::new();
        let mut i = 0usize;
        while i < bytes.len() {
            let target = read(bytes, &mut i, 20).map(Address::from_slice)?;
            let native_amount = read(bytes, &mut i, 32).map(U256::from_be_slice)?;
            let input_len = read(bytes, &mut i, 2)
                .map(|b| u16::from_be_bytes([b[0], b[1]]) as usize)?;
            let input = read(bytes, &mut i, input_len)?.to_vec();
            let budget_cap = read(bytes, &mut i, 32).map(U256::from_be_slice)?;
            let flags = read(bytes, &mut i, 1)?[0];
            let policy_tag = read(bytes, &mut i, 1)?[0];
            let error_policy = ErrorPolicy::try_from(policy_tag)
                .map_err(|_| BatchDecodeError::UnknownErrorPolicy(policy_tag))?;
            calls.push(CallDescriptor {
                target,
                native_amount,
                input,
                budget_cap,
                context_preserving: flags & 0x1 != 0,
                fallback_only: flags & 0x2 != 0,
                error_policy,
            });
        }
        Ok(calls)
    }

    fn dispatch<H: HostAccess>(
        &mut self,
        host: &mut H,
        _frame: &ExecutionFrame,
        calls: Vec<CallDescriptor>,
    ) -> Result<Vec<CallOutcome>, DispatchFailure> {
        let mut outcomes = Vec::new();
        let mut fallback_armed = false;
        for call in calls {
            if call.fallback_only && !fallback_armed {
                outcomes.push(CallOutcome { success: true, return_data: Vec::new() });
                continue;
            }
            fallback_armed = false;
            match host.call(call.target, call.native_amount, &call.input, call.budget_cap) {
                Ok(return_data) => outcomes.push(CallOutcome { success: true, return_data }),
                Err(err) => {
                    let payload = match err {
                        HostError::Reverted(data) => data,
                        _ => Vec::new(),
                    };
                    match call.error_policy {
                        ErrorPolicy::Revert => {
                            return Err(DispatchFailure::SubCallReverted(payload))
                        }
                        ErrorPolicy::Abort => {
                            outcomes.push(CallOutcome { success: false, return_data: payload });
                            break;
                        }
                        ErrorPolicy::Ignore => {
                            outcomes.push(CallOutcome { success: false, return_data: payload });
                            fallback_armed = true;
                        }
                        ErrorPolicy::Fallthrough => {
                            outcomes.push(CallOutcome { success: false, return_data: payload });
                        }
                    }
                }
            }
        }
        Ok(outcomes)
    }
}

fn read<'a>(bytes: &'a [u8], i: &mut usize, len: usize) -> Result<&'a [u8], BatchDecodeError> {
    if bytes.len() < *i + len {
        return Err(BatchDecodeError::Truncated);
    }
    let out = &bytes[*i..*i + len];
    *i += len;
    Ok(out)
}

/// A descriptor with sensible defaults for tests.
pub fn call_to(target: Address, input_len: usize) -> CallDescriptor {
    CallDescriptor {
        target,
        native_amount: U256::ZERO,
        input: vec![0u8; input_len],
        budget_cap: U256::ZERO,
        context_preserving: false,
        fallback_only: false,
        error_policy: ErrorPolicy::Revert,
    }
}

/// A borrowed-storage frame for `owner` invoked by `caller`.
pub fn borrowed_frame(owner: Address, caller: Address) -> ExecutionFrame {
    ExecutionFrame {
        effective_storage_owner: owner,
        code_identity: owner,
        caller,
        origin: caller,
    }
}

/// A direct frame: the module executes on its own storage identity.
pub fn direct_frame(caller: Address) -> ExecutionFrame {
    ExecutionFrame {
        effective_storage_owner: sluice_executor::EXECUTOR_IDENTITY,
        code_identity: sluice_executor::EXECUTOR_IDENTITY,
        caller,
        origin: caller,
    }
}
