//! Single-slot balance injection: replace a known 32-byte placeholder in one
//! prepared call with the live balance of one asset, then dispatch the call.
//!
//! A restricted form of the general hydrator kept as its own path: the
//! caller-facing contract here demands placeholder equality, not just an
//! in-bounds write.

use alloy_primitives::{Address, FixedBytes, U256};
use tracing::debug;

use sluice_executor_types::{ExecutionFrame, ExecutorEvent, HostAccess, HostError};

use crate::{constants::NATIVE_ASSET, errors::ExecutorError};

const WORD_WIDTH: usize = 32;

/// Splice the executing account's live balance of `asset` over the
/// placeholder at `offset`, then dispatch the call to `target`, forwarding
/// the balance as call value when `asset` is native.
pub fn inject_and_call<H: HostAccess>(
    host: &mut H,
    frame: &ExecutionFrame,
    asset: Address,
    target: Address,
    mut input: Vec<u8>,
    offset: usize,
    placeholder: FixedBytes<32>,
) -> Result<Vec<u8>, ExecutorError> {
    let amount = if asset == NATIVE_ASSET {
        host.native_balance(frame.effective_storage_owner)
    } else {
        host.asset_balance(asset, frame.effective_storage_owner)
            .map_err(ExecutorError::Asset)?
    };
    if amount == U256::ZERO {
        return Err(ExecutorError::NoValueAvailable);
    }

    let end = offset
        .checked_add(WORD_WIDTH)
        .ok_or(ExecutorError::AmountOffsetOutOfBounds)?;
    if end > input.len() {
        return Err(ExecutorError::AmountOffsetOutOfBounds);
    }
    if &input[offset..end] != placeholder.as_slice() {
        return Err(ExecutorError::PlaceholderMismatch);
    }
    input[offset..end].copy_from_slice(&amount.to_be_bytes::<32>());

    let value = if asset == NATIVE_ASSET { amount } else { U256::ZERO };
    debug!(%asset, %target, %amount, offset, "placeholder hydrated; dispatching");
    let result_data = host
        .call(target, value, &input, U256::ZERO)
        .map_err(|err| ExecutorError::TargetCallFailed(revert_payload(err)))?;

    host.emit(ExecutorEvent::BalanceInjected {
        asset,
        target,
        placeholder,
        amount,
        offset,
        success: true,
        result_data: result_data.clone(),
    });
    Ok(result_data)
}

/// As [`inject_and_call`], but first pull `pull_amount` of a fungible `asset`
/// from the immediate caller into the executing account. Native value needs
/// no pull; it arrives attached to the invocation.
pub fn inject_sweep_and_call<H: HostAccess>(
    host: &mut H,
    frame: &ExecutionFrame,
    asset: Address,
    pull_amount: U256,
    target: Address,
    input: Vec<u8>,
    offset: usize,
    placeholder: FixedBytes<32>,
) -> Result<Vec<u8>, ExecutorError> {
    if asset != NATIVE_ASSET && pull_amount > U256::ZERO {
        host.pull_asset(asset, frame.caller, pull_amount)
            .map_err(ExecutorError::Asset)?;
    }
    inject_and_call(host, frame, asset, target, input, offset, placeholder)
}

fn revert_payload(err: HostError) -> Vec<u8> {
    match err {
        HostError::Reverted(data) => data,
        _ => Vec::new(),
    }
}
