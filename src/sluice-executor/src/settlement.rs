//! Settlement primitives: residual sweeps, capped refunds, and the
//! per-operation success-sentinel gate.
//!
//! All primitives read the live balance and act in the same synchronous
//! frame; no external call sits between the read and the transfer it gates.

use alloy_primitives::{keccak256, Address, FixedBytes, U256};
use tracing::debug;

use sluice_executor_types::{ExecutionFrame, ExecutorEvent, HostAccess};

use crate::{
    constants::{NATIVE_ASSET, OP_SENTINEL_NAMESPACE, OP_SUCCESS_WORD},
    errors::ExecutorError,
    guard,
};

/// Sentinel slot for one operation hash = keccak256(namespace ‖ opHash).
pub fn op_sentinel_slot(op_hash: FixedBytes<32>) -> FixedBytes<32> {
    let mut buf = Vec::with_capacity(OP_SENTINEL_NAMESPACE.len() + 32);
    buf.extend_from_slice(OP_SENTINEL_NAMESPACE);
    buf.extend_from_slice(op_hash.as_slice());
    keccak256(buf)
}

/// Move the executing account's entire residual balance of `asset` to
/// `recipient`. Emits `Sweep` even for a zero balance. Returns the amount
/// moved.
pub fn sweep<H: HostAccess>(
    host: &mut H,
    frame: &ExecutionFrame,
    asset: Address,
    recipient: Address,
) -> Result<U256, ExecutorError> {
    guard::ensure_delegated(frame)?;
    sweep_residual(host, frame, asset, recipient, U256::MAX)
}

/// Ungated sweep with a cap, shared by the gated entry points.
pub(crate) fn sweep_residual<H: HostAccess>(
    host: &mut H,
    frame: &ExecutionFrame,
    asset: Address,
    recipient: Address,
    cap: U256,
) -> Result<U256, ExecutorError> {
    let balance = balance_of(host, frame, asset)?;
    let amount = balance.min(cap);
    if amount > U256::ZERO {
        transfer(host, asset, recipient, amount)?;
    }
    host.emit(ExecutorEvent::Sweep { asset, recipient, amount });
    Ok(amount)
}

/// Refund up to `refund_cap` of `asset` to `refund_recipient`, then sweep
/// whatever remains to `sweep_recipient`. Returns `(refunded, swept)`;
/// `refunded + swept` equals the balance held when the operation began.
pub fn refund_and_sweep<H: HostAccess>(
    host: &mut H,
    frame: &ExecutionFrame,
    asset: Address,
    refund_recipient: Address,
    refund_cap: U256,
    sweep_recipient: Address,
) -> Result<(U256, U256), ExecutorError> {
    guard::ensure_delegated(frame)?;

    let balance = balance_of(host, frame, asset)?;
    let refunded = balance.min(refund_cap);
    if refund_cap > balance {
        // Signal the requested-vs-actual mismatch before moving anything.
        host.emit(ExecutorEvent::ActualRefund {
            asset,
            recipient: refund_recipient,
            requested: refund_cap,
            actual: refunded,
        });
    }
    if refunded > U256::ZERO {
        transfer(host, asset, refund_recipient, refunded)?;
    }
    host.emit(ExecutorEvent::Refund { asset, recipient: refund_recipient, amount: refunded });

    let swept = sweep_residual(host, frame, asset, sweep_recipient, U256::MAX)?;
    host.emit(ExecutorEvent::RefundAndSweep {
        asset,
        refund_recipient,
        refund_cap,
        sweep_recipient,
        refunded,
        swept,
    });
    debug!(%asset, %refunded, %swept, "refund-and-sweep settled");
    Ok((refunded, swept))
}

/// Producer step of the sentinel gate: mark `op_hash` as succeeded for the
/// remainder of the transaction.
pub fn record_op_success<H: HostAccess>(
    host: &mut H,
    frame: &ExecutionFrame,
    op_hash: FixedBytes<32>,
) -> Result<(), ExecutorError> {
    guard::ensure_delegated(frame)?;
    host.transient_store(op_sentinel_slot(op_hash), OP_SUCCESS_WORD);
    Ok(())
}

/// Consumer step: sweep `asset` to `recipient` only if `op_hash` was marked
/// as succeeded earlier in this transaction.
pub fn validate_op_hash_and_sweep<H: HostAccess>(
    host: &mut H,
    frame: &ExecutionFrame,
    op_hash: FixedBytes<32>,
    asset: Address,
    recipient: Address,
) -> Result<U256, ExecutorError> {
    guard::ensure_delegated(frame)?;
    if host.transient_load(op_sentinel_slot(op_hash)) != OP_SUCCESS_WORD {
        return Err(ExecutorError::SuccessSentinelNotSet);
    }
    sweep_residual(host, frame, asset, recipient, U256::MAX)
}

fn balance_of<H: HostAccess>(
    host: &H,
    frame: &ExecutionFrame,
    asset: Address,
) -> Result<U256, ExecutorError> {
    if asset == NATIVE_ASSET {
        Ok(host.native_balance(frame.effective_storage_owner))
    } else {
        host.asset_balance(asset, frame.effective_storage_owner)
            .map_err(ExecutorError::Asset)
    }
}

fn transfer<H: HostAccess>(
    host: &mut H,
    asset: Address,
    to: Address,
    amount: U256,
) -> Result<(), ExecutorError> {
    if asset == NATIVE_ASSET {
        host.transfer_native(to, amount)
            .map_err(|_| ExecutorError::NativeTransferFailed)
    } else {
        host.transfer_asset(asset, to, amount).map_err(ExecutorError::Asset)
    }
}
