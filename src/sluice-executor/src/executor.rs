//! Executor entry points: hydrate a pre-authorized batch, hand it to the
//! dispatcher, and settle residual balances.

use alloy_primitives::{Address, U256};
use tracing::debug;

use sluice_executor_types::{BatchDispatcher, CallOutcome, ExecutionFrame, HostAccess};

use crate::{
    constants::NATIVE_ASSET,
    decoder,
    errors::{ExecutorError, HydrationError},
    guard, hydrator, settlement,
};

/// Hydrate `batch_bytes` with `program_bytes`, then dispatch.
///
/// Runs in either frame mode; in a direct frame the nested-delegation gate
/// rejects any sub-call requesting borrowed execution. Hydration completes
/// entirely (or aborts the whole operation) before the first call dispatches.
pub fn hydrate_and_execute<H, D>(
    host: &mut H,
    dispatcher: &mut D,
    frame: &ExecutionFrame,
    batch_bytes: &[u8],
    program_bytes: &[u8],
) -> Result<Vec<CallOutcome>, ExecutorError>
where
    H: HostAccess,
    D: BatchDispatcher,
{
    let mut calls = dispatcher.decode(batch_bytes)?;
    guard::check_nested_delegation(frame, &calls)?;

    let program = decoder::decode_program(program_bytes).map_err(HydrationError::from)?;
    hydrator::hydrate(host, frame, &mut calls, &program)?;
    debug!(
        calls = calls.len(),
        commands = program.entries.len(),
        "batch hydrated; dispatching"
    );
    Ok(dispatcher.dispatch(host, frame, calls)?)
}

/// As [`hydrate_and_execute`], then sweep each listed asset (and optionally
/// the native balance) to `sweep_to`, or to the frame's caller when
/// `sweep_to` is the zero account. Requires a borrowed frame: the sweeps act
/// on the owning account's balances.
pub fn hydrate_execute_and_sweep<H, D>(
    host: &mut H,
    dispatcher: &mut D,
    frame: &ExecutionFrame,
    batch_bytes: &[u8],
    program_bytes: &[u8],
    sweep_to: Address,
    assets: &[Address],
    sweep_native: bool,
) -> Result<Vec<CallOutcome>, ExecutorError>
where
    H: HostAccess,
    D: BatchDispatcher,
{
    guard::ensure_delegated(frame)?;
    let outcomes = hydrate_and_execute(host, dispatcher, frame, batch_bytes, program_bytes)?;

    let recipient = if sweep_to == Address::ZERO { frame.caller } else { sweep_to };
    for asset in assets {
        settlement::sweep_residual(host, frame, *asset, recipient, U256::MAX)?;
    }
    if sweep_native {
        settlement::sweep_residual(host, frame, NATIVE_ASSET, recipient, U256::MAX)?;
    }
    Ok(outcomes)
}
