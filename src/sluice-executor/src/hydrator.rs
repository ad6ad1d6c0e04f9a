//! Hydration interpreter: patches computed values into an already-decoded
//! call batch immediately before dispatch.

use alloy_primitives::U256;
use tracing::trace;

use sluice_executor_types::{
    CallDescriptor, ExecutionFrame, HostAccess, HydrationCommand, HydrationProgram, ProgramEntry,
};

use crate::{errors::HydrationError, sampler};

/// Apply a decoded program to the batch.
///
/// The interpreter performs fixed-width in-place overwrites only and never
/// invokes external code beyond balance and allowance queries, so every
/// sampled value reflects pre-dispatch state. The whole pass completes (or
/// aborts, leaving the batch undispatched) before the first call runs.
pub fn hydrate<H: HostAccess>(
    host: &H,
    frame: &ExecutionFrame,
    calls: &mut [CallDescriptor],
    program: &HydrationProgram,
) -> Result<(), HydrationError> {
    trace!(
        entries = program.entries.len(),
        initial_call_index = program.initial_call_index,
        "applying hydration program"
    );
    let mut cursor = program.initial_call_index;
    for entry in &program.entries {
        match entry {
            ProgramEntry::AdvanceCursor { call_index } => cursor = *call_index,
            ProgramEntry::Patch(command) => apply(host, frame, calls, cursor, command)?,
        }
    }
    Ok(())
}

fn apply<H: HostAccess>(
    host: &H,
    frame: &ExecutionFrame,
    calls: &mut [CallDescriptor],
    cursor: u8,
    command: &HydrationCommand,
) -> Result<(), HydrationError> {
    let call = calls
        .get_mut(cursor as usize)
        .ok_or(HydrationError::CallIndexOutOfBounds(cursor))?;

    match *command {
        HydrationCommand::AccountId { source, offset } => {
            let account = sampler::resolve_account(frame, source);
            write_bytes(call, cursor, offset, account.as_slice())
        }
        HydrationCommand::NativeBalance { source, offset } => {
            let value = sampler::native_balance_of(host, frame, source);
            write_word(call, cursor, offset, value)
        }
        HydrationCommand::AssetBalance { asset, holder, offset } => {
            let value = sampler::asset_balance_of(host, frame, asset, holder)?;
            write_word(call, cursor, offset, value)
        }
        HydrationCommand::AssetAllowance { asset, owner, spender, offset } => {
            let value = sampler::asset_allowance_of(host, frame, asset, owner, spender)?;
            write_word(call, cursor, offset, value)
        }
        HydrationCommand::CallTarget { source } => {
            call.target = sampler::resolve_account(frame, source);
            Ok(())
        }
        HydrationCommand::CallValue { source } => {
            call.native_amount = sampler::native_balance_of(host, frame, source);
            Ok(())
        }
    }
}

fn write_bytes(
    call: &mut CallDescriptor,
    call_index: u8,
    offset: u16,
    bytes: &[u8],
) -> Result<(), HydrationError> {
    let start = offset as usize;
    let end = start + bytes.len();
    if end > call.input.len() {
        return Err(HydrationError::OffsetOutOfBounds {
            call_index,
            offset,
            width: bytes.len(),
        });
    }
    call.input[start..end].copy_from_slice(bytes);
    Ok(())
}

fn write_word(
    call: &mut CallDescriptor,
    call_index: u8,
    offset: u16,
    value: U256,
) -> Result<(), HydrationError> {
    write_bytes(call, call_index, offset, &value.to_be_bytes::<32>())
}
