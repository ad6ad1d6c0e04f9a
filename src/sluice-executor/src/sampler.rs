//! Pure value resolution against the current frame and live chain state.
//!
//! Account resolution is constant for the duration of one hydration pass;
//! balance and allowance reads are live reads taken during that pass, always
//! before any call of the batch dispatches.

use alloy_primitives::{Address, U256};

use sluice_executor_types::{ExecutionFrame, HostAccess, HostError, ValueSource};

/// Resolve a value source against the frame's invocation context.
pub fn resolve_account(frame: &ExecutionFrame, source: ValueSource) -> Address {
    match source {
        ValueSource::This => frame.effective_storage_owner,
        ValueSource::Caller => frame.caller,
        ValueSource::Origin => frame.origin,
        ValueSource::Explicit(account) => account,
    }
}

/// Live native-asset balance of the resolved account.
pub fn native_balance_of<H: HostAccess>(
    host: &H,
    frame: &ExecutionFrame,
    source: ValueSource,
) -> U256 {
    host.native_balance(resolve_account(frame, source))
}

/// Live fungible-asset balance of the resolved holder. A query failure fails
/// the whole hydration pass.
pub fn asset_balance_of<H: HostAccess>(
    host: &H,
    frame: &ExecutionFrame,
    asset: Address,
    holder: ValueSource,
) -> Result<U256, HostError> {
    host.asset_balance(asset, resolve_account(frame, holder))
}

/// Live owner→spender allowance on the asset.
pub fn asset_allowance_of<H: HostAccess>(
    host: &H,
    frame: &ExecutionFrame,
    asset: Address,
    owner: ValueSource,
    spender: ValueSource,
) -> Result<U256, HostError> {
    host.asset_allowance(
        asset,
        resolve_account(frame, owner),
        resolve_account(frame, spender),
    )
}
