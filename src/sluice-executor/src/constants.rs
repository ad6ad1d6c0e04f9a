//! Engine constants.

use alloy_primitives::{Address, FixedBytes};

/// Canonical deployed identity of this logic module.
///
/// A frame whose code identity equals this constant is running direct; any
/// other code identity means the frame borrows an owning account's storage.
pub const EXECUTOR_IDENTITY: Address = Address::new([
    0x51, 0x01, 0xce, 0x00, 0x00, 0x51, 0x01, 0xce, 0x00, 0x00, 0x51, 0x01, 0xce, 0x00, 0x00,
    0x51, 0x01, 0xce, 0x00, 0x00,
]);

/// Sentinel address denoting the ledger's native asset in asset parameters.
pub const NATIVE_ASSET: Address = Address::new([0xee; 20]);

/// Namespace prefix for per-operation success-sentinel slots.
pub const OP_SENTINEL_NAMESPACE: &[u8] = b"sluice.executor.op-success.v1";

/// Word stored at a sentinel slot once an operation step has succeeded.
pub const OP_SUCCESS_WORD: FixedBytes<32> = FixedBytes([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1,
]);
