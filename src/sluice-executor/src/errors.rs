//! Errors split by phase: program decoding, hydration, and operation level.

use thiserror::Error;

use sluice_executor_types::{BatchDecodeError, DispatchFailure, HostError};

/// Errors during hydration-program decoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown data kind {0:#x}")]
    UnknownDataKind(u8),
    #[error("unknown value source {0:#x}")]
    UnknownValueSource(u8),
    #[error("program bytes truncated")]
    Truncated,
    #[error("program exceeds command limit")]
    TooManyCommands,
}

/// Errors while applying a decoded program to a call batch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HydrationError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("write of {width} bytes at offset {offset} overruns call {call_index} input")]
    OffsetOutOfBounds {
        call_index: u8,
        offset: u16,
        width: usize,
    },
    #[error("call index {0} outside the decoded batch")]
    CallIndexOutOfBounds(u8),
    #[error("value sampling failed: {0}")]
    Host(#[from] HostError),
}

/// Operation-level errors for the executor entry points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecutorError {
    #[error("not running under a borrowed-storage frame")]
    NotDelegateCall,
    #[error("call {0} requests borrowed execution from a direct frame")]
    DelegateCallNotAllowed(usize),
    #[error(transparent)]
    Hydration(#[from] HydrationError),
    #[error("no value available to inject")]
    NoValueAvailable,
    #[error("amount offset outside the prepared input")]
    AmountOffsetOutOfBounds,
    #[error("prepared input does not carry the declared placeholder")]
    PlaceholderMismatch,
    #[error("target call failed: 0x{}", hex::encode(.0))]
    TargetCallFailed(Vec<u8>),
    #[error("success sentinel not set for operation")]
    SuccessSentinelNotSet,
    #[error("native-asset transfer failed")]
    NativeTransferFailed,
    #[error("asset transfer failed: {0}")]
    Asset(HostError),
    #[error(transparent)]
    Batch(#[from] BatchDecodeError),
    #[error(transparent)]
    Dispatch(#[from] DispatchFailure),
}
