use alloy_primitives::{Address, U256};
use thiserror::Error;

use crate::{frame::ExecutionFrame, host::HostAccess};

/// Error-handling policy for one call of a batch.
///
/// Enforced by the batch dispatcher: `Revert` aborts the whole batch,
/// `Abort` stops dispatching the remaining calls, `Ignore` records the
/// failure and arms the next call's fallback flag, `Fallthrough` records the
/// failure and keeps dispatching without arming anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorPolicy {
    Revert = 0x0,
    Abort = 0x1,
    Ignore = 0x2,
    Fallthrough = 0x3,
}

impl TryFrom<u8> for ErrorPolicy {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, <Self as TryFrom<u8>>::Error> {
        use ErrorPolicy::*;
        let policy = match value {
            0x0 => Revert,
            0x1 => Abort,
            0x2 => Ignore,
            0x3 => Fallthrough,
            _ => return Err(()),
        };
        Ok(policy)
    }
}

/// One decoded sub-invocation of a batch.
///
/// The hydrator mutates `target`, `native_amount` and in-place byte ranges of
/// `input`; nothing resizes the buffer after decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallDescriptor {
    pub target: Address,
    pub native_amount: U256,
    pub input: Vec<u8>,
    /// Computational-budget cap for this call; zero caps nothing.
    pub budget_cap: U256,
    /// Run the call in the current storage context (borrowed frame).
    pub context_preserving: bool,
    /// Skip unless the previous call failed under `Ignore`.
    pub fallback_only: bool,
    pub error_policy: ErrorPolicy,
}

/// Result of one dispatched call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOutcome {
    pub success: bool,
    pub return_data: Vec<u8>,
}

/// Batch-level decode failures reported by the outer codec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BatchDecodeError {
    #[error("batch bytes truncated")]
    Truncated,
    #[error("unknown error policy tag {0:#04x}")]
    UnknownErrorPolicy(u8),
    #[error("trailing bytes after final call descriptor")]
    TrailingBytes,
}

/// Dispatch-time failures surfaced by the outer dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchFailure {
    #[error("insufficient computational budget")]
    InsufficientBudget,
    #[error("sub-call reverted")]
    SubCallReverted(Vec<u8>),
}

/// The outer call-batch codec and dispatcher.
///
/// The engine consumes it behind this trait the same way chain state sits
/// behind [`HostAccess`]: decode happens before hydration, dispatch strictly
/// after the whole batch is hydrated. Per-call `error_policy`,
/// `fallback_only` and `budget_cap` semantics belong to the implementation.
pub trait BatchDispatcher {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<CallDescriptor>, BatchDecodeError>;

    fn dispatch<H: HostAccess>(
        &mut self,
        host: &mut H,
        frame: &ExecutionFrame,
        calls: Vec<CallDescriptor>,
    ) -> Result<Vec<CallOutcome>, DispatchFailure>;
}
