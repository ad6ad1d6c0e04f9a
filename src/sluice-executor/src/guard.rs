//! Invocation-mode checks for borrowed-storage execution.

use sluice_executor_types::{CallDescriptor, ExecutionFrame};

use crate::{constants::EXECUTOR_IDENTITY, errors::ExecutorError};

/// True when the frame runs this module's code against another account's
/// storage (a context-preserving invocation substituted the code identity).
pub fn is_borrowed(frame: &ExecutionFrame) -> bool {
    frame.code_identity != EXECUTOR_IDENTITY
}

/// Entry points acting on the owning account's balances must run borrowed.
pub fn ensure_delegated(frame: &ExecutionFrame) -> Result<(), ExecutorError> {
    if is_borrowed(frame) {
        Ok(())
    } else {
        Err(ExecutorError::NotDelegateCall)
    }
}

/// A direct frame must not launch borrowed sub-calls: that would let the
/// caller run arbitrary code against this module's own storage.
pub fn check_nested_delegation(
    frame: &ExecutionFrame,
    calls: &[CallDescriptor],
) -> Result<(), ExecutorError> {
    if is_borrowed(frame) {
        return Ok(());
    }
    if let Some(index) = calls.iter().position(|call| call.context_preserving) {
        return Err(ExecutorError::DelegateCallNotAllowed(index));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};

    use sluice_executor_types::ErrorPolicy;

    use super::*;

    fn frame_with_code(code_identity: Address) -> ExecutionFrame {
        ExecutionFrame {
            effective_storage_owner: Address::new([0x01; 20]),
            code_identity,
            caller: Address::new([0x02; 20]),
            origin: Address::new([0x03; 20]),
        }
    }

    fn call(context_preserving: bool) -> CallDescriptor {
        CallDescriptor {
            target: Address::ZERO,
            native_amount: U256::ZERO,
            input: Vec::new(),
            budget_cap: U256::ZERO,
            context_preserving,
            fallback_only: false,
            error_policy: ErrorPolicy::Revert,
        }
    }

    #[test]
    fn direct_frame_is_not_borrowed() {
        let frame = frame_with_code(EXECUTOR_IDENTITY);
        assert!(!is_borrowed(&frame));
        assert_eq!(ensure_delegated(&frame), Err(ExecutorError::NotDelegateCall));
    }

    #[test]
    fn borrowed_frame_passes_delegation_check() {
        let frame = frame_with_code(Address::new([0x99; 20]));
        assert!(is_borrowed(&frame));
        assert!(ensure_delegated(&frame).is_ok());
    }

    #[test]
    fn direct_frame_rejects_first_borrowed_sub_call() {
        let frame = frame_with_code(EXECUTOR_IDENTITY);
        let calls = vec![call(false), call(true), call(true)];
        assert_eq!(
            check_nested_delegation(&frame, &calls),
            Err(ExecutorError::DelegateCallNotAllowed(1))
        );
        assert!(check_nested_delegation(&frame, &[call(false)]).is_ok());
    }

    #[test]
    fn borrowed_frame_may_nest_borrowed_sub_calls() {
        let frame = frame_with_code(Address::new([0x99; 20]));
        let calls = vec![call(true)];
        assert!(check_nested_delegation(&frame, &calls).is_ok());
    }
}
