use alloy_primitives::Address;

/// Invocation context of one execution frame, sampled once at entry and
/// passed by value through the engine.
///
/// Under a context-preserving (borrowed-storage) invocation the code identity
/// differs from the storage owner: the frame runs this module's code against
/// the owning account's storage and balances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionFrame {
    /// Account whose storage and balances are in effect for this frame.
    pub effective_storage_owner: Address,
    /// Account the executing code observes as its own identity.
    pub code_identity: Address,
    /// Immediate invoker of this frame.
    pub caller: Address,
    /// Top-level transaction initiator.
    pub origin: Address,
}
