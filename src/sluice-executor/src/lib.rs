//! sluice executor: a value-hydration and settlement engine for smart
//! accounts.
//!
//! A pre-authorized call batch can leave amounts, recipients, call targets
//! and call values open; a hydration program computes them from live chain
//! state immediately before dispatch and splices them into the decoded batch
//! in place. Around that sit the single-slot balance injector (the router
//! path), settlement primitives (sweeps, capped refunds, the per-operation
//! success-sentinel gate), and the invocation-mode guard for borrowed-storage
//! frames.
//!
//! Chain access and the outer batch codec/dispatcher stay behind traits
//! ([`sluice_executor_types::HostAccess`] and
//! [`sluice_executor_types::BatchDispatcher`]); the engine itself holds no
//! storage and performs no I/O of its own.

pub mod constants;
pub mod decoder;
pub mod errors;
pub mod executor;
pub mod guard;
pub mod hydrator;
pub mod injector;
pub mod interfaces;
pub mod sampler;
pub mod settlement;

pub use constants::{EXECUTOR_IDENTITY, NATIVE_ASSET, OP_SUCCESS_WORD};
pub use decoder::{decode_program, decode_program_with_limit};
pub use errors::{DecodeError, ExecutorError, HydrationError};
pub use executor::{hydrate_and_execute, hydrate_execute_and_sweep};
pub use hydrator::hydrate;
pub use injector::{inject_and_call, inject_sweep_and_call};
pub use settlement::{
    op_sentinel_slot, record_op_success, refund_and_sweep, sweep, validate_op_hash_and_sweep,
};
