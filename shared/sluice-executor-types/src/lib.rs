//! Shared types for the sluice executor: wire-level command model, call
//! descriptors, the host-access seam, and auditable events (engine/tooling).

pub mod calls;
pub mod commands;
pub mod events;
pub mod frame;
pub mod host;

pub use calls::{
    BatchDecodeError, BatchDispatcher, CallDescriptor, CallOutcome, DispatchFailure, ErrorPolicy,
};
pub use commands::{
    DataKind, HydrationCommand, HydrationProgram, ProgramEntry, SourceTag, ValueSource,
    CURSOR_ADVANCE_TAG,
};
pub use events::ExecutorEvent;
pub use frame::ExecutionFrame;
pub use host::{EphemeralStore, HostAccess, HostError};
