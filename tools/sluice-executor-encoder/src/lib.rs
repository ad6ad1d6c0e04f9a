//! Offline builder for hydration programs: turns typed commands into the
//! byte stream the engine's decoder consumes.

mod encoder;

pub use encoder::{encode_command, encode_program, placeholder_input};
