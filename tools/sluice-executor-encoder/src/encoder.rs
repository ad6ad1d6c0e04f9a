use alloy_primitives::FixedBytes;

use sluice_executor_types::{
    DataKind, HydrationCommand, HydrationProgram, ProgramEntry, ValueSource, CURSOR_ADVANCE_TAG,
};

/// Encode a program into decoder wire bytes.
pub fn encode_program(program: &HydrationProgram) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(program.initial_call_index);
    for entry in &program.entries {
        match entry {
            ProgramEntry::AdvanceCursor { call_index } => {
                buf.push(CURSOR_ADVANCE_TAG);
                buf.push(*call_index);
            }
            ProgramEntry::Patch(command) => encode_command(&mut buf, command),
        }
    }
    buf
}

/// Append one command: tag byte, then operands in decoder order (explicit
/// source account, asset, spender, write offset).
pub fn encode_command(buf: &mut Vec<u8>, command: &HydrationCommand) {
    push_tag(buf, command.kind(), &command.source());
    push_source_operand(buf, &command.source());
    match command {
        HydrationCommand::AccountId { offset, .. }
        | HydrationCommand::NativeBalance { offset, .. } => {
            buf.extend_from_slice(&offset.to_be_bytes());
        }
        HydrationCommand::AssetBalance { asset, offset, .. } => {
            buf.extend_from_slice(asset.as_slice());
            buf.extend_from_slice(&offset.to_be_bytes());
        }
        HydrationCommand::AssetAllowance { asset, spender, offset, .. } => {
            buf.extend_from_slice(asset.as_slice());
            buf.push(spender.tag() as u8);
            push_source_operand(buf, spender);
            buf.extend_from_slice(&offset.to_be_bytes());
        }
        HydrationCommand::CallTarget { .. } | HydrationCommand::CallValue { .. } => {}
    }
}

/// Build a zeroed input buffer of `len` bytes carrying `placeholder` at
/// `offset`, ready for the single-slot injector.
pub fn placeholder_input(len: usize, offset: usize, placeholder: FixedBytes<32>) -> Vec<u8> {
    assert!(offset + 32 <= len, "placeholder must lie inside the buffer");
    let mut input = vec![0u8; len];
    input[offset..offset + 32].copy_from_slice(placeholder.as_slice());
    input
}

fn push_tag(buf: &mut Vec<u8>, kind: DataKind, source: &ValueSource) {
    buf.push(((kind as u8) << 4) | (source.tag() as u8));
}

fn push_source_operand(buf: &mut Vec<u8>, source: &ValueSource) {
    if let ValueSource::Explicit(account) = source {
        buf.extend_from_slice(account.as_slice());
    }
}
