use alloy_primitives::Address;

use sluice_executor_types::{
    DataKind, HydrationCommand, HydrationProgram, ProgramEntry, SourceTag, ValueSource,
    CURSOR_ADVANCE_TAG,
};

use crate::errors::DecodeError;

const MAX_COMMANDS_DEFAULT: usize = 64;

/// Decode program bytes into bounded entries.
pub fn decode_program(bytes: &[u8]) -> Result<HydrationProgram, DecodeError> {
    decode_program_with_limit(bytes, MAX_COMMANDS_DEFAULT)
}

pub fn decode_program_with_limit(
    bytes: &[u8],
    max_commands: usize,
) -> Result<HydrationProgram, DecodeError> {
    let mut i = 0usize;
    let initial_call_index = read_u8(bytes, &mut i)?;

    let mut entries = Vec::new();
    while i < bytes.len() {
        if entries.len() >= max_commands {
            return Err(DecodeError::TooManyCommands);
        }
        let tag = bytes[i];
        i += 1;

        if tag == CURSOR_ADVANCE_TAG {
            let call_index = read_u8(bytes, &mut i)?;
            entries.push(ProgramEntry::AdvanceCursor { call_index });
            continue;
        }

        // Bottom nibble first: an invalid source aborts even when the kind
        // nibble is also out of range.
        let source_nibble = tag & 0x0f;
        let kind_nibble = tag >> 4;
        let source_tag = SourceTag::try_from(source_nibble)
            .map_err(|_| DecodeError::UnknownValueSource(source_nibble))?;
        let kind =
            DataKind::try_from(kind_nibble).map_err(|_| DecodeError::UnknownDataKind(kind_nibble))?;
        let source = read_source(bytes, &mut i, source_tag)?;

        let command = match kind {
            DataKind::AccountId => {
                let offset = read_u16(bytes, &mut i)?;
                HydrationCommand::AccountId { source, offset }
            }
            DataKind::NativeBalance => {
                let offset = read_u16(bytes, &mut i)?;
                HydrationCommand::NativeBalance { source, offset }
            }
            DataKind::AssetBalance => {
                let asset = read_address(bytes, &mut i)?;
                let offset = read_u16(bytes, &mut i)?;
                HydrationCommand::AssetBalance { asset, holder: source, offset }
            }
            DataKind::AssetAllowance => {
                let asset = read_address(bytes, &mut i)?;
                let spender_byte = read_u8(bytes, &mut i)?;
                let spender_tag = SourceTag::try_from(spender_byte)
                    .map_err(|_| DecodeError::UnknownValueSource(spender_byte))?;
                let spender = read_source(bytes, &mut i, spender_tag)?;
                let offset = read_u16(bytes, &mut i)?;
                HydrationCommand::AssetAllowance { asset, owner: source, spender, offset }
            }
            DataKind::CallTarget => HydrationCommand::CallTarget { source },
            DataKind::CallValue => HydrationCommand::CallValue { source },
        };

        entries.push(ProgramEntry::Patch(command));
    }

    Ok(HydrationProgram { initial_call_index, entries })
}

fn read_source(bytes: &[u8], i: &mut usize, tag: SourceTag) -> Result<ValueSource, DecodeError> {
    let source = match tag {
        SourceTag::This => ValueSource::This,
        SourceTag::Caller => ValueSource::Caller,
        SourceTag::Origin => ValueSource::Origin,
        SourceTag::Explicit => ValueSource::Explicit(read_address(bytes, i)?),
    };
    Ok(source)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8, DecodeError> {
    if bytes.len() <= *i {
        return Err(DecodeError::Truncated);
    }
    let b = bytes[*i];
    *i += 1;
    Ok(b)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16, DecodeError> {
    if bytes.len() < *i + 2 {
        return Err(DecodeError::Truncated);
    }
    let mut buf = [0u8; 2];
    buf.copy_from_slice(&bytes[*i..*i + 2]);
    *i += 2;
    Ok(u16::from_be_bytes(buf))
}

fn read_address(bytes: &[u8], i: &mut usize) -> Result<Address, DecodeError> {
    if bytes.len() < *i + 20 {
        return Err(DecodeError::Truncated);
    }
    let addr = Address::from_slice(&bytes[*i..*i + 20]);
    *i += 20;
    Ok(addr)
}
