use alloy_primitives::Address;

/// Wire tag of a cursor-advance entry. Never a valid command byte: a command
/// byte always carries a non-zero data-kind nibble.
pub const CURSOR_ADVANCE_TAG: u8 = 0x00;

/// Accounts a command can resolve a value against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueSource {
    /// The executing account (the storage owner of the current frame).
    This,
    /// The immediate invoker of the current frame.
    Caller,
    /// The top-level transaction initiator.
    Origin,
    /// An account embedded in the program as a 20-byte operand.
    Explicit(Address),
}

/// Bottom-nibble value-source tags of the command byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SourceTag {
    This = 0x0,
    Caller = 0x1,
    Origin = 0x2,
    Explicit = 0x3,
}

/// Top-nibble data-kind tags of the command byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DataKind {
    AccountId = 0x1,
    NativeBalance = 0x2,
    AssetBalance = 0x3,
    AssetAllowance = 0x4,
    CallTarget = 0x5,
    CallValue = 0x6,
}

impl TryFrom<u8> for SourceTag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use SourceTag::*;
        let tag = match value {
            0x0 => This,
            0x1 => Caller,
            0x2 => Origin,
            0x3 => Explicit,
            _ => return Err(()),
        };
        Ok(tag)
    }
}

impl TryFrom<u8> for DataKind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use DataKind::*;
        let kind = match value {
            0x1 => AccountId,
            0x2 => NativeBalance,
            0x3 => AssetBalance,
            0x4 => AssetAllowance,
            0x5 => CallTarget,
            0x6 => CallValue,
            _ => return Err(()),
        };
        Ok(kind)
    }
}

/// Decoded representation of a single hydration command.
///
/// The four buffer-writing kinds carry a write offset into the current call's
/// input; `CallTarget` and `CallValue` assign the descriptor field directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydrationCommand {
    AccountId { source: ValueSource, offset: u16 },
    NativeBalance { source: ValueSource, offset: u16 },
    AssetBalance {
        asset: Address,
        holder: ValueSource,
        offset: u16,
    },
    AssetAllowance {
        asset: Address,
        owner: ValueSource,
        spender: ValueSource,
        offset: u16,
    },
    CallTarget { source: ValueSource },
    CallValue { source: ValueSource },
}

impl HydrationCommand {
    /// Data kind encoded in the command's top nibble.
    pub fn kind(&self) -> DataKind {
        match self {
            HydrationCommand::AccountId { .. } => DataKind::AccountId,
            HydrationCommand::NativeBalance { .. } => DataKind::NativeBalance,
            HydrationCommand::AssetBalance { .. } => DataKind::AssetBalance,
            HydrationCommand::AssetAllowance { .. } => DataKind::AssetAllowance,
            HydrationCommand::CallTarget { .. } => DataKind::CallTarget,
            HydrationCommand::CallValue { .. } => DataKind::CallValue,
        }
    }

    /// Value source encoded in the command's bottom nibble (the owner source
    /// for allowance commands; the spender source is a separate operand).
    pub fn source(&self) -> ValueSource {
        match *self {
            HydrationCommand::AccountId { source, .. }
            | HydrationCommand::NativeBalance { source, .. }
            | HydrationCommand::CallTarget { source }
            | HydrationCommand::CallValue { source } => source,
            HydrationCommand::AssetBalance { holder, .. } => holder,
            HydrationCommand::AssetAllowance { owner, .. } => owner,
        }
    }

    /// Width of the in-place overwrite, or `None` for direct field writes.
    pub fn patch_width(&self) -> Option<usize> {
        match self {
            HydrationCommand::AccountId { .. } => Some(20),
            HydrationCommand::NativeBalance { .. }
            | HydrationCommand::AssetBalance { .. }
            | HydrationCommand::AssetAllowance { .. } => Some(32),
            HydrationCommand::CallTarget { .. } | HydrationCommand::CallValue { .. } => None,
        }
    }
}

impl ValueSource {
    /// Wire tag for this source.
    pub fn tag(&self) -> SourceTag {
        match self {
            ValueSource::This => SourceTag::This,
            ValueSource::Caller => SourceTag::Caller,
            ValueSource::Origin => SourceTag::Origin,
            ValueSource::Explicit(_) => SourceTag::Explicit,
        }
    }
}

/// One entry of a hydration program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgramEntry {
    /// Repoint the interpreter at another call of the batch.
    AdvanceCursor { call_index: u8 },
    /// Sample a value and splice it into the current call.
    Patch(HydrationCommand),
}

/// A decoded hydration program: the leading call index plus its entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HydrationProgram {
    pub initial_call_index: u8,
    pub entries: Vec<ProgramEntry>,
}
