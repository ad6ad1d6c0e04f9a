use alloy_primitives::{Address, FixedBytes, U256};

/// Auditable events the engine records through the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutorEvent {
    /// Residual balance moved (or measured as zero) during settlement.
    Sweep {
        asset: Address,
        recipient: Address,
        amount: U256,
    },
    /// Refund leg of a refund-and-sweep.
    Refund {
        asset: Address,
        recipient: Address,
        amount: U256,
    },
    /// The requested refund exceeded the available balance.
    ActualRefund {
        asset: Address,
        recipient: Address,
        requested: U256,
        actual: U256,
    },
    /// Summary of a completed refund-and-sweep.
    RefundAndSweep {
        asset: Address,
        refund_recipient: Address,
        refund_cap: U256,
        sweep_recipient: Address,
        refunded: U256,
        swept: U256,
    },
    /// A live balance was spliced over a placeholder and the prepared call
    /// dispatched.
    BalanceInjected {
        asset: Address,
        target: Address,
        placeholder: FixedBytes<32>,
        amount: U256,
        offset: usize,
        success: bool,
        result_data: Vec<u8>,
    },
}
