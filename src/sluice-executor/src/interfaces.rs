//! Solidity ABI surface of the fungible-asset standard that host
//! implementations speak when sampling balances and moving assets.
//!
//! Note: the engine itself never encodes these calls (chain access goes
//! through `HostAccess`), but having them around makes the ABI expectations
//! explicit and gives on-chain hosts ready-made call encodings.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

sol! {
    interface IFungibleAsset {
        function balanceOf(address holder) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
    }
}

/// Encoded `balanceOf(holder)` call input.
pub fn balance_of_input(holder: Address) -> Vec<u8> {
    IFungibleAsset::balanceOfCall { holder }.abi_encode()
}

/// Encoded `allowance(owner, spender)` call input.
pub fn allowance_input(owner: Address, spender: Address) -> Vec<u8> {
    IFungibleAsset::allowanceCall { owner, spender }.abi_encode()
}

/// Encoded `transfer(to, amount)` call input.
pub fn transfer_input(to: Address, amount: U256) -> Vec<u8> {
    IFungibleAsset::transferCall { to, amount }.abi_encode()
}

/// Encoded `transferFrom(from, to, amount)` call input.
pub fn transfer_from_input(from: Address, to: Address, amount: U256) -> Vec<u8> {
    IFungibleAsset::transferFromCall { from, to, amount }.abi_encode()
}
