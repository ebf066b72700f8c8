//! The in-memory ledger for the single mock account: balance, transaction log and savings goals.

mod core;
mod domain;
mod seed;

pub use core::{DepositReceipt, Ledger, LedgerSnapshot, TransferReceipt};
pub use domain::{
    Amount, OccurredAt, SavingsGoal, TOP_UP_LABEL, Transaction, TransactionCategory,
    TransactionId,
};
pub use seed::{DEFAULT_OPENING_BALANCE, LedgerConfig};
