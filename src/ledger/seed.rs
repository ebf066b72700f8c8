//! Starting state for a new session.

use rust_decimal::Decimal;
use time::macros::date;

use crate::{
    Error,
    ledger::{
        Ledger,
        domain::{OccurredAt, SavingsGoal, TransactionCategory},
    },
};

/// The balance a new session starts with unless configured otherwise.
pub const DEFAULT_OPENING_BALANCE: Decimal = Decimal::from_parts(12_585_050, 0, 0, false, 2);

/// How to set up the ledger when the server starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// The balance before any transfers or deposits.
    pub opening_balance: Decimal,
    /// Whether to start with the demo savings goals and transaction history.
    pub demo_data: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            opening_balance: DEFAULT_OPENING_BALANCE,
            demo_data: true,
        }
    }
}

impl Ledger {
    /// Create the ledger described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if the opening balance is negative.
    pub fn from_config(config: &LedgerConfig) -> Result<Self, Error> {
        let mut ledger = Ledger::new(config.opening_balance)?;

        if config.demo_data {
            ledger.add_demo_data();
        }

        Ok(ledger)
    }

    /// Create a ledger with the default opening balance and demo data.
    #[cfg(test)]
    pub(crate) fn demo() -> Self {
        let mut ledger = Ledger::new(DEFAULT_OPENING_BALANCE)
            .expect("default opening balance should not be negative");
        ledger.add_demo_data();
        ledger
    }

    fn add_demo_data(&mut self) {
        // Recorded oldest first so the log reads Groceries, Salary, Cafe.
        self.record(
            "Cafe",
            Decimal::from(-1200),
            OccurredAt::On(date!(2025 - 12 - 02)),
            TransactionCategory::Cafe,
        );
        self.record(
            "Salary",
            Decimal::from(85_000),
            OccurredAt::On(date!(2025 - 12 - 01)),
            TransactionCategory::Salary,
        );
        self.record(
            "Groceries",
            Decimal::from(-3500),
            OccurredAt::On(date!(2025 - 12 - 03)),
            TransactionCategory::Groceries,
        );

        self.push_savings_goal(SavingsGoal {
            name: "Vacation 2026".to_owned(),
            current_amount: Decimal::from(85_000),
            target_amount: Decimal::from(150_000),
        });
        self.push_savings_goal(SavingsGoal {
            name: "New gadget".to_owned(),
            current_amount: Decimal::from(42_000),
            target_amount: Decimal::from(80_000),
        });
    }
}
