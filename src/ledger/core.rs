//! The ledger state and the operations that mutate it.

use std::collections::VecDeque;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    Error,
    ledger::domain::{
        Amount, OccurredAt, SavingsGoal, TOP_UP_LABEL, Transaction, TransactionCategory,
        TransactionId,
    },
};

/// Confirmation of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// The amount sent.
    pub amount: Decimal,
    /// The recipient with surrounding whitespace removed.
    pub recipient: String,
}

/// Confirmation of a completed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    /// The amount added.
    pub amount: Decimal,
}

/// A read-only copy of the ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    /// The money in the account.
    pub balance: Decimal,
    /// Most recent first.
    pub transactions: Vec<Transaction>,
    /// In the order they were created.
    pub savings_goals: Vec<SavingsGoal>,
}

/// The balance, transaction log and savings goals of the mock account.
///
/// Every operation either applies all of its changes or, if validation fails,
/// none of them. The balance never goes below zero.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: Decimal,
    transactions: VecDeque<Transaction>,
    savings_goals: Vec<SavingsGoal>,
    next_transaction_id: u64,
}

impl Ledger {
    /// Create a ledger with no history.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `opening_balance` is negative.
    pub fn new(opening_balance: Decimal) -> Result<Self, Error> {
        if opening_balance < Decimal::ZERO {
            return Err(Error::InvalidAmount(opening_balance.to_string()));
        }

        Ok(Self {
            balance: opening_balance,
            transactions: VecDeque::new(),
            savings_goals: Vec::new(),
            next_transaction_id: 1,
        })
    }

    /// The money currently in the account.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The transaction log, most recent first.
    pub fn transactions(&self) -> impl ExactSizeIterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// The savings goals in the order they were created.
    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.savings_goals
    }

    /// A copy of the balance, transaction log and savings goals.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            balance: self.balance,
            transactions: self.transactions.iter().cloned().collect(),
            savings_goals: self.savings_goals.clone(),
        }
    }

    /// Send `amount_text` to `recipient`.
    ///
    /// On success the balance is reduced and a debit is added to the front of
    /// the transaction log.
    ///
    /// # Errors
    ///
    /// The ledger is left unchanged and this function returns:
    /// - [Error::InvalidAmount] if `amount_text` is not a valid [Amount],
    /// - [Error::MissingField] if `recipient` is blank,
    /// - [Error::InsufficientFunds] if the amount is more than the balance.
    pub fn transfer(
        &mut self,
        recipient: &str,
        amount_text: &str,
    ) -> Result<TransferReceipt, Error> {
        let amount = Amount::parse(amount_text)?.value();
        let recipient = recipient.trim();

        if recipient.is_empty() {
            return Err(Error::MissingField("recipient"));
        }

        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.record(recipient, -amount, OccurredAt::Today, TransactionCategory::Transfer);
        tracing::info!("Transferred {amount} to {recipient}, balance is now {}", self.balance);

        Ok(TransferReceipt {
            amount,
            recipient: recipient.to_owned(),
        })
    }

    /// Add `amount_text` to the account.
    ///
    /// On success the balance is increased and a credit labelled
    /// [TOP_UP_LABEL] is added to the front of the transaction log.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] and leaves the ledger unchanged if
    /// `amount_text` is not a valid [Amount] or the new balance would not fit
    /// in a [Decimal].
    pub fn deposit(&mut self, amount_text: &str) -> Result<DepositReceipt, Error> {
        let amount = Amount::parse(amount_text)?.value();

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| Error::InvalidAmount(amount_text.trim().to_owned()))?;

        self.balance = new_balance;
        self.record(TOP_UP_LABEL, amount, OccurredAt::Today, TransactionCategory::TopUp);
        tracing::info!("Deposited {amount}, balance is now {}", self.balance);

        Ok(DepositReceipt { amount })
    }

    /// Start saving towards `target_text` under the name `name`.
    ///
    /// The new goal starts at zero and is added after the existing goals.
    ///
    /// # Errors
    ///
    /// The ledger is left unchanged and this function returns:
    /// - [Error::MissingField] if `name` is blank,
    /// - [Error::InvalidAmount] if `target_text` is not a valid [Amount].
    pub fn create_savings_goal(
        &mut self,
        name: &str,
        target_text: &str,
    ) -> Result<SavingsGoal, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::MissingField("name"));
        }

        let target_amount = Amount::parse(target_text)?.value();

        let goal = SavingsGoal {
            name: name.to_owned(),
            current_amount: Decimal::ZERO,
            target_amount,
        };
        self.savings_goals.push(goal.clone());
        tracing::info!("Created savings goal \"{name}\" with target {target_amount}");

        Ok(goal)
    }

    /// Add a transaction to the front of the log without touching the balance.
    pub(super) fn record(
        &mut self,
        counterparty: &str,
        amount: Decimal,
        occurred_at: OccurredAt,
        category: TransactionCategory,
    ) {
        let id = TransactionId(self.next_transaction_id);
        self.next_transaction_id += 1;

        self.transactions.push_front(Transaction {
            id,
            counterparty: counterparty.to_owned(),
            amount,
            occurred_at,
            category,
        });
    }

    pub(super) fn push_savings_goal(&mut self, goal: SavingsGoal) {
        self.savings_goals.push(goal);
    }
}
