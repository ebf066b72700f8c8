//! Core ledger domain types.

use std::{fmt::Display, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Serialize;
use time::Date;

use crate::Error;

/// The counterparty label recorded for deposits.
pub const TOP_UP_LABEL: &str = "Account top-up";

/// The number of fractional digits an amount may have (kopecks).
const MAX_FRACTIONAL_DIGITS: u32 = 2;

/// A validated, strictly positive amount of money with at most two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `value` is zero,
    /// negative or has more than two decimal places.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value <= Decimal::ZERO || value.normalize().scale() > MAX_FRACTIONAL_DIGITS {
            return Err(Error::InvalidAmount(value.to_string()));
        }

        Ok(Self(value.normalize()))
    }

    /// Parse an amount typed in by the user.
    ///
    /// Surrounding whitespace and spaces used as thousands separators are
    /// ignored, and either '.' or ',' may be used as the decimal separator,
    /// e.g. "1 000,50" is parsed as 1000.50.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `text` is not a
    /// plain decimal number, has more digits than can be stored exactly, or is
    /// not a valid amount according to [Amount::new].
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.trim();
        let normalized: String = text
            .chars()
            .filter(|c| !is_group_separator(*c))
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        // The decimal parser would accept these.
        if normalized.starts_with('+') || normalized.contains('_') {
            return Err(Error::InvalidAmount(text.to_owned()));
        }

        let value = Decimal::from_str_exact(&normalized)
            .map_err(|_| Error::InvalidAmount(text.to_owned()))?;

        Self::new(value).map_err(|_| Error::InvalidAmount(text.to_owned()))
    }

    /// The amount as a decimal number.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_group_separator(c: char) -> bool {
    // Regular, no-break and narrow no-break spaces.
    matches!(c, ' ' | '\u{a0}' | '\u{202f}')
}

/// Sequence number for a transaction, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TransactionId(pub(super) u64);

impl TransactionId {
    /// The raw sequence number.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// When a transaction happened, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "date")]
pub enum OccurredAt {
    /// Created during the current session.
    Today,
    /// A transaction from before the session started.
    On(Date),
}

/// What a transaction was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum TransactionCategory {
    Groceries,
    Salary,
    Cafe,
    /// Money sent to another person.
    Transfer,
    /// Money added to the account.
    TopUp,
}

/// An entry in the transaction log. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Unique within the session.
    pub id: TransactionId,
    /// The recipient for outgoing money, or the source for incoming money.
    pub counterparty: String,
    /// Negative for debits, positive for credits.
    pub amount: Decimal,
    /// When the transaction happened.
    pub occurred_at: OccurredAt,
    /// What the money was for, which decides the icon.
    pub category: TransactionCategory,
}

impl Transaction {
    /// Whether the transaction added money to the account.
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// A named amount of money the user is saving towards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsGoal {
    /// What the user is saving for.
    pub name: String,
    /// The amount saved so far.
    pub current_amount: Decimal,
    /// The amount the user wants to reach.
    pub target_amount: Decimal,
}

impl SavingsGoal {
    /// Progress towards the target as a whole percentage, clamped to 0-100.
    ///
    /// The stored amounts are not clamped, only the value for display.
    pub fn progress_percent(&self) -> u8 {
        if self.target_amount <= Decimal::ZERO {
            return 0;
        }

        let percent = (self.current_amount / self.target_amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        percent
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or(0)
    }
}
