//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{
    Error,
    ledger::{Ledger, LedgerConfig},
};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The account ledger shared by every request.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] with a ledger built from `config`.
    ///
    /// # Errors
    /// Returns an error if the opening balance in `config` is negative.
    pub fn new(config: &LedgerConfig) -> Result<Self, Error> {
        let ledger = Ledger::from_config(config)?;

        Ok(Self {
            ledger: Arc::new(Mutex::new(ledger)),
        })
    }
}

/// The state needed by pages and endpoints that read or change the ledger.
#[derive(Debug, Clone)]
pub struct LedgerState {
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}
