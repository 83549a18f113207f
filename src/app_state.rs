//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::account::Account;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The bank account that the encapsulation endpoints operate on.
    ///
    /// The account is shared between request handlers, so access is
    /// serialised through a mutex to keep deposits and withdrawals from
    /// interleaving.
    pub account: Arc<Mutex<Account>>,
}

impl AppState {
    /// Create a new [AppState] that serves `account`.
    pub fn new(account: Account) -> Self {
        Self {
            account: Arc::new(Mutex::new(account)),
        }
    }
}
