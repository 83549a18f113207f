//! Defines the JSON view of the account returned by the account endpoints.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// The JSON body describing the state of an account.
///
/// The balance is serialised as a decimal string so that cent amounts stay
/// exact on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    /// The code that identifies the account.
    pub code: String,
    /// The name of the account holder.
    pub owner: String,
    /// The amount of money currently in the account.
    pub balance: Decimal,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            code: account.code().to_owned(),
            owner: account.owner().to_owned(),
            balance: account.balance(),
        }
    }
}
