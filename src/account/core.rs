use rust_decimal::Decimal;

use crate::Error;

/// A bank account holding a non-negative amount of money.
///
/// The fields are private on purpose: the balance can only be changed through
/// [Account::deposit] and [Account::withdraw], which validate the amount and
/// keep the balance from ever going negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    code: String,
    owner: String,
    balance: Decimal,
}

impl Account {
    /// Create an account with an opening balance.
    ///
    /// # Errors
    /// This function will return an [Error::InvalidArgument] if
    /// `initial_balance` is negative.
    pub fn new(code: &str, owner: &str, initial_balance: Decimal) -> Result<Self, Error> {
        if initial_balance < Decimal::ZERO {
            return Err(Error::InvalidArgument(
                "the initial balance cannot be negative".to_owned(),
            ));
        }

        Ok(Self {
            code: code.to_owned(),
            owner: owner.to_owned(),
            balance: initial_balance,
        })
    }

    /// The code that identifies the account.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The name of the account holder.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The amount of money currently in the account.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount` to the balance.
    ///
    /// # Errors
    /// This function will return an [Error::InvalidArgument] if `amount` is
    /// zero or negative, or if adding it would overflow the balance. In both
    /// cases the balance is left unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidArgument(
                "the deposit amount must be greater than zero".to_owned(),
            ));
        }

        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            Error::InvalidArgument("the deposit amount is too large".to_owned())
        })?;

        Ok(())
    }

    /// Take `amount` out of the balance.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidArgument] if `amount` is zero or negative,
    /// - or [Error::InsufficientFunds] if `amount` is more than the balance.
    ///
    /// In both cases the balance is left unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidArgument(
                "the withdrawal amount must be greater than zero".to_owned(),
            ));
        }

        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            Error::InvalidArgument("the withdrawal amount is too large".to_owned())
        })?;

        Ok(())
    }
}



#[cfg(test)]
mod withdraw_tests {
    use rust_decimal_macros::dec;

    use crate::Error;

    use super::Account;

    fn get_test_account() -> Account {
        Account::new("PE01", "Bruce Wayne", dec!(100)).unwrap()
    }

    #[test]
    fn decreases_balance_by_amount() {
        let mut account = get_test_account();

        account.withdraw(dec!(30)).unwrap();

        assert_eq!(account.balance(), dec!(70));
    }

    #[test]
    fn allows_withdrawing_the_full_balance() {
        let mut account = get_test_account();

        account.withdraw(dec!(100)).unwrap();

        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn fails_on_zero_amount() {
        let mut account = get_test_account();

        let result = account.withdraw(dec!(0));

        assert_eq!(
            result,
            Err(Error::InvalidArgument(
                "the withdrawal amount must be greater than zero".to_owned()
            ))
        );
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn fails_on_negative_amount() {
        let mut account = get_test_account();

        let result = account.withdraw(dec!(-5));

        assert_eq!(
            result,
            Err(Error::InvalidArgument(
                "the withdrawal amount must be greater than zero".to_owned()
            ))
        );
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn fails_when_amount_exceeds_balance() {
        let mut account = get_test_account();

        let result = account.withdraw(dec!(100.01));

        assert_eq!(
            result,
            Err(Error::InsufficientFunds {
                requested: dec!(100.01),
                available: dec!(100),
            })
        );
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn keeps_balance_after_rejected_overdraw() {
        let mut account = get_test_account();

        account.deposit(dec!(50)).unwrap();
        assert_eq!(account.balance(), dec!(150));

        account.withdraw(dec!(30)).unwrap();
        assert_eq!(account.balance(), dec!(120));

        let result = account.withdraw(dec!(1000));

        assert_eq!(
            result,
            Err(Error::InsufficientFunds {
                requested: dec!(1000),
                available: dec!(120),
            })
        );
        assert_eq!(account.balance(), dec!(120));
    }
}
