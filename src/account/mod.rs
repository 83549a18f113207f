mod core;
mod deposit_endpoint;
mod get_endpoint;
mod response;
mod withdraw_endpoint;

pub use core::Account;
pub use deposit_endpoint::deposit_endpoint;
pub use get_endpoint::get_account_endpoint;
pub use response::AccountResponse;
pub use withdraw_endpoint::withdraw_endpoint;
