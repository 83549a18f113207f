//! The API endpoints URIs.

/// The route reporting whether the server is up.
pub const HEALTH: &str = "/api/health";
/// The route that starts a car through the abstract vehicle interface.
pub const ABSTRACTION: &str = "/api/abstraction";
/// The route for depositing money into the account.
pub const DEPOSIT: &str = "/api/encapsulation/deposit";
/// The route for withdrawing money from the account.
pub const WITHDRAW: &str = "/api/encapsulation/withdraw";
/// The route for reading the account without changing it.
pub const ACCOUNT: &str = "/api/encapsulation/account";
/// The route that describes one vehicle of each variant.
pub const INHERITANCE: &str = "/api/inheritance";
/// The route that starts a mixed fleet of vehicles.
pub const POLYMORPHISM: &str = "/api/polymorphism";
