mod abstraction_endpoint;
mod core;
mod inheritance_endpoint;
mod polymorphism_endpoint;

pub use abstraction_endpoint::get_abstraction;
pub use core::{Car, Motorcycle, Vehicle};
pub use inheritance_endpoint::get_inheritance;
pub use polymorphism_endpoint::get_polymorphism;
