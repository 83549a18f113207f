/// The behaviour shared by every vehicle.
///
/// Each variant reports its own start procedure. Variants that do not
/// override [Vehicle::describe] fall back to a generic description built
/// from the brand.
pub trait Vehicle {
    /// The brand of the vehicle, e.g. "Toyota".
    fn brand(&self) -> &str;

    /// Start the vehicle, reporting how its engine was started.
    fn start(&self) -> String;

    /// Describe the vehicle in one sentence.
    fn describe(&self) -> String {
        format!("Generic vehicle of brand {}.", self.brand())
    }
}

/// A car of a given brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    brand: String,
}

impl Car {
    /// Create a car of `brand`. Any brand is accepted, even an empty one.
    pub fn new(brand: &str) -> Self {
        Self {
            brand: brand.to_owned(),
        }
    }
}

impl Vehicle for Car {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn start(&self) -> String {
        format!("Car {}: engine started (key or button).", self.brand)
    }

    fn describe(&self) -> String {
        format!("Car of brand {}.", self.brand)
    }
}

/// A motorcycle of a given brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    brand: String,
}

impl Motorcycle {
    /// Create a motorcycle of `brand`. Any brand is accepted, even an empty
    /// one.
    pub fn new(brand: &str) -> Self {
        Self {
            brand: brand.to_owned(),
        }
    }
}

impl Vehicle for Motorcycle {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn start(&self) -> String {
        format!(
            "Motorcycle {}: engine started (kick-start or switch).",
            self.brand
        )
    }

    fn describe(&self) -> String {
        format!("Motorcycle of brand {}.", self.brand)
    }
}


#[cfg(test)]
mod motorcycle_tests {
    use super::{Motorcycle, Vehicle};

    #[test]
    fn starts_with_kick_start_or_switch() {
        let motorcycle = Motorcycle::new("Honda");

        assert_eq!(
            motorcycle.start(),
            "Motorcycle Honda: engine started (kick-start or switch)."
        );
    }

    #[test]
    fn describes_itself() {
        let motorcycle = Motorcycle::new("Yamaha");

        assert_eq!(motorcycle.describe(), "Motorcycle of brand Yamaha.");
    }

    #[test]
    fn accepts_empty_brand() {
        let motorcycle = Motorcycle::new("");

        assert_eq!(motorcycle.brand(), "");
        assert_eq!(motorcycle.describe(), "Motorcycle of brand .");
    }
}

#[cfg(test)]
mod describe_default_tests {
    use super::Vehicle;

    /// A variant that only implements the required methods, so that the
    /// trait's fallback description is the one that answers.
    struct Skateboard {
        brand: String,
    }

    impl Vehicle for Skateboard {
        fn brand(&self) -> &str {
            &self.brand
        }

        fn start(&self) -> String {
            format!("Skateboard {}: pushed off.", self.brand)
        }
    }

    #[test]
    fn falls_back_to_generic_description() {
        let skateboard = Skateboard {
            brand: "Santa Cruz".to_owned(),
        };

        assert_eq!(
            skateboard.describe(),
            "Generic vehicle of brand Santa Cruz."
        );
    }
}
