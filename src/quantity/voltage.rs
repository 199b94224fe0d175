use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{current::Amperes, power::Kilowatts};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
)]
pub struct Volts(pub f64);

impl Volts {
    pub const ZERO: Self = Self(0.0);

    pub const fn abs(mut self) -> Self {
        self.0 = self.0.abs();
        self
    }
}

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} V", self.0)
    }
}

impl Mul<Amperes> for Volts {
    type Output = Kilowatts;

    fn mul(self, rhs: Amperes) -> Self::Output {
        Kilowatts(self.0 * rhs.0 / 1000.0)
    }
}
