use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{energy::KilowattHours, minutes::Minutes};

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
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
)]
pub struct Kilowatts(pub f64);

impl Kilowatts {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kW", self.0)
    }
}

impl Mul<Minutes> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Minutes) -> Self::Output {
        KilowattHours(self.0 * rhs.0 / 60.0)
    }
}
