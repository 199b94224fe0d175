use std::fmt::{Display, Formatter};

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
pub struct Amperes(pub f64);

impl Amperes {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} A", self.0)
    }
}
