use std::fmt::{Display, Formatter};

/// Sampling interval: spacing between two consecutive readings.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct Minutes(pub f64);

impl Minutes {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Minutes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} min", self.0)
    }
}
