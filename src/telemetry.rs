mod accumulate;
mod corrections;
mod sample;

pub use self::{
    accumulate::{DayEnergy, accumulate},
    corrections::Corrections,
    sample::{BatteryReadings, CorrectedSample, Sample},
};
