use crate::{
    quantity::{current::Amperes, power::Kilowatts, voltage::Volts},
    timelabel::TimeLabel,
};

/// One normalized per-interval reading across all monitored channels.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sample {
    /// `None` when the backend's label could not be interpreted.
    pub time: Option<TimeLabel>,

    pub solar_voltage: Volts,
    pub solar_current: Amperes,

    pub inverter_voltage: Volts,
    pub inverter_current: Amperes,

    pub grid_voltage: Volts,
    pub grid_current: Amperes,

    pub battery: BatteryReadings,
}

/// Battery channel readings, carried through without any correction.
///
/// Discharge current keeps its upstream sign convention, so derived battery
/// figures may legitimately be negative.
#[derive(Copy, Clone, Debug, Default)]
pub struct BatteryReadings {
    pub voltage: Volts,
    pub voltage_2: Volts,
    pub voltage_3: Volts,
    pub voltage_4: Volts,
    pub current: Amperes,
    pub charge_current: Amperes,
    pub discharge_current: Amperes,
}

/// A [`Sample`] after the correction rules, with the derived per-channel power.
#[derive(Copy, Clone, Debug)]
pub struct CorrectedSample {
    pub time: Option<TimeLabel>,

    pub solar_voltage: Volts,
    pub solar_current: Amperes,
    pub solar_power: Kilowatts,

    pub inverter_voltage: Volts,
    pub inverter_current: Amperes,
    pub inverter_power: Kilowatts,

    pub grid_voltage: Volts,
    pub grid_current: Amperes,
    pub grid_power: Kilowatts,

    pub battery: BatteryReadings,
}
