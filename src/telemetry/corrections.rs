use crate::{
    quantity::{current::Amperes, voltage::Volts},
    telemetry::sample::{CorrectedSample, Sample},
    timelabel::NightWindow,
};

/// Per-sample correction rules applied before integration.
///
/// The defaults mirror the deployed sensors: solar readings outside
/// 05:30–19:00 are noise, and AC readings below 50 V mean the source is
/// disconnected. Neither threshold has a documented derivation, so they stay
/// overridable rather than hardcoded.
#[derive(Copy, Clone, Debug, bon::Builder)]
pub struct Corrections {
    #[builder(default)]
    pub night: NightWindow,

    /// AC channels (inverter and grid) strictly below this voltage are zeroed.
    #[builder(default = Volts(50.0))]
    pub min_ac_voltage: Volts,

    /// When the corrected solar voltage is within this band around zero,
    /// solar current is zeroed too, so a collapsed voltage never accumulates
    /// energy from a lingering current reading.
    #[builder(default = Volts::ZERO)]
    pub solar_voltage_epsilon: Volts,
}

impl Default for Corrections {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Corrections {
    /// Apply the rules to one sample and derive per-channel power.
    ///
    /// Rule order matters: night suppression first, then the zero-voltage
    /// floor on the already-suppressed solar voltage, then the independent
    /// AC clamps. Battery readings pass through untouched.
    pub fn apply(self, sample: &Sample) -> CorrectedSample {
        let night = sample.time.is_some_and(|time| time.is_night(self.night));

        let solar_voltage = if night { Volts::ZERO } else { sample.solar_voltage };
        let mut solar_current = if night { Amperes::ZERO } else { sample.solar_current };
        if solar_voltage.abs() <= self.solar_voltage_epsilon {
            solar_current = Amperes::ZERO;
        }

        let (inverter_voltage, inverter_current) =
            clamp_ac(sample.inverter_voltage, sample.inverter_current, self.min_ac_voltage);
        let (grid_voltage, grid_current) =
            clamp_ac(sample.grid_voltage, sample.grid_current, self.min_ac_voltage);

        CorrectedSample {
            time: sample.time,
            solar_voltage,
            solar_current,
            solar_power: solar_voltage * solar_current,
            inverter_voltage,
            inverter_current,
            inverter_power: inverter_voltage * inverter_current,
            grid_voltage,
            grid_current,
            grid_power: grid_voltage * grid_current,
            battery: sample.battery,
        }
    }
}

fn clamp_ac(voltage: Volts, current: Amperes, min: Volts) -> (Volts, Amperes) {
    if voltage < min { (Volts::ZERO, Amperes::ZERO) } else { (voltage, current) }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::timelabel::TimeLabel;

    fn at(label: &str) -> Option<TimeLabel> {
        Some(label.parse().unwrap())
    }

    #[test]
    fn test_night_suppresses_solar() {
        let sample = Sample {
            time: at("22:00"),
            solar_voltage: Volts(18.0),
            solar_current: Amperes(4.0),
            ..Sample::default()
        };
        let corrected = Corrections::default().apply(&sample);
        assert_eq!(corrected.solar_voltage, Volts::ZERO);
        assert_eq!(corrected.solar_current, Amperes::ZERO);
        assert_eq!(corrected.solar_power, crate::quantity::power::Kilowatts::ZERO);
    }

    #[test]
    fn test_daytime_solar_passes_through() {
        let sample = Sample {
            time: at("12:00"),
            solar_voltage: Volts(20.0),
            solar_current: Amperes(5.0),
            ..Sample::default()
        };
        let corrected = Corrections::default().apply(&sample);
        assert_eq!(corrected.solar_voltage, Volts(20.0));
        assert_abs_diff_eq!(corrected.solar_power.0, 0.1);
    }

    #[test]
    fn test_unlabeled_sample_is_not_night() {
        let sample =
            Sample { time: None, solar_voltage: Volts(20.0), ..Sample::default() };
        assert_eq!(Corrections::default().apply(&sample).solar_voltage, Volts(20.0));
    }

    #[test]
    fn test_zero_voltage_floors_solar_current() {
        let sample = Sample {
            time: at("12:00"),
            solar_voltage: Volts(0.0),
            solar_current: Amperes(3.0),
            ..Sample::default()
        };
        assert_eq!(Corrections::default().apply(&sample).solar_current, Amperes::ZERO);
    }

    #[test]
    fn test_epsilon_widens_the_floor() {
        let corrections = Corrections::builder().solar_voltage_epsilon(Volts(0.2)).build();
        let sample = Sample {
            time: at("12:00"),
            solar_voltage: Volts(-0.1),
            solar_current: Amperes(3.0),
            ..Sample::default()
        };
        assert_eq!(corrections.apply(&sample).solar_current, Amperes::ZERO);
    }

    #[test]
    fn test_under_voltage_clamps_each_ac_channel_independently() {
        let sample = Sample {
            time: at("12:00"),
            inverter_voltage: Volts(49.9),
            inverter_current: Amperes(2.0),
            grid_voltage: Volts(230.0),
            grid_current: Amperes(1.0),
            ..Sample::default()
        };
        let corrected = Corrections::default().apply(&sample);
        assert_eq!(corrected.inverter_voltage, Volts::ZERO);
        assert_eq!(corrected.inverter_current, Amperes::ZERO);
        assert_eq!(corrected.grid_voltage, Volts(230.0));
        assert_abs_diff_eq!(corrected.grid_power.0, 0.23);
    }

    #[test]
    fn test_exactly_fifty_volts_is_not_clamped() {
        let sample = Sample {
            time: at("12:00"),
            grid_voltage: Volts(50.0),
            grid_current: Amperes(2.0),
            ..Sample::default()
        };
        assert_eq!(Corrections::default().apply(&sample).grid_voltage, Volts(50.0));
    }

    #[test]
    fn test_battery_passes_through_at_night() {
        let sample = Sample {
            time: at("23:00"),
            battery: crate::telemetry::BatteryReadings {
                voltage: Volts(12.6),
                discharge_current: Amperes(-8.0),
                ..Default::default()
            },
            ..Sample::default()
        };
        let corrected = Corrections::default().apply(&sample);
        assert_eq!(corrected.battery.voltage, Volts(12.6));
        assert_eq!(corrected.battery.discharge_current, Amperes(-8.0));
    }
}
