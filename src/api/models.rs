use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

use crate::{
    quantity::{current::Amperes, energy::KilowattHours, voltage::Volts},
    telemetry::{BatteryReadings, Sample},
    timelabel::TimeLabel,
};

/// Lenient number: the backend interchangeably sends numbers, numeric
/// strings, nulls, or nothing at all for the same field. Anything that is not
/// a number ends up as zero.
type Lenient = DefaultOnError<PickFirst<(serde_with::Same, DisplayFromStr)>>;

/// Payload of both `admin/date` and `admin/db`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DayData {
    #[serde(rename = "dataCharts")]
    pub charts: Vec<ChartPoint>,

    /// Backend-side solar total for the day.
    #[serde(rename = "p1ValueTot")]
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(serde_with::Same, DisplayFromStr)>>>")]
    pub reported_solar: Option<KilowattHours>,

    /// Backend-side grid total for the day.
    #[serde(rename = "p2ValueTot")]
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(serde_with::Same, DisplayFromStr)>>>")]
    pub reported_grid: Option<KilowattHours>,

    /// Backend-side load total for the day.
    #[serde(rename = "p3ValueTot")]
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(serde_with::Same, DisplayFromStr)>>>")]
    pub reported_load: Option<KilowattHours>,

    /// Present on the live endpoint only.
    pub snapshot: Option<Snapshot>,
}

/// One raw chart point, with the backend's wire field names.
///
/// This is the single place where the wire casing is mapped; everything
/// downstream works on [`Sample`].
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChartPoint {
    #[serde(rename = "ccAxisXValue")]
    pub time: serde_json::Value,

    #[serde(rename = "SolarVoltage")]
    #[serde_as(as = "Lenient")]
    pub solar_voltage: f64,

    #[serde(rename = "SolarCurrent")]
    #[serde_as(as = "Lenient")]
    pub solar_current: f64,

    #[serde(rename = "InverterVoltage")]
    #[serde_as(as = "Lenient")]
    pub inverter_voltage: f64,

    #[serde(rename = "InverterCurrent")]
    #[serde_as(as = "Lenient")]
    pub inverter_current: f64,

    #[serde(rename = "GridVoltage")]
    #[serde_as(as = "Lenient")]
    pub grid_voltage: f64,

    #[serde(rename = "GridCurrent")]
    #[serde_as(as = "Lenient")]
    pub grid_current: f64,

    #[serde(rename = "BatteryVoltage")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage: f64,

    #[serde(rename = "BatteryVoltage2")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage_2: f64,

    #[serde(rename = "BatteryVoltage3")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage_3: f64,

    #[serde(rename = "BatteryVoltage4")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage_4: f64,

    #[serde(rename = "BatteryCurrent")]
    #[serde_as(as = "Lenient")]
    pub battery_current: f64,

    #[serde(rename = "BatteryChrgCurrent")]
    #[serde_as(as = "Lenient")]
    pub battery_charge_current: f64,

    #[serde(rename = "BatteryDisCurrent")]
    #[serde_as(as = "Lenient")]
    pub battery_discharge_current: f64,
}

impl From<&ChartPoint> for Sample {
    fn from(point: &ChartPoint) -> Self {
        Self {
            time: TimeLabel::from_json_value(&point.time),
            solar_voltage: Volts(point.solar_voltage),
            solar_current: Amperes(point.solar_current),
            inverter_voltage: Volts(point.inverter_voltage),
            inverter_current: Amperes(point.inverter_current),
            grid_voltage: Volts(point.grid_voltage),
            grid_current: Amperes(point.grid_current),
            battery: BatteryReadings {
                voltage: Volts(point.battery_voltage),
                voltage_2: Volts(point.battery_voltage_2),
                voltage_3: Volts(point.battery_voltage_3),
                voltage_4: Volts(point.battery_voltage_4),
                current: Amperes(point.battery_current),
                charge_current: Amperes(point.battery_charge_current),
                discharge_current: Amperes(point.battery_discharge_current),
            },
        }
    }
}

/// Instantaneous readings reported by the live endpoint.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Last update, epoch seconds.
    #[serde(rename = "tValue")]
    #[serde_as(as = "DefaultOnError<PickFirst<(serde_with::Same, DisplayFromStr)>>")]
    pub updated_at: i64,

    #[serde(rename = "batteryVoltage")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage: f64,

    #[serde(rename = "batteryVoltage2")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage_2: f64,

    #[serde(rename = "batteryVoltage3")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage_3: f64,

    #[serde(rename = "batteryVoltage4")]
    #[serde_as(as = "Lenient")]
    pub battery_voltage_4: f64,

    #[serde(rename = "batteryCurrent")]
    #[serde_as(as = "Lenient")]
    pub battery_current: f64,
}
