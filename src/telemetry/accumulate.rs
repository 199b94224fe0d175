use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    prelude::*,
    quantity::{energy::KilowattHours, minutes::Minutes},
    telemetry::{
        corrections::Corrections,
        sample::{CorrectedSample, Sample},
    },
};

/// Accumulated energy per channel, plus the corrected series it was derived
/// from, for rendering.
#[derive(Debug)]
pub struct DayEnergy {
    pub solar: KilowattHours,
    pub inverter: KilowattHours,
    pub grid: KilowattHours,
    pub series: Vec<CorrectedSample>,
}

impl DayEnergy {
    pub fn peak_solar(&self) -> Option<&CorrectedSample> {
        self.series.iter().max_by_key(|sample| OrderedFloat(sample.solar_power.0))
    }
}

/// Integrate corrected per-sample power into per-channel energy.
///
/// Left-Riemann: each sample's instantaneous power is assumed to hold for the
/// whole following interval. An empty series is a valid zero-energy day.
pub fn accumulate(
    samples: &[Sample],
    interval: Minutes,
    corrections: Corrections,
) -> Result<DayEnergy> {
    ensure!(
        interval > Minutes::ZERO,
        "the sampling interval must be positive, got {interval}"
    );
    let series =
        samples.iter().map(|sample| corrections.apply(sample)).collect_vec();
    let solar = series.iter().map(|sample| sample.solar_power * interval).sum();
    let inverter = series.iter().map(|sample| sample.inverter_power * interval).sum();
    let grid = series.iter().map(|sample| sample.grid_power * interval).sum();
    Ok(DayEnergy { solar, inverter, grid, series })
}
