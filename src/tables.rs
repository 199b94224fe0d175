use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::DayData,
    quantity::{energy::KilowattHours, power::Kilowatts},
    telemetry::{CorrectedSample, DayEnergy},
};

/// Per-channel totals: the locally accumulated energy next to whatever total
/// the backend reported for the same day (absent on historical fetches).
pub fn build_totals_table(energy: &DayEnergy, day: &DayData) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Channel", "Accumulated", "Reported"]);
    for (channel, accumulated, reported) in [
        ("Solar", energy.solar, day.reported_solar),
        ("Grid", energy.grid, day.reported_grid),
        ("Load", energy.inverter, day.reported_load),
    ] {
        table.add_row(vec![
            Cell::new(channel),
            Cell::new(accumulated).set_alignment(CellAlignment::Right),
            reported_cell(reported),
        ]);
    }
    table
}

/// The corrected per-sample series.
pub fn build_series_table(series: &[CorrectedSample]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Time", "Solar", "", "", "Inverter", "", "", "Grid", "", "",
    ]);
    for sample in series {
        table.add_row(vec![
            match sample.time {
                Some(time) => Cell::new(time),
                None => Cell::new("?").add_attribute(Attribute::Dim),
            },
            Cell::new(sample.solar_voltage).set_alignment(CellAlignment::Right),
            Cell::new(sample.solar_current).set_alignment(CellAlignment::Right),
            power_cell(sample.solar_power),
            Cell::new(sample.inverter_voltage).set_alignment(CellAlignment::Right),
            Cell::new(sample.inverter_current).set_alignment(CellAlignment::Right),
            power_cell(sample.inverter_power),
            Cell::new(sample.grid_voltage).set_alignment(CellAlignment::Right),
            Cell::new(sample.grid_current).set_alignment(CellAlignment::Right),
            power_cell(sample.grid_power),
        ]);
    }
    table
}

/// Battery channel readings, as reported (no corrections apply).
pub fn build_battery_table(series: &[CorrectedSample]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Time", "V1", "V2", "V3", "V4", "Current", "Charge", "Discharge",
    ]);
    for sample in series {
        let battery = sample.battery;
        table.add_row(vec![
            match sample.time {
                Some(time) => Cell::new(time),
                None => Cell::new("?").add_attribute(Attribute::Dim),
            },
            Cell::new(battery.voltage).set_alignment(CellAlignment::Right),
            Cell::new(battery.voltage_2).set_alignment(CellAlignment::Right),
            Cell::new(battery.voltage_3).set_alignment(CellAlignment::Right),
            Cell::new(battery.voltage_4).set_alignment(CellAlignment::Right),
            Cell::new(battery.current).set_alignment(CellAlignment::Right),
            Cell::new(battery.charge_current).set_alignment(CellAlignment::Right),
            Cell::new(battery.discharge_current).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn reported_cell(reported: Option<KilowattHours>) -> Cell {
    match reported {
        Some(energy) => Cell::new(energy).set_alignment(CellAlignment::Right),
        None => Cell::new("–").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
    }
}

fn power_cell(power: Kilowatts) -> Cell {
    let cell = Cell::new(power).set_alignment(CellAlignment::Right);
    if power > Kilowatts::ZERO { cell.fg(Color::Green) } else { cell.add_attribute(Attribute::Dim) }
}
