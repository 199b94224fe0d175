pub mod current;
pub mod energy;
pub mod minutes;
pub mod power;
pub mod voltage;
