pub mod calculator;
pub mod hotkeys;
pub mod sdr;
pub mod selection;
pub mod waterfall;
