//! Frequency picker crate root: re-exports and module wiring.
//!
//! Load a waterfall (spectrogram) image, click two corners around a signal
//! and read off the resampling parameters for an SDR pipeline.
//!
//! - `data`: selection state machine, parameter calculator, input parsing,
//!   image loading and hotkeys
//! - `panels`: egui widgets for the image area and the parameters side panel
//! - `app`: eframe application and [`run_picker`] entry point
//! - `cli`: command-line arguments and the headless `calc` command

pub mod app;
pub mod cli;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod panels;

pub use app::{run_picker, PickerApp, PickerPanel};
pub use color_scheme::ColorScheme;
pub use config::PickerConfig;
pub use data::calculator::{
    calculate, calculate_selection, CalcError, CalculationResult, CalculatorSettings,
    DisplayGeometry, FrequencyScale,
};
pub use data::sdr::{InputError, SdrConfig};
pub use data::selection::{Point, Selection, SelectionBox, SelectionEvent, ThirdClickPolicy};
pub use data::waterfall::{LoadError, WaterfallImage};
