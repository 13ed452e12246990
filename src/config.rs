//! Configuration of the picker window.

use std::path::PathBuf;

use crate::color_scheme::ColorScheme;
use crate::data::calculator::CalculatorSettings;
use crate::data::hotkeys::Hotkeys;
use crate::data::selection::ThirdClickPolicy;

/// Top-level configuration for [`run_picker`](crate::run_picker).
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `calculator`     | Size-estimate constants and frequency-axis calibration |
/// | `third_click`    | What a click after a completed selection does |
/// | `hotkeys`        | Keyboard shortcuts for Load / Calculate / Reset |
/// | `color_scheme`   | Window theme and overlay colours |
#[derive(Clone)]
pub struct PickerConfig {
    // ── Session inputs ───────────────────────────────────────────────────────
    /// Image opened on startup.
    pub image: Option<PathBuf>,
    /// Initial content of the "Sampling Rate" field.
    pub sample_rate: Option<u64>,
    /// Initial content of the "Number of Samples" field.
    pub num_samples: Option<u64>,

    // ── Behaviour ────────────────────────────────────────────────────────────
    pub calculator: CalculatorSettings,
    pub third_click: ThirdClickPolicy,
    pub hotkeys: Hotkeys,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Initial inner window size, used when `native_options` does not set one.
    pub window_size: [f32; 2],
    pub color_scheme: ColorScheme,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            image: None,
            sample_rate: None,
            num_samples: None,
            calculator: CalculatorSettings::default(),
            third_click: ThirdClickPolicy::default(),
            hotkeys: Hotkeys::default(),
            title: "Frequency Picker".to_string(),
            window_size: [1800.0, 1600.0],
            color_scheme: ColorScheme::default(),
            native_options: None,
        }
    }
}
