//! Standalone application wrapper.
//!
//! [`PickerApp`] wraps a [`PickerPanel`](super::PickerPanel) and implements
//! [`eframe::App`] so the picker can run as a native window.

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::PickerConfig;
use crate::panels::{ParametersPanel, WaterfallPanel};

use super::PickerPanel;

pub struct PickerApp {
    /// The inner panel that owns all image and selection state.
    pub main_panel: PickerPanel,
    pub color_scheme: ColorScheme,
    /// Flag so we only apply the color scheme on the very first frame.
    color_scheme_applied: bool,
}

impl PickerApp {
    pub fn new(cfg: &PickerConfig) -> Self {
        let waterfall = WaterfallPanel::new(cfg.third_click, cfg.color_scheme.overlay_colors());
        let parameters = ParametersPanel::new(cfg.sample_rate, cfg.num_samples);
        let mut app = Self {
            main_panel: PickerPanel::new(waterfall, parameters),
            color_scheme: cfg.color_scheme,
            color_scheme_applied: false,
        };
        app.apply_config(cfg);
        app
    }

    /// Copy calculator constants and hotkeys from `cfg` into the panel.
    pub(crate) fn apply_config(&mut self, cfg: &PickerConfig) {
        self.main_panel.settings = cfg.calculator;
        self.main_panel.hotkeys = cfg.hotkeys.clone();
        self.main_panel
            .waterfall
            .selection
            .set_policy(cfg.third_click);
        self.main_panel.waterfall.overlay = cfg.color_scheme.overlay_colors();
        self.color_scheme = cfg.color_scheme;
        self.color_scheme_applied = false;
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        self.main_panel.update(ctx);
    }
}
