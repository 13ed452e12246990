//! Main application module for the frequency picker.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`update`]        | Per-frame rendering and dispatch of selection events |
//! | [`layout`]        | Top command bar and bottom status bar |
//! | [`picker_app`]    | Standalone [`PickerApp`] (eframe) wrapper |
//! | [`run`]           | Top-level [`run_picker()`] entry point and icon loading |

mod layout;
mod picker_app;
mod run;
mod update;

pub use picker_app::PickerApp;
pub use run::run_picker;

use std::path::Path;

use eframe::egui;

use crate::data::calculator::{self, CalculatorSettings};
use crate::data::hotkeys::Hotkeys;
use crate::data::selection::SelectionEvent;
use crate::data::waterfall::{WaterfallImage, SUPPORTED_EXTENSIONS};
use crate::panels::waterfall_ui::{box_status, position_status};
use crate::panels::{ParametersPanel, WaterfallPanel};

/// Commands triggered by buttons or hotkeys, applied after the frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    LoadImage,
    Calculate,
    Reset,
}

/// The central widget that owns the image, the selection and the parameter fields.
pub struct PickerPanel {
    pub waterfall: WaterfallPanel,
    pub parameters: ParametersPanel,
    pub settings: CalculatorSettings,
    pub hotkeys: Hotkeys,
    /// Text of the bottom status bar.
    pub status: String,
    pub(crate) pending_actions: Vec<PickerAction>,
}

impl PickerPanel {
    pub fn new(waterfall: WaterfallPanel, parameters: ParametersPanel) -> Self {
        Self {
            waterfall,
            parameters,
            settings: CalculatorSettings::default(),
            hotkeys: Hotkeys::default(),
            status: String::new(),
            pending_actions: Vec::new(),
        }
    }

    pub fn request(&mut self, action: PickerAction) {
        if !self.pending_actions.contains(&action) {
            self.pending_actions.push(action);
        }
    }

    /// Open the native file dialog and load the chosen image.
    pub fn load_image_dialog(&mut self, ctx: &egui::Context) {
        let picked = rfd::FileDialog::new()
            .set_title("Open Image File")
            .add_filter("Image Files", SUPPORTED_EXTENSIONS)
            .pick_file();
        // Cancelled dialog leaves everything as it was.
        if let Some(path) = picked {
            self.load_image_path(ctx, &path);
        }
    }

    pub fn load_image_path(&mut self, ctx: &egui::Context, path: &Path) {
        match WaterfallImage::open(path) {
            Ok(img) => {
                log::info!(
                    "Loaded waterfall {:?} ({}x{})",
                    img.path,
                    img.width(),
                    img.height()
                );
                self.status = format!("Loaded {}", img.display_name());
                self.waterfall.set_image(ctx, img);
                self.parameters.clear_results();
            }
            Err(e) => {
                log::warn!("{e}");
                self.status = e.to_string();
            }
        }
    }

    /// Recompute the parameters from the current selection.
    ///
    /// Does nothing while the selection is incomplete or no image is shown.
    pub fn calculate(&mut self) {
        let Some(display) = self.waterfall.selection_geometry() else {
            return;
        };
        if !self.waterfall.selection.is_complete() {
            return;
        }
        let sdr = match self.parameters.sdr_config() {
            Ok(sdr) => sdr,
            Err(e) => {
                log::warn!("Invalid input: {e}");
                self.parameters.set_error(e.to_string());
                return;
            }
        };
        match calculator::calculate_selection(
            &self.waterfall.selection,
            &display,
            &sdr,
            &self.settings,
        ) {
            Ok(Some(result)) => {
                log::info!(
                    "shift={} Hz cutoff={} Hz decimation={} out_rate={} Hz size={:.2} MB",
                    result.frequency_offset_hz,
                    result.cutoff_frequency_hz,
                    result.decimation_rate,
                    result.output_sample_rate_hz,
                    result.output_size_mb
                );
                self.parameters.set_result(result);
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Calculation failed: {e}");
                self.parameters.set_error(e.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        self.waterfall.reset();
        self.parameters.clear_results();
        self.status.clear();
    }

    pub(crate) fn handle_selection_event(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::Started(p) => {
                self.status = format!("First corner at ({}, {})", p.x, p.y);
            }
            SelectionEvent::Completed(b) => {
                self.status = box_status(&b);
                self.calculate();
            }
            SelectionEvent::Reset => {
                log::debug!("Selection reset by extra click");
                self.parameters.clear_results();
                self.status = match self.waterfall.selection.points().first() {
                    Some(p) => format!("First corner at ({}, {})", p.x, p.y),
                    None => String::new(),
                };
            }
        }
    }

    /// Status text for this frame: hover position wins over the stored message.
    pub fn status_line(&self) -> String {
        match self.waterfall.hover {
            Some(p) if !self.waterfall.selection.is_complete() => position_status(p),
            _ => self.status.clone(),
        }
    }
}
