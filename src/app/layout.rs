//! Command bar and status bar.

use eframe::egui;
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, CALCULATOR, FOLDER_OPEN};

use crate::data::hotkeys::{format_button_tooltip, HotkeyName};

use super::{PickerAction, PickerPanel};

impl PickerPanel {
    pub const LOAD_IMAGE_LABEL: &'static str = "Load Image";
    pub const CALCULATE_LABEL: &'static str = "Calculate";
    pub const RESET_LABEL: &'static str = "Reset";

    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("freqpicker_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let buttons = [
                    (
                        FOLDER_OPEN,
                        Self::LOAD_IMAGE_LABEL,
                        "Open a waterfall image",
                        HotkeyName::LoadImage,
                        PickerAction::LoadImage,
                    ),
                    (
                        CALCULATOR,
                        Self::CALCULATE_LABEL,
                        "Recompute the parameters from the selection",
                        HotkeyName::Calculate,
                        PickerAction::Calculate,
                    ),
                    (
                        ARROW_COUNTER_CLOCKWISE,
                        Self::RESET_LABEL,
                        "Clear the selection and results",
                        HotkeyName::Reset,
                        PickerAction::Reset,
                    ),
                ];
                for (icon, label, description, hotkey, action) in buttons {
                    let tooltip = format_button_tooltip(description, self.hotkeys.get(hotkey));
                    if ui
                        .button(format!("{icon} {label}"))
                        .on_hover_text(tooltip)
                        .clicked()
                    {
                        self.request(action);
                    }
                }

                if let Some(img) = self.waterfall.image() {
                    ui.separator();
                    ui.label(format!(
                        "{} ({}x{})",
                        img.display_name(),
                        img.width(),
                        img.height()
                    ));
                }
            });
        });
    }

    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let text = self.status_line();
        egui::TopBottomPanel::bottom("freqpicker_status").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(text);
            });
        });
    }
}
