//! Per-frame rendering of the picker and dispatch of queued actions.

use eframe::egui;

use crate::data::hotkeys::{detect_hotkey_actions, HotkeyName};

use super::{PickerAction, PickerPanel};

impl PickerPanel {
    /// Draw one frame into `ctx` and apply everything the user did during it.
    pub fn update(&mut self, ctx: &egui::Context) {
        for name in detect_hotkey_actions(&self.hotkeys, ctx) {
            self.request(match name {
                HotkeyName::LoadImage => PickerAction::LoadImage,
                HotkeyName::Calculate => PickerAction::Calculate,
                HotkeyName::Reset => PickerAction::Reset,
            });
        }

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);

        egui::SidePanel::right("freqpicker_parameters")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                self.parameters.show(ui, &self.settings);
            });

        let event = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.waterfall.show(ui))
            .inner;
        if let Some(event) = event {
            self.handle_selection_event(event);
        }

        self.apply_actions(ctx);
    }

    fn apply_actions(&mut self, ctx: &egui::Context) {
        for action in std::mem::take(&mut self.pending_actions) {
            match action {
                PickerAction::LoadImage => self.load_image_dialog(ctx),
                PickerAction::Calculate => self.calculate(),
                PickerAction::Reset => self.reset(),
            }
        }
    }
}
