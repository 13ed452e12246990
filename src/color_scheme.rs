//! Color schemes for the picker window and the selection overlay.

use eframe::egui::{Color32, Context, Visuals};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Visual theme of the window, including the colours drawn over the waterfall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// eframe default dark theme.
    #[default]
    Dark,
    Light,
    /// Pure-black background with saturated overlay colours.
    HighContrast,
}

/// Colours used on top of the waterfall image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayColors {
    pub selection_box: Color32,
    pub crosshair: Color32,
    pub first_point: Color32,
}

impl ColorScheme {
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::HighContrast => {
                let mut v = Visuals::dark();
                let bg = Color32::BLACK;
                let fg = Color32::WHITE;
                v.panel_fill = bg;
                v.window_fill = Color32::from_rgb(10, 10, 10);
                v.extreme_bg_color = bg;
                v.faint_bg_color = Color32::from_rgb(20, 20, 20);
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.fg_stroke.color = fg;
                ctx.set_visuals(v);
            }
        }
    }

    pub fn overlay_colors(&self) -> OverlayColors {
        match self {
            // #FF5722 crosshair and a red box, as in the classic picker.
            ColorScheme::Dark | ColorScheme::Light => OverlayColors {
                selection_box: Color32::RED,
                crosshair: Color32::from_rgb(0xFF, 0x57, 0x22),
                first_point: Color32::YELLOW,
            },
            ColorScheme::HighContrast => OverlayColors {
                selection_box: Color32::from_rgb(255, 0, 255),
                crosshair: Color32::WHITE,
                first_point: Color32::from_rgb(0, 255, 0),
            },
        }
    }
}
