//! Side panel with the SDR inputs and the derived resampling parameters.

use eframe::egui;

use crate::data::calculator::{CalculationResult, CalculatorSettings};
use crate::data::sdr::{InputError, SdrConfig};

/// Text shown in the read-only result fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTexts {
    pub frequency_shift: String,
    pub cutoff_frequency: String,
    pub decimation: String,
    pub output_sample_rate: String,
    pub output_size: String,
}

impl From<&CalculationResult> for ResultTexts {
    fn from(r: &CalculationResult) -> Self {
        Self {
            frequency_shift: r.frequency_offset_hz.to_string(),
            cutoff_frequency: r.cutoff_frequency_hz.to_string(),
            decimation: r.decimation_rate.to_string(),
            output_sample_rate: r.output_sample_rate_hz.to_string(),
            output_size: format!("{:.2}", r.output_size_mb),
        }
    }
}

#[derive(Default)]
pub struct ParametersPanel {
    pub sample_rate_text: String,
    pub num_samples_text: String,
    result: Option<CalculationResult>,
    error: Option<String>,
}

impl ParametersPanel {
    pub const FREQUENCY_SHIFT_LABEL: &'static str = "Resampling shift [Hz]";
    pub const CUTOFF_LABEL: &'static str = "Resampling cut-off frequency [Hz]";
    pub const DECIMATION_LABEL: &'static str = "Decimation";
    pub const OUTPUT_RATE_LABEL: &'static str = "Output sample rate [Hz]";
    pub const OUTPUT_SIZE_LABEL: &'static str = "Output size [MB]";

    pub fn new(sample_rate: Option<u64>, num_samples: Option<u64>) -> Self {
        Self {
            sample_rate_text: sample_rate.map(|v| v.to_string()).unwrap_or_default(),
            num_samples_text: num_samples.map(|v| v.to_string()).unwrap_or_default(),
            result: None,
            error: None,
        }
    }

    pub fn sdr_config(&self) -> Result<SdrConfig, InputError> {
        SdrConfig::from_fields(&self.sample_rate_text, &self.num_samples_text)
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_result(&mut self, result: CalculationResult) {
        self.result = Some(result);
        self.error = None;
    }

    /// Show an error and blank the results, which no longer match the inputs.
    pub fn set_error(&mut self, error: String) {
        self.result = None;
        self.error = Some(error);
    }

    pub fn clear_results(&mut self) {
        self.result = None;
        self.error = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, settings: &CalculatorSettings) {
        ui.heading("Parameters");
        ui.add_space(4.0);

        ui.label("Sampling Rate [Hz]");
        ui.text_edit_singleline(&mut self.sample_rate_text);
        ui.label("Number of Samples");
        ui.text_edit_singleline(&mut self.num_samples_text);
        if let Ok(Some(secs)) = self.sdr_config().map(|c| c.capture_duration_secs()) {
            ui.weak(format!("Recording length: {:.3} s", secs));
        }

        ui.separator();

        let texts = self
            .result
            .as_ref()
            .map(ResultTexts::from)
            .unwrap_or_default();
        readonly_field(ui, Self::FREQUENCY_SHIFT_LABEL, &texts.frequency_shift);
        readonly_field(ui, Self::CUTOFF_LABEL, &texts.cutoff_frequency);
        readonly_field(ui, Self::DECIMATION_LABEL, &texts.decimation);
        readonly_field(ui, Self::OUTPUT_RATE_LABEL, &texts.output_sample_rate);
        readonly_field(ui, Self::OUTPUT_SIZE_LABEL, &texts.output_size);

        if let Some(err) = &self.error {
            ui.add_space(4.0);
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, err);
        }

        ui.separator();
        ui.weak(format!("Axis scale: {}", settings.frequency_scale.label()));
        ui.weak(format!(
            "Size estimate: {} B/sample, {} s capture",
            settings.bytes_per_sample, settings.capture_seconds
        ));
    }
}

fn readonly_field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(label);
    let mut text = value;
    ui.add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY));
}
