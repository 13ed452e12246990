//! Command-line interface.
//!
//! Without a subcommand the picker window opens; `calc` runs the calculator
//! on coordinates given on the command line and prints the result.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

use crate::color_scheme::ColorScheme;
use crate::config::PickerConfig;
use crate::data::calculator::{
    calculate, CalculationResult, CalculatorSettings, DisplayGeometry, FrequencyScale,
};
use crate::data::hotkeys::Hotkey;
use crate::data::sdr::SdrConfig;
use crate::data::selection::{Point, SelectionBox, ThirdClickPolicy};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Waterfall image to open on startup (png, jpg, jpeg, bmp).
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Initial sampling rate in Hz.
    #[arg(long)]
    pub sample_rate: Option<u64>,

    /// Initial number of samples of the recording.
    #[arg(long)]
    pub num_samples: Option<u64>,

    /// What a click after a completed selection does.
    #[arg(long, value_enum, default_value_t = ThirdClickPolicy::Restart)]
    pub third_click: ThirdClickPolicy,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[arg(long, value_enum, default_value_t = ColorScheme::Dark)]
    pub theme: ColorScheme,

    /// Shortcut for "Load Image", e.g. "Ctrl+O".
    #[arg(long, value_parser = Hotkey::from_str)]
    pub load_key: Option<Hotkey>,

    /// Shortcut for "Calculate".
    #[arg(long, value_parser = Hotkey::from_str)]
    pub calculate_key: Option<Hotkey>,

    /// Shortcut for "Reset".
    #[arg(long, value_parser = Hotkey::from_str)]
    pub reset_key: Option<Hotkey>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the resampling parameters without opening a window.
    Calc(CalcArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CalcArgs {
    /// Width of the image area in pixels.
    #[arg(long)]
    pub width: u32,

    /// Height of the image area in pixels.
    #[arg(long, default_value_t = 0)]
    pub height: u32,

    /// Sampling rate of the recording in Hz.
    #[arg(long)]
    pub sample_rate: u64,

    /// First corner as "x,y".
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub p1: Point,

    /// Second corner as "x,y".
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub p2: Point,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Bytes per output sample used for the size estimate.
    #[arg(long, default_value_t = CalculatorSettings::default().bytes_per_sample)]
    pub bytes_per_sample: u32,

    /// Capture duration in seconds used for the size estimate.
    #[arg(long, default_value_t = CalculatorSettings::default().capture_seconds)]
    pub capture_seconds: f64,

    /// Bandwidth represented by half the image width.
    #[arg(long, value_enum, default_value_t = FrequencyScale::Nyquist)]
    pub scale: FrequencyScale,
}

impl From<&SettingsArgs> for CalculatorSettings {
    fn from(a: &SettingsArgs) -> Self {
        Self {
            bytes_per_sample: a.bytes_per_sample,
            capture_seconds: a.capture_seconds,
            frequency_scale: a.scale,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Parse "x,y" into a [`Point`].
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got '{}'", s))?;
    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x in '{}': {}", s, e))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y in '{}': {}", s, e))?;
    Ok(Point::new(x, y))
}

impl Args {
    pub fn into_config(self) -> PickerConfig {
        let mut cfg = PickerConfig {
            image: self.image,
            sample_rate: self.sample_rate,
            num_samples: self.num_samples,
            calculator: (&self.settings).into(),
            third_click: self.third_click,
            color_scheme: self.theme,
            ..Default::default()
        };
        if let Some(hk) = self.load_key {
            cfg.hotkeys.load_image = Some(hk);
        }
        if let Some(hk) = self.calculate_key {
            cfg.hotkeys.calculate = Some(hk);
        }
        if let Some(hk) = self.reset_key {
            cfg.hotkeys.reset = Some(hk);
        }
        cfg
    }
}

impl CalcArgs {
    pub fn compute(&self) -> Result<CalculationResult, Box<dyn std::error::Error>> {
        let sel = SelectionBox::from_corners(self.p1, self.p2);
        let display = DisplayGeometry::new(self.width, self.height);
        let sdr = SdrConfig::new(self.sample_rate);
        let settings = CalculatorSettings::from(&self.settings);
        let result = calculate(&sel, &display, &sdr, &settings)?;
        Ok(result)
    }

    /// Compute and format according to `--format`.
    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        let result = self.compute()?;
        let out = match self.format {
            OutputFormat::Text => format_text(&result),
            OutputFormat::Json => serde_json::to_string_pretty(&result)?,
            OutputFormat::Yaml => serde_yaml::to_string(&result)?,
        };
        Ok(out)
    }
}

pub fn format_text(r: &CalculationResult) -> String {
    format!(
        "Frequency shift:     {} Hz\n\
         Cutoff frequency:    {} Hz\n\
         Decimation:          {}\n\
         Output sample rate:  {} Hz\n\
         Output size:         {:.2} MB",
        r.frequency_offset_hz,
        r.cutoff_frequency_hz,
        r.decimation_rate,
        r.output_sample_rate_hz,
        r.output_size_mb
    )
}
