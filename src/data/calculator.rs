//! Map a waterfall selection to resampling parameters.
//!
//! The X axis of the image is frequency, centred on the tuner frequency and
//! spanning the Nyquist bandwidth; the Y axis is time and is not used for the
//! derived values.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::sdr::SdrConfig;
use super::selection::{Selection, SelectionBox};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size of the image area the user clicked on, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    pub width: u32,
    pub height: u32,
}

impl DisplayGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel column of the 0 Hz offset.
    pub fn center_x(&self) -> f64 {
        self.width as f64 / 2.0
    }
}

/// How the full image width maps onto the sampled bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyScale {
    /// Half the image width equals `sample_rate / 2`.
    #[default]
    Nyquist,
    /// Half the image width equals `sample_rate / 4`.
    HalfNyquist,
}

impl FrequencyScale {
    pub fn factor(&self) -> f64 {
        match self {
            FrequencyScale::Nyquist => 1.0,
            FrequencyScale::HalfNyquist => 0.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrequencyScale::Nyquist => "Nyquist (fs/2)",
            FrequencyScale::HalfNyquist => "Half Nyquist (fs/4)",
        }
    }
}

/// Constants of the output-size estimate and the frequency-axis calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Bytes written per output sample (4 for complex int16).
    pub bytes_per_sample: u32,
    /// Assumed length of the resampled capture, in seconds.
    pub capture_seconds: f64,
    pub frequency_scale: FrequencyScale,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            bytes_per_sample: 4,
            capture_seconds: 20.0,
            frequency_scale: FrequencyScale::default(),
        }
    }
}

/// Derived resampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Shift to apply so the signal lands at 0 Hz.
    pub frequency_offset_hz: i64,
    /// Low-pass cutoff before decimation.
    pub cutoff_frequency_hz: i64,
    pub decimation_rate: u32,
    pub output_sample_rate_hz: u64,
    /// Estimated output file size in MB (MiB).
    pub output_size_mb: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Sample rate is zero.
    NonPositiveSampleRate,
    /// Image area has zero width.
    EmptyDisplay,
    /// Both clicks share the same column, so the cutoff would be 0 Hz.
    ZeroWidthSelection,
    /// The selection is wider than the sampled band and no integer decimation exists.
    CutoffAboveSampleRate { cutoff_hz: f64, sample_rate: u64 },
    /// Calculator constants are unusable.
    InvalidSettings(String),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::NonPositiveSampleRate => {
                write!(f, "Calculation: sampling rate must be positive")
            }
            CalcError::EmptyDisplay => write!(f, "Image area has zero width"),
            CalcError::ZeroWidthSelection => {
                write!(f, "Selection has zero width; cutoff frequency would be 0 Hz")
            }
            CalcError::CutoffAboveSampleRate {
                cutoff_hz,
                sample_rate,
            } => write!(
                f,
                "Cutoff frequency {:.0} Hz exceeds sampling rate {} Hz",
                cutoff_hz, sample_rate
            ),
            CalcError::InvalidSettings(e) => write!(f, "Invalid calculator settings: {}", e),
        }
    }
}

impl std::error::Error for CalcError {}

/// Offset of the selection centre from the image centre, in Hz.
///
/// Unrounded; negative values lie left of the centre.
pub fn offset_frequency(
    sel: &SelectionBox,
    display: &DisplayGeometry,
    sample_rate: u64,
    scale: FrequencyScale,
) -> f64 {
    let (left, right) = sel.x_span();
    let signal_center = (left + right) / 2.0;
    let half_width = display.width as f64 / 2.0;
    ((signal_center - display.center_x()) / half_width) * bandwidth(sample_rate, scale)
}

/// Cutoff frequency covering the selected width, in Hz (unrounded).
pub fn cutoff_frequency(
    sel: &SelectionBox,
    display: &DisplayGeometry,
    sample_rate: u64,
    scale: FrequencyScale,
) -> f64 {
    let (left, right) = sel.x_span();
    let signal_bandwidth = right - left;
    (signal_bandwidth / display.width as f64) * bandwidth(sample_rate, scale)
}

/// Largest integer decimation that keeps `cutoff_hz` inside the output band.
pub fn decimation_rate(sample_rate: u64, cutoff_hz: f64) -> Result<u32, CalcError> {
    if sample_rate == 0 {
        return Err(CalcError::NonPositiveSampleRate);
    }
    if cutoff_hz <= 0.0 || !cutoff_hz.is_finite() {
        return Err(CalcError::ZeroWidthSelection);
    }
    let rate = (sample_rate as f64 / cutoff_hz).floor();
    if rate < 1.0 {
        return Err(CalcError::CutoffAboveSampleRate {
            cutoff_hz,
            sample_rate,
        });
    }
    Ok(rate.min(u32::MAX as f64) as u32)
}

/// Estimated size in MB of a capture at `output_sample_rate`.
pub fn output_size_mb(output_sample_rate: f64, settings: &CalculatorSettings) -> f64 {
    output_sample_rate * settings.bytes_per_sample as f64 / BYTES_PER_MB
        * settings.capture_seconds
}

fn bandwidth(sample_rate: u64, scale: FrequencyScale) -> f64 {
    sample_rate as f64 / 2.0 * scale.factor()
}

fn validate(
    display: &DisplayGeometry,
    sdr: &SdrConfig,
    settings: &CalculatorSettings,
) -> Result<(), CalcError> {
    if sdr.sample_rate == 0 {
        return Err(CalcError::NonPositiveSampleRate);
    }
    if display.width == 0 {
        return Err(CalcError::EmptyDisplay);
    }
    if settings.bytes_per_sample == 0 {
        return Err(CalcError::InvalidSettings(
            "bytes per sample must be positive".to_string(),
        ));
    }
    if !(settings.capture_seconds.is_finite() && settings.capture_seconds > 0.0) {
        return Err(CalcError::InvalidSettings(format!(
            "capture duration must be positive, got {}",
            settings.capture_seconds
        )));
    }
    Ok(())
}

/// Derive all resampling parameters for a completed selection.
pub fn calculate(
    sel: &SelectionBox,
    display: &DisplayGeometry,
    sdr: &SdrConfig,
    settings: &CalculatorSettings,
) -> Result<CalculationResult, CalcError> {
    validate(display, sdr, settings)?;
    if sel.width == 0 {
        return Err(CalcError::ZeroWidthSelection);
    }

    let scale = settings.frequency_scale;
    let offset = offset_frequency(sel, display, sdr.sample_rate, scale);
    let cutoff = cutoff_frequency(sel, display, sdr.sample_rate, scale);
    let decimation = decimation_rate(sdr.sample_rate, cutoff)?;
    let output_rate = sdr.sample_rate as f64 / decimation as f64;

    Ok(CalculationResult {
        frequency_offset_hz: offset.round() as i64,
        cutoff_frequency_hz: cutoff.round() as i64,
        decimation_rate: decimation,
        output_sample_rate_hz: output_rate.round() as u64,
        output_size_mb: output_size_mb(output_rate, settings),
    })
}

/// Like [`calculate`], but a selection with fewer than two points yields `Ok(None)`.
pub fn calculate_selection(
    selection: &Selection,
    display: &DisplayGeometry,
    sdr: &SdrConfig,
    settings: &CalculatorSettings,
) -> Result<Option<CalculationResult>, CalcError> {
    match selection.selection_box() {
        Some(sel) => calculate(&sel, display, sdr, settings).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_nyquist_halves_offset_and_cutoff() {
        let display = DisplayGeometry::new(1000, 100);
        let sel = SelectionBox {
            x: 600,
            y: 0,
            width: 200,
            height: 10,
        };
        let full = offset_frequency(&sel, &display, 1_000_000, FrequencyScale::Nyquist);
        let half = offset_frequency(&sel, &display, 1_000_000, FrequencyScale::HalfNyquist);
        assert!((full - 2.0 * half).abs() < 1e-9);

        let full = cutoff_frequency(&sel, &display, 1_000_000, FrequencyScale::Nyquist);
        let half = cutoff_frequency(&sel, &display, 1_000_000, FrequencyScale::HalfNyquist);
        assert!((full - 2.0 * half).abs() < 1e-9);
    }

    #[test]
    fn decimation_equal_to_sample_rate_is_one() {
        assert_eq!(decimation_rate(48_000, 48_000.0), Ok(1));
    }

    #[test]
    fn zero_capture_seconds_rejected() {
        let settings = CalculatorSettings {
            capture_seconds: 0.0,
            ..Default::default()
        };
        let sel = SelectionBox {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        let err = calculate(
            &sel,
            &DisplayGeometry::new(100, 100),
            &SdrConfig::new(1000),
            &settings,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidSettings(_)));
    }
}
