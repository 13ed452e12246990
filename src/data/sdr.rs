//! Receiver settings entered by the user.

use serde::{Deserialize, Serialize};

/// Errors produced while parsing the text fields of the parameters panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Sampling rate field is empty or not an integer.
    InvalidSampleRate(String),
    /// Sampling rate parsed but is zero.
    NonPositiveSampleRate,
    /// Number-of-samples field is not an integer.
    InvalidSampleCount(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::InvalidSampleRate(s) if s.is_empty() => {
                write!(f, "Sampling rate is required")
            }
            InputError::InvalidSampleRate(s) => write!(f, "Invalid sampling rate: '{}'", s),
            InputError::NonPositiveSampleRate => write!(f, "Sampling rate must be positive"),
            InputError::InvalidSampleCount(s) => write!(f, "Invalid number of samples: '{}'", s),
        }
    }
}

impl std::error::Error for InputError {}

/// Sampling parameters of the recording the waterfall was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdrConfig {
    /// Input sample rate in Hz.
    pub sample_rate: u64,
    /// Number of samples in the recording, if known. Informational only.
    pub num_samples: Option<u64>,
}

impl SdrConfig {
    pub fn new(sample_rate: u64) -> Self {
        Self {
            sample_rate,
            num_samples: None,
        }
    }

    /// Parse the raw text of the "Sampling Rate" and "Number of Samples" fields.
    pub fn from_fields(sample_rate: &str, num_samples: &str) -> Result<Self, InputError> {
        let rate_txt = sample_rate.trim();
        let sample_rate: u64 = rate_txt
            .parse()
            .map_err(|_| InputError::InvalidSampleRate(rate_txt.to_string()))?;
        if sample_rate == 0 {
            return Err(InputError::NonPositiveSampleRate);
        }

        let count_txt = num_samples.trim();
        let num_samples = if count_txt.is_empty() {
            None
        } else {
            Some(
                count_txt
                    .parse()
                    .map_err(|_| InputError::InvalidSampleCount(count_txt.to_string()))?,
            )
        };

        Ok(Self {
            sample_rate,
            num_samples,
        })
    }

    /// Length of the recording in seconds, when the sample count is known.
    pub fn capture_duration_secs(&self) -> Option<f64> {
        if self.sample_rate == 0 {
            return None;
        }
        self.num_samples
            .map(|n| n as f64 / self.sample_rate as f64)
    }
}
