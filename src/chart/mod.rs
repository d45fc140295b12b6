//! Chart rendering for wavelength/frequency bar charts

mod bars;
mod colors;

pub use bars::render_spectrum_chart;

use crate::spectrum::SpectrumSample;

/// Margin around the plotting area on every side (px)
pub(super) const BORDER_WIDTH: u32 = 70;

/// Horizontal pixels per sample; also the bar width
pub(super) const WIDTH_SCALING: u32 = 2;

/// Vertical pixels per unit of the dependent axis
pub(super) const HEIGHT_SCALING: f64 = 0.5;

/// Upper bound of the dependent (y) axis, in THz or nm
pub(super) const Y_AXIS_MAX: f64 = 800.0;

/// Spacing between labelled ticks on both axes
pub(super) const AXIS_INTERVAL: f64 = 50.0;

pub(super) const CHART_TITLE: &str = "Visible Spectrum";

/// Which quantity goes on the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Wavelength on x, frequency as bar height; columns run left to right
    WavelengthFrequency,
    /// Frequency on x, wavelength as bar height; columns run right to left
    FrequencyWavelength,
}

/// A single bar, in axis coordinates
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Column {
    pub(super) x: f64,
    pub(super) height: f64,
    pub(super) color: String,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [
        Orientation::WavelengthFrequency,
        Orientation::FrequencyWavelength,
    ];

    /// Output file name used when writing into a directory
    pub fn file_name(self) -> &'static str {
        match self {
            Orientation::WavelengthFrequency => "wavelength_frequency.png",
            Orientation::FrequencyWavelength => "frequency_wavelength.png",
        }
    }

    pub(super) fn x_axis_name(self) -> &'static str {
        match self {
            Orientation::WavelengthFrequency => "Wavelength (nm)",
            Orientation::FrequencyWavelength => "Frequency (THz)",
        }
    }

    pub(super) fn y_axis_name(self) -> &'static str {
        match self {
            Orientation::WavelengthFrequency => "Frequency (THz)",
            Orientation::FrequencyWavelength => "Wavelength (nm)",
        }
    }

    fn x_value(self, sample: &SpectrumSample) -> f64 {
        match self {
            Orientation::WavelengthFrequency => sample.wavelength_nm as f64,
            Orientation::FrequencyWavelength => sample.frequency_thz as f64,
        }
    }

    fn bar_height(self, sample: &SpectrumSample) -> f64 {
        match self {
            Orientation::WavelengthFrequency => sample.frequency_thz as f64,
            Orientation::FrequencyWavelength => sample.wavelength_nm as f64,
        }
    }

    /// X axis extent (low, high) covered by the samples
    pub(super) fn x_range(self, samples: &[SpectrumSample]) -> Option<(f64, f64)> {
        let first = self.x_value(samples.first()?);
        let last = self.x_value(samples.last()?);
        Some((first.min(last), first.max(last)))
    }

    /// Bars in sample order, each centered in an equal slot of the x range so
    /// that edge bars stay inside the plot area.
    /// Frequency-on-x walks from the right edge towards the left.
    pub(super) fn columns(self, samples: &[SpectrumSample]) -> Vec<Column> {
        let Some((low, high)) = self.x_range(samples) else {
            return Vec::new();
        };
        let n = samples.len();
        let slot_width = (high - low) / n as f64;

        samples
            .iter()
            .enumerate()
            .map(|(i, sample)| {
                let slot = match self {
                    Orientation::WavelengthFrequency => i,
                    Orientation::FrequencyWavelength => n - 1 - i,
                };
                Column {
                    x: low + (slot as f64 + 0.5) * slot_width,
                    height: self.bar_height(sample),
                    color: sample.color.to_hex(),
                }
            })
            .collect()
    }
}

/// Canvas size (width, height) in pixels for the given number of samples
pub(super) fn canvas_size(sample_count: usize) -> (u32, u32) {
    let width = sample_count as u32 * WIDTH_SCALING + BORDER_WIDTH * 2;
    let height = (Y_AXIS_MAX * HEIGHT_SCALING) as u32 + BORDER_WIDTH * 2;
    (width, height)
}
