//! Wavelength to RGB approximation
//!
//! Piecewise-linear ramps per color band, attenuated towards the edges of the
//! visible range and gamma corrected. This is a perceptual heuristic, not a
//! colorimetric transform.

/// Gamma applied to each attenuated channel
const GAMMA: f64 = 0.8;
const MAX_INTENSITY: f64 = 255.0;

/// 8-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`
    pub(crate) fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Linear (unattenuated) channel values in 0..=1 for each band
fn linear_rgb(nm: u32) -> (f64, f64, f64) {
    let nm_f = nm as f64;
    match nm {
        380..=439 => (-(nm_f - 440.0) / (440.0 - 380.0), 0.0, 1.0),
        440..=489 => (0.0, (nm_f - 440.0) / (490.0 - 440.0), 1.0),
        490..=509 => (0.0, 1.0, -(nm_f - 510.0) / (510.0 - 490.0)),
        510..=579 => ((nm_f - 510.0) / (580.0 - 510.0), 1.0, 0.0),
        580..=644 => (1.0, -(nm_f - 645.0) / (645.0 - 580.0), 0.0),
        645..=780 => (1.0, 0.0, 0.0),
        _ => (0.0, 0.0, 0.0),
    }
}

/// Intensity falloff near the edges of the visible range
fn intensity_factor(nm: u32) -> f64 {
    let nm_f = nm as f64;
    match nm {
        380..=419 => 0.3 + 0.7 * (nm_f - 380.0) / (420.0 - 380.0),
        420..=700 => 1.0,
        701..=780 => 0.3 + 0.7 * (780.0 - nm_f) / (780.0 - 700.0),
        _ => 0.0,
    }
}

/// Apply attenuation and gamma; truncates toward zero
fn channel(value: f64, factor: f64) -> u8 {
    if value > 0.0 {
        (MAX_INTENSITY * (value * factor).powf(GAMMA)) as u8
    } else {
        0
    }
}

/// Approximate the perceived color of light at `nm`.
/// Wavelengths outside 380..=780 map to black.
pub(crate) fn wavelength_to_rgb(nm: u32) -> Rgb {
    let (r, g, b) = linear_rgb(nm);
    let factor = intensity_factor(nm);

    Rgb::new(channel(r, factor), channel(g, factor), channel(b, factor))
}
