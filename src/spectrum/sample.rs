//! Per-wavelength physical quantities

use std::ops::RangeInclusive;

use super::color::{Rgb, wavelength_to_rgb};

/// Speed of light (m/s)
pub(crate) const SPEED_OF_LIGHT: f64 = 3.0e8;

/// Planck's constant (J·s)
pub(crate) const PLANCK_CONSTANT: f64 = 6.62607015e-34;

pub(crate) const MIN_WAVELENGTH_NM: u32 = 380;
pub(crate) const MAX_WAVELENGTH_NM: u32 = 780;

/// Integer wavelengths covered by the generator (nm)
pub(crate) const VISIBLE_RANGE: RangeInclusive<u32> = MIN_WAVELENGTH_NM..=MAX_WAVELENGTH_NM;

/// Energy is displayed in units of 10^-19 J
const ENERGY_DISPLAY_SCALE: f64 = 1e19;

/// Physical properties of light at a single wavelength
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SpectrumSample {
    pub(crate) wavelength_nm: u32,
    // Only the display forms are printed; the exact values are checked in tests
    #[allow(dead_code)]
    pub(crate) frequency_hz: f64,
    /// Frequency in THz, truncated toward zero
    pub(crate) frequency_thz: u32,
    #[allow(dead_code)]
    pub(crate) energy_joules: f64,
    /// `energy_joules` scaled by 10^19 for compact display
    pub(crate) energy_scaled: f64,
    pub(crate) color: Rgb,
}

impl SpectrumSample {
    /// Derive every quantity from the wavelength alone
    pub(crate) fn from_wavelength(wavelength_nm: u32) -> Self {
        let frequency_hz = SPEED_OF_LIGHT / (wavelength_nm as f64 * 1e-9);
        let energy_joules = PLANCK_CONSTANT * frequency_hz;

        Self {
            wavelength_nm,
            frequency_hz,
            frequency_thz: (frequency_hz * 1e-12) as u32,
            energy_joules,
            energy_scaled: energy_joules * ENERGY_DISPLAY_SCALE,
            color: wavelength_to_rgb(wavelength_nm),
        }
    }
}

/// Generate one sample per nanometer from 380 to 780 nm, ascending
pub(crate) fn generate_samples() -> Vec<SpectrumSample> {
    VISIBLE_RANGE.map(SpectrumSample::from_wavelength).collect()
}
