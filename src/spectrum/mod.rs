//! Visible spectrum data generation

mod color;
mod sample;

pub(crate) use sample::{SpectrumSample, generate_samples};

#[cfg(test)]
pub(crate) use color::Rgb;
