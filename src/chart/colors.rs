//! Color definitions for charts

pub(super) const COLOR_BACKGROUND: &str = "#202020"; // Dark gray
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines
