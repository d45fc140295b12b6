//! Spectrum bar chart rendering (one colored bar per wavelength)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisType, Color, Formatter, ItemStyle, JsFunction, LineStyle, NameLocation,
        SplitLine, TextStyle,
    },
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{
    AXIS_INTERVAL, BORDER_WIDTH, CHART_TITLE, Orientation, WIDTH_SCALING, Y_AXIS_MAX,
    canvas_size,
};
use crate::spectrum::SpectrumSample;

const HEADING_FONT_SIZE: f64 = 32.0;
const AXIS_NAME_FONT_SIZE: f64 = 16.0;
const TICK_FONT_SIZE: f64 = 12.0;

/// Distance between an axis line and its name (px)
const AXIS_NAME_GAP: f64 = 40.0;

/// Value axis from 0 to `span`, with tick labels shifted by `offset`
fn value_axis(name: &str, span: f64, offset: f64) -> Axis {
    let mut label = AxisLabel::new().color(COLOR_TEXT).font_size(TICK_FONT_SIZE);
    // Ticks land on multiples of the interval, so they are counted from the range start
    if offset != 0.0 {
        label = label.formatter(Formatter::Function(JsFunction::new_with_args(
            "value",
            &format!("return value + {};", offset),
        )));
    }

    Axis::new()
        .type_(AxisType::Value)
        .name(name)
        .name_location(NameLocation::Middle)
        .name_gap(AXIS_NAME_GAP)
        .name_text_style(
            TextStyle::new()
                .color(COLOR_TEXT)
                .font_size(AXIS_NAME_FONT_SIZE),
        )
        .min(0.0)
        .max(span)
        .interval(AXIS_INTERVAL)
        .axis_label(label)
        .split_line(SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)))
}

/// Build the chart options for one orientation
pub(super) fn build_spectrum_chart(
    samples: &[SpectrumSample],
    orientation: Orientation,
) -> Result<Chart, String> {
    let (x_min, x_max) = orientation
        .x_range(samples)
        .ok_or_else(|| "No data to render".to_string())?;

    let border = BORDER_WIDTH.to_string();

    let bars: Vec<DataPointItem> = orientation
        .columns(samples)
        .into_iter()
        .map(|column| {
            DataPointItem::new(vec![column.x - x_min, column.height])
                .item_style(ItemStyle::new().color(column.color.as_str()))
        })
        .collect();

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(CHART_TITLE)
                .left("center")
                .top("8")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(HEADING_FONT_SIZE)),
        )
        // Grid edges sit on the border; each sample spans WIDTH_SCALING px
        .grid(
            Grid::new()
                .left(border.as_str())
                .right(border.as_str())
                .top(border.as_str())
                .bottom(border.as_str())
                .contain_label(false),
        )
        .x_axis(value_axis(orientation.x_axis_name(), x_max - x_min, x_min))
        .y_axis(value_axis(orientation.y_axis_name(), Y_AXIS_MAX, 0.0))
        .series(
            Bar::new()
                .name(orientation.y_axis_name())
                .data(bars)
                .bar_width(WIDTH_SCALING as f64),
        );

    Ok(chart)
}

/// Render a spectrum bar chart to a PNG file
pub fn render_spectrum_chart(
    samples: &[SpectrumSample],
    orientation: Orientation,
    output_path: &str,
) -> Result<(), String> {
    let chart = build_spectrum_chart(samples, orientation)?;
    let (width, height) = canvas_size(samples.len());

    let mut renderer = ImageRenderer::new(width, height);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart {}: {}", output_path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::generate_samples;

    /// Chart options as JSON with all whitespace removed
    fn compact_options(orientation: Orientation) -> String {
        let chart = build_spectrum_chart(&generate_samples(), orientation).unwrap();
        chart.to_string().split_whitespace().collect()
    }

    #[test]
    fn test_build_empty_samples_error() {
        let result = build_spectrum_chart(&[], Orientation::WavelengthFrequency);
        assert!(result.is_err());
    }

    #[test]
    fn test_options_omit_axis_line() {
        for o in Orientation::ALL {
            assert!(!compact_options(o).contains("axisLine"));
        }
    }

    #[test]
    fn test_options_grid_and_bar_width() {
        let json = compact_options(Orientation::FrequencyWavelength);
        assert!(json.contains("\"left\":\"70\""));
        assert!(json.contains("\"bottom\":\"70\""));
        assert!(json.contains("\"barWidth\":2.0"));
        assert!(json.contains("\"#610061\""), "Per-bar colors should be set");
    }

    #[test]
    fn test_frequency_axis_counts_from_range_start() {
        let json = compact_options(Orientation::FrequencyWavelength);
        // 384..789 THz shifted to 0..405, labels add the start back
        assert!(json.contains("\"max\":405.0"));
        assert!(json.contains("value+384;"));
    }

    #[test]
    fn test_wavelength_axis_counts_from_range_start() {
        let json = compact_options(Orientation::WavelengthFrequency);
        assert!(json.contains("\"max\":400.0"));
        assert!(json.contains("value+380;"));
        // y axis keeps plain labels
        assert!(json.contains("\"max\":800.0"));
    }
}
