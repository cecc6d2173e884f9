//! Server-side chart rendering.
//!
//! Charts are drawn with plotters onto an in-memory RGB bitmap and encoded
//! as PNG. Text is rendered from a bundled DejaVu Sans face so no system
//! font lookup happens at runtime.

use std::io::Cursor;
use std::sync::OnceLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, NaiveDate};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::histogram::{HISTOGRAM_BINS, Histogram};
use crate::window::LastTwelveMonths;

pub const PRECIPITATION_TITLE: &str = "Precipitation for All Dates in the Last 12 Months";
pub const PRECIPITATION_X_LABEL: &str = "Date";
pub const PRECIPITATION_Y_LABEL: &str = "Precipitation (inches)";

pub const HISTOGRAM_TITLE: &str = "Histogram of USC00519281 for the Last 12 Months";
pub const HISTOGRAM_X_LABEL: &str = "Temperature";
pub const HISTOGRAM_Y_LABEL: &str = "Frequency";

const PRECIPITATION_CHART_SIZE: (u32, u32) = (1000, 600);
const HISTOGRAM_CHART_SIZE: (u32, u32) = (800, 600);

/// Bars are half a day wide so neighbouring days never touch.
const BAR_HALF_WIDTH: f64 = 0.25;

const FONT_FAMILY: &str = "sans-serif";
const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// A rendered chart in PNG format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    png: Vec<u8>,
}

impl ChartImage {
    fn from_rgb((width, height): (u32, u32), buffer: Vec<u8>) -> Result<Self> {
        let image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
            ComputeError::Encode(format!("Bitmap buffer does not match {width}x{height}"))
        })?;

        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png)?;

        Ok(Self {
            png: png.into_inner(),
        })
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Base64 text suitable for a `data:image/png;base64,` URL.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }
}

fn chart_error<E: std::fmt::Display>(error: E) -> ComputeError {
    ComputeError::Chart(error.to_string())
}

fn ensure_font_registered() -> Result<()> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();

    let registered = *REGISTERED.get_or_init(|| {
        plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).is_ok()
    });
    if registered {
        Ok(())
    } else {
        Err(ComputeError::Chart("Failed to load the bundled chart font".to_string()))
    }
}

fn day_label(start: NaiveDate, offset: f64) -> String {
    (start + Duration::days(offset.round() as i64)).to_string()
}

fn value_label(value: f64) -> String {
    format!("{value:.1}")
}

/// Draws one bar per window row, in window order, positioned by date.
///
/// Duplicate dates are not aggregated, their bars overlap. Rows without a
/// precipitation value leave a gap.
#[instrument(skip(window), fields(rows = window.len()))]
pub fn render_precipitation_bar_chart(window: &LastTwelveMonths) -> Result<ChartImage> {
    ensure_font_registered()?;

    let points = window.precipitation_points()?;
    // Rotated labels hang from their right edge, below the axis.
    let date_label_style =
        TextStyle::from((FONT_FAMILY, 13).into_font().transform(FontTransform::Rotate90))
            .pos(Pos::new(HPos::Right, VPos::Center));

    let (width, height) = PRECIPITATION_CHART_SIZE;
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let start = window.start_date();
        let span = (window.max_date() - start).num_days() as f64;
        let tallest = points
            .iter()
            .filter_map(|(_, precipitation)| *precipitation)
            .fold(0.0_f64, f64::max);
        let y_max = if tallest > 0.0 { tallest * 1.05 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption(PRECIPITATION_TITLE, (FONT_FAMILY, 24))
            .margin(20)
            .x_label_area_size(100)
            .y_label_area_size(70)
            .build_cartesian_2d(-1.0..span + 1.0, 0.0..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(13)
            .x_label_formatter(&|offset: &f64| day_label(start, *offset))
            .x_label_style(date_label_style)
            .y_label_formatter(&|value: &f64| value_label(*value))
            .y_label_style((FONT_FAMILY, 13))
            .x_desc(PRECIPITATION_X_LABEL)
            .y_desc(PRECIPITATION_Y_LABEL)
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(points.iter().filter_map(|(date, precipitation)| {
                let precipitation = (*precipitation)?;
                let x = (*date - start).num_days() as f64;
                Some(Rectangle::new(
                    [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, precipitation)],
                    BAR_COLOR.filled(),
                ))
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    debug!("Rendered precipitation bar chart");
    ChartImage::from_rgb(PRECIPITATION_CHART_SIZE, buffer)
}

/// Draws a 12-bin histogram of the window's temperatures. The bins span the
/// window's own minimum and maximum temperature.
#[instrument(skip(window), fields(rows = window.len()))]
pub fn render_temperature_histogram(window: &LastTwelveMonths) -> Result<ChartImage> {
    ensure_font_registered()?;

    let histogram = Histogram::from_values(&window.temperatures()?, HISTOGRAM_BINS);

    let (width, height) = HISTOGRAM_CHART_SIZE;
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let y_max = (histogram.max_count().max(1) as f64) * 1.05;
        let mut chart = ChartBuilder::on(&root)
            .caption(HISTOGRAM_TITLE, (FONT_FAMILY, 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(histogram.lower()..histogram.upper(), 0.0..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .label_style((FONT_FAMILY, 13))
            .x_label_formatter(&|value: &f64| value_label(*value))
            .y_label_formatter(&|count: &f64| format!("{count:.0}"))
            .x_desc(HISTOGRAM_X_LABEL)
            .y_desc(HISTOGRAM_Y_LABEL)
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()
            .map_err(chart_error)?;

        let bars: Vec<_> = histogram
            .bins()
            .filter(|(_, _, count)| *count > 0)
            .map(|(left, right, count)| [(left, 0.0), (right, count as f64)])
            .collect();

        chart
            .draw_series(
                bars.iter()
                    .map(|corners| Rectangle::new(*corners, BAR_COLOR.filled())),
            )
            .map_err(chart_error)?;
        chart
            .draw_series(
                bars.iter()
                    .map(|corners| Rectangle::new(*corners, BLACK.stroke_width(1))),
            )
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    debug!(
        "Rendered temperature histogram over {} readings",
        histogram.total()
    );
    ChartImage::from_rgb(HISTOGRAM_CHART_SIZE, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::Observation;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample_window() -> LastTwelveMonths {
        let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let observations: Vec<_> = (0..60)
            .map(|day| {
                Observation::new(
                    "USC00519281",
                    start + Duration::days(day),
                    Some((day % 7) as f64 * 0.1),
                    Some(60.0 + (day % 20) as f64),
                )
            })
            .collect();
        LastTwelveMonths::from_observations(&observations).unwrap()
    }

    fn decoded_dimensions(chart: &ChartImage) -> (u32, u32) {
        let image = image::load_from_memory(chart.png_bytes()).unwrap();
        (image.width(), image.height())
    }

    #[test]
    fn bar_chart_is_a_png_of_the_expected_size() {
        let chart = render_precipitation_bar_chart(&sample_window()).unwrap();

        assert!(chart.png_bytes().starts_with(&PNG_SIGNATURE));
        assert_eq!(decoded_dimensions(&chart), PRECIPITATION_CHART_SIZE);
    }

    #[test]
    fn histogram_is_a_png_of_the_expected_size() {
        let chart = render_temperature_histogram(&sample_window()).unwrap();

        assert!(chart.png_bytes().starts_with(&PNG_SIGNATURE));
        assert_eq!(decoded_dimensions(&chart), HISTOGRAM_CHART_SIZE);
    }

    #[test]
    fn readings_without_values_still_render() {
        let date = NaiveDate::from_ymd_opt(2017, 8, 23).unwrap();
        let window =
            LastTwelveMonths::from_observations(&[Observation::new("A", date, None, None)])
                .unwrap();

        assert!(render_precipitation_bar_chart(&window).is_ok());
        assert!(render_temperature_histogram(&window).is_ok());
    }

    #[test]
    fn base64_round_trips_to_png_bytes() {
        let chart = render_temperature_histogram(&sample_window()).unwrap();
        let decoded = STANDARD.decode(chart.to_base64()).unwrap();

        assert_eq!(decoded, chart.png_bytes());
    }

    #[test]
    fn full_year_with_several_stations_renders() {
        let start = NaiveDate::from_ymd_opt(2016, 8, 23).unwrap();
        let observations: Vec<_> = (0..=365)
            .flat_map(|day| {
                ["USC00519397", "USC00513117", "USC00519281"]
                    .into_iter()
                    .map(move |station| {
                        Observation::new(
                            station,
                            start + Duration::days(day),
                            Some((day % 11) as f64 * 0.37),
                            Some(58.0 + (day % 25) as f64),
                        )
                    })
            })
            .collect();
        let window = LastTwelveMonths::from_observations(&observations).unwrap();
        assert_eq!(window.len(), 366 * 3);

        let chart = render_precipitation_bar_chart(&window).unwrap();
        assert_eq!(decoded_dimensions(&chart), PRECIPITATION_CHART_SIZE);
    }

    #[test]
    fn axis_values_print_one_decimal() {
        assert_eq!(value_label(0.0), "0.0");
        assert_eq!(value_label(2.3456), "2.3");
        assert_eq!(value_label(6.66), "6.7");
    }

    #[test]
    fn labels_offsets_as_dates() {
        let start = NaiveDate::from_ymd_opt(2016, 8, 23).unwrap();
        assert_eq!(day_label(start, 0.0), "2016-08-23");
        assert_eq!(day_label(start, 365.0), "2017-08-23");
        assert_eq!(day_label(start, 9.6), "2016-09-02");
    }
}
