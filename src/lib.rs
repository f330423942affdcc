//! Renders fingerprinter benchmark results as SVG scatter charts.
//!
//! Each results file yields one chart plotting query speed and store speed
//! against the size of the searchable index at measurement time. Every render
//! call owns its drawing area, so charts can never pick up series, captions,
//! or legend entries from an earlier render.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::debug;
use plotters::coord::ranged1d::{AsRangedCoord, Ranged, ValueFormatter};
use plotters::prelude::*;

mod error;
mod results;

pub use error::{Error, Result};
pub use results::SpeedSeries;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const QUERY_COLOUR: RGBColor = hexcolour!(0x1F77B4);
const STORE_COLOUR: RGBColor = hexcolour!(0xFF7F0E);

const POINT_SIZE: u32 = 3;

/// Options for one rendered chart.
pub struct ChartSpec {
    caption: String,
    x_desc: String,
    y_desc: String,
    size: (u32, u32),
    log_x: bool,
}

impl ChartSpec {
    /// Defaults match the benchmark charts: index size on a logarithmic
    /// x-axis, throughput on a linear y-axis.
    pub fn new(caption: impl AsRef<str>) -> Self {
        Self {
            caption: caption.as_ref().to_owned(),
            x_desc: "Index size (s)".to_owned(),
            y_desc: "Processing speed (s of audio processed / s)".to_owned(),
            size: (1080, 720),
            log_x: true,
        }
    }

    pub fn x_desc(&mut self, x_desc: impl AsRef<str>) -> &mut Self {
        self.x_desc = x_desc.as_ref().to_owned();
        self
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = y_desc.as_ref().to_owned();
        self
    }

    pub fn size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    pub fn linear_x(&mut self) -> &mut Self {
        self.log_x = false;
        self
    }
}

/// Draws the two scatter series for one results file and writes the chart to
/// `path` as SVG. The chart is staged in a sibling temporary file and renamed
/// into place after a successful flush, so a failed render leaves nothing at
/// the destination.
pub fn plot_speeds(series: &SpeedSeries, spec: &ChartSpec, path: &Path) -> Result<()> {
    let (x_range, y_range) = axis_ranges(series);
    debug!(
        "{}: x range {:?}, y range {:?}",
        path.display(),
        x_range,
        y_range
    );

    let staging = staging_path(path);
    let drawn = if spec.log_x {
        render_scatter(series, spec, &staging, path, x_range.log_scale(), y_range)
    } else {
        render_scatter(series, spec, &staging, path, x_range, y_range)
    };

    if let Err(err) = drawn {
        let _ = fs::remove_file(&staging);
        return Err(err);
    }

    fs::rename(&staging, path)?;

    Ok(())
}

fn render_scatter<X>(
    series: &SpeedSeries,
    spec: &ChartSpec,
    svg_path: &Path,
    chart_path: &Path,
    x_range: X,
    y_range: Range<f64>,
) -> Result<()>
where
    X: AsRangedCoord<Value = f64>,
    <X as AsRangedCoord>::CoordDescType: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let root = SVGBackend::new(svg_path, spec.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| render_error(chart_path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.caption, ("sans-serif", 32))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| render_error(chart_path, e))?;

    chart
        .configure_mesh()
        .x_desc(&spec.x_desc)
        .y_desc(&spec.y_desc)
        .draw()
        .map_err(|e| render_error(chart_path, e))?;

    let query = series
        .index_sizes
        .iter()
        .zip(&series.query_speeds)
        .map(|(&x, &y)| Circle::new((x, y), POINT_SIZE, QUERY_COLOUR.filled()));
    chart
        .draw_series(query)
        .map_err(|e| render_error(chart_path, e))?
        .label("Query speed")
        .legend(|(x, y)| Circle::new((x + 10, y), POINT_SIZE, QUERY_COLOUR.filled()));

    let store = series
        .index_sizes
        .iter()
        .zip(&series.store_speeds)
        .map(|(&x, &y)| Circle::new((x, y), POINT_SIZE, STORE_COLOUR.filled()));
    chart
        .draw_series(store)
        .map_err(|e| render_error(chart_path, e))?
        .label("Store speed")
        .legend(|(x, y)| Circle::new((x + 10, y), POINT_SIZE, STORE_COLOUR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .border_style(&BLACK)
        .draw()
        .map_err(|e| render_error(chart_path, e))?;

    root.present().map_err(|e| render_error(chart_path, e))?;

    Ok(())
}

// Padded to keep edge points off the plot border. An empty series still gets
// a valid chart with placeholder ranges.
fn axis_ranges(series: &SpeedSeries) -> (Range<f64>, Range<f64>) {
    if series.is_empty() {
        return (1.0..1000.0, 0.0..1.0);
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for &x in &series.index_sizes {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
    }

    let mut y_max = f64::NEG_INFINITY;
    for &y in series.query_speeds.iter().chain(&series.store_speeds) {
        y_max = y_max.max(y);
    }

    // A non-positive lower bound breaks the log x-axis.
    let x_lo = (x_min * 0.8).max(f64::MIN_POSITIVE);
    let y_hi = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    (x_lo..x_max * 1.25, 0.0..y_hi)
}

fn render_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Render {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}
