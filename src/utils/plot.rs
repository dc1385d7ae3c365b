//! Line charts.
//!
//! Charts are drawn with `plotters` into an in-memory SVG and rasterised to
//! PNG with `resvg`. Text uses whatever system fonts `fontdb` can find; with
//! none installed the labels are dropped and the chart is still written.

use std::path::Path;
use std::sync::Arc;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use resvg::{tiny_skia, usvg};

use crate::error::{Error, Result};
use crate::utils::runner::ResultSet;

/// Y-axis scale of a chart
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YScale {
    Linear,
    Log,
}

/// Per-lab chart settings
#[derive(Clone, Copy, Debug)]
pub struct ChartStyle {
    pub x_label: &'static str,
    pub comparison_title: &'static str,
    pub comparison_y_scale: YScale,
}

pub const SINGLE_SIZE: (u32, u32) = (1400, 800);
pub const COMPARISON_SIZE: (u32, u32) = (1600, 900);

/// Floor for log-scale values, a zero reading would otherwise be -inf
const LOG_FLOOR_SECONDS: f64 = 1e-9;

/// Everything needed to draw one chart
pub struct ChartSpec<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub y_scale: YScale,
    pub size: (u32, u32),
    /// Draw a legend with the series titles
    pub legend: bool,
}

/// One line on a chart
pub struct Series<'a> {
    pub label: &'a str,
    pub points: Vec<(f64, f64)>,
}

impl<'a> Series<'a> {
    pub fn from_results(set: &'a ResultSet) -> Self {
        Self {
            label: set.title,
            points: set
                .rows()
                .into_iter()
                .map(|(n, seconds)| (n as f64, seconds))
                .collect(),
        }
    }
}

fn to_plot_y(value: f64, scale: YScale) -> f64 {
    match scale {
        YScale::Linear => value,
        YScale::Log => value.max(LOG_FLOOR_SECONDS).log10(),
    }
}

/// Data bounds with a little headroom, never empty
fn bounds(values: impl Iterator<Item = f64>, pad_low: bool) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = if hi > lo { hi - lo } else { hi.abs().max(1.0) };
    let low = if pad_low { lo - span * 0.05 } else { lo.min(0.0) };
    (low, hi + span * 0.05)
}

/// Draw `series` into an SVG document.
///
/// Log-scale charts plot `log10(seconds)` on a linear axis and label the
/// ticks with the original powers of ten.
pub fn render_svg(
    spec: &ChartSpec<'_>,
    series: &[Series<'_>],
) -> std::result::Result<String, DrawingAreaErrorKind<std::io::Error>> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, spec.size).into_drawing_area();
        root.fill(&WHITE)?;

        let plotted: Vec<Vec<(f64, f64)>> = series
            .iter()
            .map(|s| {
                s.points
                    .iter()
                    .map(|&(x, y)| (x, to_plot_y(y, spec.y_scale)))
                    .collect()
            })
            .collect();

        let (x_min, x_max) = bounds(plotted.iter().flatten().map(|p| p.0), false);
        let (y_min, y_max) = bounds(
            plotted.iter().flatten().map(|p| p.1),
            spec.y_scale == YScale::Log,
        );

        let mut chart = ChartBuilder::on(&root)
            .caption(spec.title, ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        let y_formatter = |v: &f64| match spec.y_scale {
            YScale::Linear => format!("{:.3}", v),
            YScale::Log => format!("{:.0e}", 10f64.powf(*v)),
        };

        chart
            .configure_mesh()
            .x_desc(spec.x_label)
            .y_desc(spec.y_label)
            .y_label_formatter(&y_formatter)
            .x_label_formatter(&|v| format!("{:.0}", v))
            .label_style(("sans-serif", 18))
            .axis_desc_style(("sans-serif", 22))
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.25))
            .draw()?;

        for (idx, (s, points)) in series.iter().zip(&plotted).enumerate() {
            let color = Palette99::pick(idx).to_rgba();

            let anno = chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(3)))?;
            if spec.legend {
                anno.label(s.label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(3))
                });
            }

            chart.draw_series(points.iter().map(|&p| Circle::new(p, 5, color.filled())))?;
        }

        if spec.legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font(("sans-serif", 20))
                .background_style(WHITE.mix(0.85))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;
    }
    Ok(svg)
}

/// SVG to PNG conversion with a font database loaded once
pub struct Rasterizer {
    options: usvg::Options<'static>,
    has_fonts: bool,
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        Self::with_fontdb(fontdb)
    }

    pub fn with_fontdb(fontdb: usvg::fontdb::Database) -> Self {
        let has_fonts = fontdb.len() > 0;
        if has_fonts {
            tracing::debug!(faces = fontdb.len(), "loaded system fonts");
        } else {
            tracing::warn!("no system fonts found, chart text will be omitted");
        }

        let mut options = usvg::Options::default();
        options.fontdb = Arc::new(fontdb);
        Self { options, has_fonts }
    }

    pub fn has_fonts(&self) -> bool {
        self.has_fonts
    }

    /// Rasterise `svg` and write it to `path`, replacing any existing file
    pub fn write_png(&self, svg: &str, path: &Path) -> Result<()> {
        let tree = usvg::Tree::from_str(svg, &self.options).map_err(|e| Error::chart(path, e))?;

        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or_else(|| Error::chart(path, "zero-sized canvas"))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap.save_png(path).map_err(|e| Error::chart(path, e))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `series` and write the PNG
pub fn write_chart(
    rasterizer: &Rasterizer,
    spec: &ChartSpec<'_>,
    series: &[Series<'_>],
    path: &Path,
) -> Result<()> {
    let svg = render_svg(spec, series).map_err(|e| Error::chart(path, e))?;
    rasterizer.write_png(&svg, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(scale: YScale, legend: bool) -> ChartSpec<'static> {
        ChartSpec {
            title: "Test Chart",
            x_label: "n",
            y_label: "Time (s)",
            y_scale: scale,
            size: (640, 360),
            legend,
        }
    }

    #[test]
    fn test_render_svg_contains_title_and_legend() {
        let series = vec![
            Series {
                label: "First",
                points: vec![(1.0, 0.001), (2.0, 0.004)],
            },
            Series {
                label: "Second",
                points: vec![(1.0, 0.002), (2.0, 0.003)],
            },
        ];
        let svg = render_svg(&spec(YScale::Linear, true), &series).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Test Chart"));
        assert!(svg.contains("Second"));
    }

    #[test]
    fn test_log_scale_survives_zero_times() {
        let series = vec![Series {
            label: "Zero",
            points: vec![(5.0, 0.0), (10.0, 0.0)],
        }];
        assert!(render_svg(&spec(YScale::Log, false), &series).is_ok());
    }

    #[test]
    fn test_bounds_never_empty() {
        assert_eq!(bounds(std::iter::empty(), false), (0.0, 1.0));
        let (lo, hi) = bounds([2.0, 2.0].into_iter(), true);
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn test_write_chart_without_fonts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.png");
        let rasterizer = Rasterizer::with_fontdb(usvg::fontdb::Database::new());
        assert!(!rasterizer.has_fonts());

        let series = vec![Series {
            label: "Only",
            points: vec![(1.0, 0.5), (2.0, 0.25)],
        }];
        write_chart(&rasterizer, &spec(YScale::Log, true), &series, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_chart_creates_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let series = vec![Series {
            label: "Only",
            points: vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)],
        }];

        write_chart(&Rasterizer::new(), &spec(YScale::Linear, false), &series, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
