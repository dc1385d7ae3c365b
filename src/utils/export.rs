//! Report outputs: CSV, LaTeX table and PNG chart per algorithm, plus one
//! comparison chart per lab.
//!
//! Every file is created with truncation, so a second run replaces the first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::BenchConfig;
use crate::error::{Error, Result};
use crate::utils::plot::{
    write_chart, ChartSpec, ChartStyle, Rasterizer, Series, YScale, COMPARISON_SIZE, SINGLE_SIZE,
};
use crate::utils::runner::ResultSet;

/// `fast_doubling` -> `Fast Doubling`
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write `n,time_s` rows, `\n`-terminated, seconds as plain decimals
pub fn write_csv<W: Write>(out: &mut W, rows: &[(usize, f64)]) -> std::io::Result<()> {
    writeln!(out, "n,time_s")?;
    for (n, seconds) in rows {
        writeln!(out, "{},{}", n, seconds)?;
    }
    Ok(())
}

/// Write a LaTeX `table` float holding a two-column `tabular`
pub fn write_latex_table<W: Write>(
    out: &mut W,
    key: &str,
    rows: &[(usize, f64)],
) -> std::io::Result<()> {
    writeln!(out, "\\begin{{table}}[H]")?;
    writeln!(out, "\\centering")?;
    writeln!(out, "\\caption{{{} Results}}", title_case(key))?;
    writeln!(out, "\\begin{{tabular}}{{rr}}")?;
    writeln!(out, "\\toprule")?;
    writeln!(out, "n & time (s)\\\\")?;
    writeln!(out, "\\midrule")?;
    for (n, seconds) in rows {
        writeln!(out, "{} & {:.6}\\\\", n, seconds)?;
    }
    writeln!(out, "\\bottomrule")?;
    writeln!(out, "\\end{{tabular}}")?;
    writeln!(out, "\\end{{table}}")?;
    Ok(())
}

/// Create (or truncate) `path` and fill it through `body`
fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(path, e))?;
    tracing::info!(path = %path.display(), "wrote");
    Ok(())
}

/// Writes a lab's report files under `results/` and `figures/`
pub struct Exporter {
    results_dir: PathBuf,
    figures_dir: PathBuf,
    style: ChartStyle,
    rasterizer: Rasterizer,
}

impl Exporter {
    /// Create the output directories if absent
    pub fn new(config: &BenchConfig, style: ChartStyle) -> Result<Self> {
        let results_dir = config.results_dir();
        let figures_dir = config.figures_dir();
        for dir in [&results_dir, &figures_dir] {
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }

        Ok(Self {
            results_dir,
            figures_dir,
            style,
            rasterizer: Rasterizer::new(),
        })
    }

    pub fn csv_path(&self, key: &str) -> PathBuf {
        self.results_dir.join(format!("{}.csv", key))
    }

    pub fn table_path(&self, key: &str) -> PathBuf {
        self.results_dir.join(format!("{}_table.tex", key))
    }

    pub fn figure_path(&self, key: &str) -> PathBuf {
        self.figures_dir.join(format!("{}.png", key))
    }

    pub fn comparison_path(&self) -> PathBuf {
        self.figures_dir.join("comparison.png")
    }

    /// CSV, LaTeX table and single-series chart for one algorithm
    pub fn export(&self, set: &ResultSet) -> Result<()> {
        let rows = set.rows();

        write_file(&self.csv_path(set.key), |w| write_csv(w, &rows))?;
        write_file(&self.table_path(set.key), |w| {
            write_latex_table(w, set.key, &rows)
        })?;

        let spec = ChartSpec {
            title: set.title,
            x_label: self.style.x_label,
            y_label: "Time (s)",
            y_scale: YScale::Linear,
            size: SINGLE_SIZE,
            legend: false,
        };
        let path = self.figure_path(set.key);
        write_chart(&self.rasterizer, &spec, &[Series::from_results(set)], &path)?;
        tracing::info!(path = %path.display(), "wrote");
        Ok(())
    }

    /// Overlay every algorithm on `figures/comparison.png`
    pub fn export_comparison(&self, sets: &[ResultSet]) -> Result<()> {
        let y_label = match self.style.comparison_y_scale {
            YScale::Linear => "Time (s)",
            YScale::Log => "Time (s, log scale)",
        };
        let spec = ChartSpec {
            title: self.style.comparison_title,
            x_label: self.style.x_label,
            y_label,
            y_scale: self.style.comparison_y_scale,
            size: COMPARISON_SIZE,
            legend: true,
        };
        let series: Vec<Series> = sets.iter().map(Series::from_results).collect();

        let path = self.comparison_path();
        write_chart(&self.rasterizer, &spec, &series, &path)?;
        tracing::info!(path = %path.display(), "wrote");
        Ok(())
    }
}
