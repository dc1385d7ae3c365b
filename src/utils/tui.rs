//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use std::time::Duration;

use terminal_size::{terminal_size, Width};

use crate::registry::Lab;
use crate::utils::runner::ResultSet;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Human-friendly duration with a unit chosen by magnitude
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs >= 1.0 {
        format!("{:.3} s", secs)
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else if secs >= 1e-6 {
        format!("{:.3} µs", secs * 1e6)
    } else {
        format!("{} ns", d.as_nanos())
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Algorithm Lab Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print lab info box
pub fn print_lab_info_box(lab: &dyn Lab, sizes: &[usize], repeats: usize) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let algorithms: Vec<_> = lab.algorithms().iter().map(|a| a.key).collect();
    let name_line = format!("Lab:        {}", lab.name());
    let desc_line = lab.description();
    let algo_line = format!("Algorithms: {}", algorithms.join(", "));
    let size_line = format!(
        "Sizes:      {} ({} to {}), best of {}",
        sizes.len(),
        sizes.first().copied().unwrap_or(0),
        sizes.last().copied().unwrap_or(0),
        repeats
    );

    let content_width = [
        name_line.chars().count(),
        desc_line.chars().count(),
        algo_line.chars().count(),
        size_line.chars().count(),
    ]
    .iter()
    .copied()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let line = |text: &str| {
        println!(
            "│ {:<width$} │",
            truncate(text, content_width),
            width = content_width
        )
    };

    println!("┌{}┐", border);
    line(name_line.as_str());
    line(desc_line);
    println!("├{}┤", border);
    line(algo_line.as_str());
    line(size_line.as_str());
    println!("└{}┘", border);
    println!();
}

/// Print the timings of one algorithm.
///
/// "Growth" is the time ratio to the previous size; the first row has none.
pub fn print_results_table(set: &ResultSet) {
    if set.samples.is_empty() {
        return;
    }

    let table_width = get_term_width().min(60).saturating_sub(2);

    println!("  {} [{}]", set.title, set.key);
    println!("  {}", "─".repeat(table_width));
    println!("  {:>10} {:>16} {:>10}", "n", "Best time", "Growth");
    println!("  {}", "─".repeat(table_width));

    let mut previous: Option<Duration> = None;
    for sample in &set.samples {
        let growth = match previous {
            Some(prev) if !prev.is_zero() => {
                format!("{:.2}x", sample.elapsed.as_secs_f64() / prev.as_secs_f64())
            }
            _ => "-".to_string(),
        };
        println!(
            "  {:>10} {:>16} {:>10}",
            sample.size,
            format_duration(sample.elapsed),
            growth
        );
        previous = Some(sample.elapsed);
    }
    println!();
}

/// Listing lines for one lab: its name, then one line per algorithm
fn lab_listing(lab: &dyn Lab) -> Vec<String> {
    let mut lines = vec![format!("  {:<12} - {}", lab.name(), lab.description())];
    lines.extend(
        lab.algorithms()
            .iter()
            .map(|algo| format!("      {:<16} {}", algo.key, algo.title)),
    );
    lines
}

/// Print the algorithms of the lab this binary runs
pub fn print_lab_algorithms(lab: &dyn Lab) {
    println!("Algorithms:");
    println!();
    for line in lab_listing(lab) {
        println!("{}", line);
    }
}
