use colored::Colorize;
use std::fmt::{self, Write as _};
use std::sync::{OnceLock, RwLock};

use chart_domain::{DonutChart, PieChart, ProjectionChart, RenderedPoint, RingSeries};

const HIDDEN_LABEL: &str = "-";

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if !prefs.color_enabled {
        colored::control::set_override(false);
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Success => format!("[ok] {text}"),
    };

    if !prefs.color_enabled {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    println!("{}", apply_style(kind, message, &prefs));
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Text preview of both rings, one line per slice with its label decision.
pub fn render_donut_preview(chart: &DonutChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "variant: {}  surface width: {}", chart.variant, chart.surface_width);
    render_ring(&mut out, &chart.outer);
    render_ring(&mut out, &chart.inner);
    out
}

/// Text preview of a single-ring pie.
pub fn render_pie_preview(chart: &PieChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "variant: {}", chart.variant);
    let _ = writeln!(out, "{}", chart.series_name);
    render_points(&mut out, &chart.points);
    out
}

fn render_ring(out: &mut String, ring: &RingSeries) {
    let _ = writeln!(out, "{} ({})", ring.name, ring.size);
    render_points(out, &ring.points);
}

fn render_points(out: &mut String, points: &[RenderedPoint]) {
    for point in points {
        let label = point.label.as_deref().unwrap_or(HIDDEN_LABEL);
        let _ = writeln!(out, "  {:<20} {:>8}%  {}", point.name, point.value, label);
    }
}

/// Year-by-category table for a projection chart.
pub fn render_projection_table(chart: &ProjectionChart) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<15}", chart.y_axis_title);
    for year in chart.years() {
        let _ = write!(out, "{:>10}", year);
    }
    out.push('\n');
    for line in &chart.series {
        let _ = write!(out, "{:<15}", line.name);
        for value in &line.data {
            let _ = write!(out, "{:>10.2}", value);
        }
        out.push('\n');
    }
    out
}
