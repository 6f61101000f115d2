// src/render/chart.rs
//
// Server-side SVG charts. Every renderer takes a finished table and returns
// markup; an empty table still draws the frame with a notice.

use crate::pipeline::{AggregateResult, CorrelationMatrix};
use maud::{html, Markup};

pub const ACCENT: &str = "#FF5A5F";
const PALETTE: [&str; 5] = ["#FF5A5F", "#00A699", "#FC642D", "#484848", "#767676"];
const EMPTY_NOTICE: &str = "No listings match the current selection.";

fn px(v: f64) -> String {
    format!("{v:.1}")
}

fn series_color(i: usize, series: usize) -> &'static str {
    if series == 1 {
        ACCENT
    } else {
        PALETTE[i % PALETTE.len()]
    }
}

fn tick_label(v: f64, max: f64) -> String {
    if max >= 10.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

fn legend(series: &[String], x: f64, y: f64) -> Markup {
    html! {
        @if series.len() > 1 {
            g class="legend" {
                @for (i, name) in series.iter().enumerate() {
                    rect x=(px(x)) y=(px(y + i as f64 * 18.0)) width="12" height="12"
                        fill=(series_color(i, series.len())) {}
                    text x=(px(x + 18.0)) y=(px(y + i as f64 * 18.0 + 10.0)) font-size="11" { (name) }
                }
            }
        }
    }
}

fn frame(title: &str, width: f64, height: f64, body: Markup) -> Markup {
    html! {
        figure class="chart" {
            svg xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {} {}", px(width), px(height)))
                role="img"
                aria-label=(title)
            {
                text x=(px(width / 2.0)) y="22" text-anchor="middle" font-size="15" font-weight="600" { (title) }
                (body)
            }
        }
    }
}

/// Bar chart over an aggregate: one bar per group, or one cluster per group
/// when the aggregate carries several series.
pub struct BarChart<'a> {
    title: String,
    x_label: &'a str,
    y_label: &'a str,
    data: &'a AggregateResult,
    horizontal: bool,
    value_labels: bool,
}

impl<'a> BarChart<'a> {
    pub fn new(title: impl Into<String>, data: &'a AggregateResult) -> Self {
        Self {
            title: title.into(),
            x_label: "",
            y_label: "",
            data,
            horizontal: false,
            value_labels: false,
        }
    }

    pub fn axes(mut self, x_label: &'a str, y_label: &'a str) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }

    /// Categories on the y axis, values growing to the right.
    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    /// Print each bar's value (two decimals) at its end.
    pub fn value_labels(mut self) -> Self {
        self.value_labels = true;
        self
    }

    pub fn render(&self) -> Markup {
        if self.horizontal {
            self.render_horizontal()
        } else {
            self.render_vertical()
        }
    }

    fn render_vertical(&self) -> Markup {
        let (width, height) = (680.0, 440.0);
        let (left, right, top, bottom) = (70.0, 140.0, 40.0, 120.0);
        let plot_w = width - left - right;
        let plot_h = height - top - bottom;

        let max = self.data.max_value().filter(|m| *m > 0.0).unwrap_or(1.0);
        let n = self.data.groups.len().max(1) as f64;
        let k = self.data.series.len().max(1);
        let group_w = plot_w / n;
        let bar_w = group_w * 0.8 / k as f64;

        let body = html! {
            @for i in 0..=5 {
                @let v = max * i as f64 / 5.0;
                @let y = top + plot_h - plot_h * i as f64 / 5.0;
                line x1=(px(left)) x2=(px(left + plot_w)) y1=(px(y)) y2=(px(y)) stroke="#e5e7eb" {}
                text x=(px(left - 6.0)) y=(px(y + 4.0)) text-anchor="end" font-size="10" { (tick_label(v, max)) }
            }
            @for (gi, group) in self.data.groups.iter().enumerate() {
                @let gx = left + group_w * gi as f64 + group_w * 0.1;
                @for (si, value) in group.values.iter().enumerate() {
                    @if let Some(v) = value {
                        @let h = plot_h * v.max(0.0) / max;
                        rect x=(px(gx + bar_w * si as f64)) y=(px(top + plot_h - h))
                            width=(px(bar_w)) height=(px(h))
                            fill=(series_color(si, k))
                        {
                            title { (group.key) " / " (self.data.series[si]) ": " (format!("{v:.2}")) }
                        }
                        @if self.value_labels {
                            text x=(px(gx + bar_w * (si as f64 + 0.5))) y=(px(top + plot_h - h - 4.0))
                                text-anchor="middle" font-size="10" { (format!("{v:.2}")) }
                        }
                    }
                }
                @let lx = left + group_w * (gi as f64 + 0.5);
                @let ly = top + plot_h + 14.0;
                text x=(px(lx)) y=(px(ly)) text-anchor="end" font-size="10"
                    transform=(format!("rotate(-45 {} {})", px(lx), px(ly))) { (group.key) }
            }
            line x1=(px(left)) x2=(px(left)) y1=(px(top)) y2=(px(top + plot_h)) stroke="#374151" {}
            line x1=(px(left)) x2=(px(left + plot_w)) y1=(px(top + plot_h)) y2=(px(top + plot_h)) stroke="#374151" {}
            text x=(px(left + plot_w / 2.0)) y=(px(height - 8.0)) text-anchor="middle" font-size="12" { (self.x_label) }
            text x="16" y=(px(top + plot_h / 2.0)) text-anchor="middle" font-size="12"
                transform=(format!("rotate(-90 16 {})", px(top + plot_h / 2.0))) { (self.y_label) }
            (legend(&self.data.series, left + plot_w + 16.0, top))
            @if self.data.is_empty() {
                text x=(px(left + plot_w / 2.0)) y=(px(top + plot_h / 2.0)) text-anchor="middle" font-size="13" fill="#6b7280" { (EMPTY_NOTICE) }
            }
        };

        frame(&self.title, width, height, body)
    }

    fn render_horizontal(&self) -> Markup {
        let row_h = 26.0;
        let (left, right, top, bottom) = (180.0, 80.0, 44.0, 50.0);
        let width = 760.0;
        let plot_w = width - left - right;
        let plot_h = row_h * self.data.groups.len().max(1) as f64;
        let height = top + plot_h + bottom;
        let max = self.data.max_value().filter(|m| *m > 0.0).unwrap_or(1.0);

        let body = html! {
            @for (gi, group) in self.data.groups.iter().enumerate() {
                @let y = top + row_h * gi as f64;
                text x=(px(left - 8.0)) y=(px(y + row_h * 0.65)) text-anchor="end" font-size="11" { (group.key) }
                @if let Some(v) = group.values.first().copied().flatten() {
                    @let w = plot_w * v.max(0.0) / max;
                    rect x=(px(left)) y=(px(y + 3.0)) width=(px(w)) height=(px(row_h - 6.0)) fill=(ACCENT) {
                        title { (group.key) ": " (format!("{v:.2}")) }
                    }
                    @if self.value_labels {
                        text x=(px(left + w + 4.0)) y=(px(y + row_h * 0.65)) font-size="11" { (format!("{v:.2}")) }
                    }
                }
            }
            line x1=(px(left)) x2=(px(left)) y1=(px(top)) y2=(px(top + plot_h)) stroke="#374151" {}
            text x=(px(left + plot_w / 2.0)) y=(px(height - 14.0)) text-anchor="middle" font-size="12" { (self.x_label) }
            text x="16" y=(px(top + plot_h / 2.0)) text-anchor="middle" font-size="12"
                transform=(format!("rotate(-90 16 {})", px(top + plot_h / 2.0))) { (self.y_label) }
            @if self.data.is_empty() {
                text x=(px(left + plot_w / 2.0)) y=(px(top + row_h * 0.65)) text-anchor="middle" font-size="13" fill="#6b7280" { (EMPTY_NOTICE) }
            }
        };

        frame(&self.title, width, height, body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub series: usize,
}

pub struct ScatterPlot<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub series: &'a [String],
    pub points: &'a [ScatterPoint],
}

impl ScatterPlot<'_> {
    pub fn render(&self) -> Markup {
        let (width, height) = (680.0, 440.0);
        let (left, right, top, bottom) = (70.0, 150.0, 40.0, 60.0);
        let plot_w = width - left - right;
        let plot_h = height - top - bottom;

        let span = |vals: &mut dyn Iterator<Item = f64>| {
            let (lo, hi) = vals.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
            if lo > hi {
                (0.0, 1.0)
            } else if lo == hi {
                (lo - 1.0, hi + 1.0)
            } else {
                (lo, hi)
            }
        };
        let (x0, x1) = span(&mut self.points.iter().map(|p| p.x));
        let (y0, y1) = span(&mut self.points.iter().map(|p| p.y));
        let sx = |x: f64| left + plot_w * (x - x0) / (x1 - x0);
        let sy = |y: f64| top + plot_h - plot_h * (y - y0) / (y1 - y0);
        let k = self.series.len().max(1);

        let body = html! {
            @for i in 0..=4 {
                @let fx = x0 + (x1 - x0) * i as f64 / 4.0;
                @let fy = y0 + (y1 - y0) * i as f64 / 4.0;
                text x=(px(sx(fx))) y=(px(top + plot_h + 16.0)) text-anchor="middle" font-size="10" { (tick_label(fx, x1)) }
                text x=(px(left - 6.0)) y=(px(sy(fy) + 4.0)) text-anchor="end" font-size="10" { (tick_label(fy, y1)) }
            }
            @for p in self.points {
                circle cx=(px(sx(p.x))) cy=(px(sy(p.y))) r="3.5" fill-opacity="0.6"
                    fill=(series_color(p.series, k)) {}
            }
            line x1=(px(left)) x2=(px(left)) y1=(px(top)) y2=(px(top + plot_h)) stroke="#374151" {}
            line x1=(px(left)) x2=(px(left + plot_w)) y1=(px(top + plot_h)) y2=(px(top + plot_h)) stroke="#374151" {}
            text x=(px(left + plot_w / 2.0)) y=(px(height - 12.0)) text-anchor="middle" font-size="12" { (self.x_label) }
            text x="16" y=(px(top + plot_h / 2.0)) text-anchor="middle" font-size="12"
                transform=(format!("rotate(-90 16 {})", px(top + plot_h / 2.0))) { (self.y_label) }
            (legend(self.series, left + plot_w + 16.0, top))
            @if self.points.is_empty() {
                text x=(px(left + plot_w / 2.0)) y=(px(top + plot_h / 2.0)) text-anchor="middle" font-size="13" fill="#6b7280" { (EMPTY_NOTICE) }
            }
        };

        frame(self.title, width, height, body)
    }
}

/// Light-to-dark blue ramp for `t` in [0, 1].
fn blues(t: f64) -> String {
    const STOPS: [(f64, [f64; 3]); 3] = [
        (0.0, [247.0, 251.0, 255.0]),
        (0.5, [107.0, 174.0, 214.0]),
        (1.0, [8.0, 48.0, 107.0]),
    ];
    let t = t.clamp(0.0, 1.0);
    let (lo, hi) = if t <= 0.5 {
        (STOPS[0], STOPS[1])
    } else {
        (STOPS[1], STOPS[2])
    };
    let f = (t - lo.0) / (hi.0 - lo.0);
    let c: Vec<u8> = (0..3)
        .map(|i| (lo.1[i] + (hi.1[i] - lo.1[i]) * f).round() as u8)
        .collect();
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

/// Annotated correlation heatmap. Colours span the smallest to the largest
/// coefficient in the matrix.
pub fn heatmap(title: &str, matrix: &CorrelationMatrix) -> Markup {
    let n = matrix.labels.len();
    let cell = 72.0;
    let (left, top, bottom, right) = (150.0, 40.0, 140.0, 20.0);
    let width = left + cell * n as f64 + right;
    let height = top + cell * n as f64 + bottom;

    let defined: Vec<f64> = matrix.values.iter().flatten().flatten().copied().collect();
    let vmin = defined.iter().copied().fold(f64::INFINITY, f64::min);
    let vmax = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scale = |v: f64| {
        if vmax > vmin {
            (v - vmin) / (vmax - vmin)
        } else {
            1.0
        }
    };

    let body = html! {
        @for (r, label) in matrix.labels.iter().enumerate() {
            text x=(px(left - 8.0)) y=(px(top + cell * (r as f64 + 0.55))) text-anchor="end" font-size="11" { (label) }
            @for c in 0..n {
                @let x = left + cell * c as f64;
                @let y = top + cell * r as f64;
                @match matrix.get(r, c) {
                    Some(v) => {
                        @let t = scale(v);
                        rect x=(px(x)) y=(px(y)) width=(px(cell)) height=(px(cell))
                            fill=(blues(t)) stroke="#ffffff" stroke-width="1" {}
                        text x=(px(x + cell / 2.0)) y=(px(y + cell / 2.0 + 4.0)) text-anchor="middle" font-size="12"
                            fill=(if t > 0.6 { "#ffffff" } else { "#111827" }) { (format!("{v:.2}")) }
                    }
                    None => {
                        rect x=(px(x)) y=(px(y)) width=(px(cell)) height=(px(cell))
                            fill="#e5e7eb" stroke="#ffffff" stroke-width="1" {}
                        text x=(px(x + cell / 2.0)) y=(px(y + cell / 2.0 + 4.0)) text-anchor="middle" font-size="11" fill="#6b7280" { "n/a" }
                    }
                }
            }
        }
        @for (c, label) in matrix.labels.iter().enumerate() {
            @let lx = left + cell * (c as f64 + 0.5);
            @let ly = top + cell * n as f64 + 12.0;
            text x=(px(lx)) y=(px(ly)) text-anchor="end" font-size="11"
                transform=(format!("rotate(-45 {} {})", px(lx), px(ly))) { (label) }
        }
    };

    frame(title, width, height, body)
}
